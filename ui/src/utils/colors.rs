//! Shared color constants for the UI.

use egui::Color32;
use nexus_business::Severity;
use nexus_business::grid::Tone;

/// Brand blue used for headings, the top bar and primary badges.
pub const COLOR_PRIMARY: Color32 = Color32::from_rgb(81, 139, 202);

/// Pale blue backdrop of the login page.
pub const COLOR_PRIMARY_PALE: Color32 = Color32::from_rgb(230, 242, 252);

/// Forest green color for success status.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for error status.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber color for warnings.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Sky blue for informational messages.
pub const COLOR_INFO: Color32 = Color32::from_rgb(2, 136, 209);

/// Neutral gray for default badges.
pub const COLOR_NEUTRAL: Color32 = Color32::from_rgb(158, 158, 158);

/// Fill color of a badge.
pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Default => COLOR_NEUTRAL,
        Tone::Primary => COLOR_PRIMARY,
        Tone::Success => COLOR_GREEN,
        Tone::Error => COLOR_RED,
        Tone::Warning => COLOR_AMBER,
        Tone::Info => COLOR_INFO,
    }
}

/// Background color of a toast.
pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Success => COLOR_GREEN,
        Severity::Error => COLOR_RED,
        Severity::Warning => COLOR_AMBER,
        Severity::Info => COLOR_INFO,
    }
}
