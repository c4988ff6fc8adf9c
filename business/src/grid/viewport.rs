//! Coarse viewport classification.

use serde::{Deserialize, Serialize};

/// Widths below which a viewport counts as mobile or tablet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub mobile_max: f32,
    pub tablet_max: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: 600.0,
            tablet_max: 900.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Viewport {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Viewport {
    pub fn classify(width: f32, breakpoints: &Breakpoints) -> Self {
        if width < breakpoints.mobile_max {
            Self::Mobile
        } else if width < breakpoints.tablet_max {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }

    pub fn is_tablet_or_narrower(self) -> bool {
        matches!(self, Self::Mobile | Self::Tablet)
    }
}
