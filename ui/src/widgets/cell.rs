//! Painting of the grid's displayable values.

use egui::{
    Align2, Color32, FontId, Frame, Margin, Response, RichText, Sense, Ui, Vec2, WidgetInfo,
    WidgetType,
};
use nexus_business::grid::{Cell, Tone};

use crate::utils::colors::{COLOR_PRIMARY, tone_color};

/// Small rounded label.
pub fn badge(ui: &mut Ui, label: &str, tone: Tone) -> Response {
    Frame::NONE
        .fill(tone_color(tone))
        .corner_radius(10)
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(label).small().color(Color32::WHITE));
        })
        .response
}

/// Round avatar showing the first letter of `alt`.
///
/// Images are not fetched; the URL is available on hover.
pub fn avatar(ui: &mut Ui, alt: &str, size: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let initial = alt
        .chars()
        .next()
        .and_then(|first| first.to_uppercase().next())
        .unwrap_or('U');

    let painter = ui.painter();
    painter.circle_filled(rect.center(), size / 2.0, COLOR_PRIMARY);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        initial,
        FontId::proportional(size * 0.45),
        Color32::WHITE,
    );

    response.widget_info(|| WidgetInfo::labeled(WidgetType::Image, true, alt));
    response
}

/// Paints one table cell.
pub fn paint_cell(ui: &mut Ui, cell: &Cell) {
    match cell {
        Cell::Empty => {
            ui.label("");
        }
        Cell::Text(text) => {
            ui.label(text);
        }
        Cell::Badge { label, tone } => {
            badge(ui, label, *tone);
        }
        Cell::Avatar { url, alt } => {
            avatar(ui, alt, 32.0).on_hover_text(url);
        }
    }
}
