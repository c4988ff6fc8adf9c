use chrono::{Datelike, Utc};
use egui::{Color32, Layout, Response, RichText, Ui};

/// Footer text for `year`.
pub fn copyright(year: i32) -> String {
    format!("© {year} Neighbor Nexus. All rights reserved.")
}

pub fn footer(ui: &mut Ui) -> Response {
    ui.with_layout(Layout::top_down(egui::Align::Center), |ui| {
        ui.add_space(8.0);
        ui.label(RichText::new(copyright(Utc::now().year())).small().color(Color32::WHITE));
        ui.add_space(8.0);
    })
    .response
}
