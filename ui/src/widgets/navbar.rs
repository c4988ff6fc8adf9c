//! Navigation list shared by the side panel and the mobile drawer.

use egui::{Response, Ui};
use nexus_business::{NAVIGATION, Route};

/// Lists the navigation entries and returns the one clicked, if any.
pub fn navbar(ui: &mut Ui, current: Route) -> (Response, Option<Route>) {
    let mut clicked = None;
    let response = ui
        .vertical(|ui| {
            ui.add_space(8.0);
            for route in NAVIGATION {
                let entry = ui.add_sized(
                    [ui.available_width(), 32.0],
                    egui::Button::selectable(current == route, route.title()),
                );
                if entry.clicked() {
                    clicked = Some(route);
                }
            }
        })
        .response;
    (response, clicked)
}
