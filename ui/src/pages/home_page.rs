use egui::{Response, Ui};

pub fn home_page(ui: &mut Ui) -> Response {
    super::text_page(ui, "Home", "Welcome to Neighbor Nexus!")
}
