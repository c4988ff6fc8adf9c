use egui::{Response, Ui};

pub fn dashboard_page(ui: &mut Ui) -> Response {
    super::text_page(ui, "Dashboard", "Welcome to the dashboard!")
}
