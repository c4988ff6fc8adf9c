use egui::{Response, Ui};

pub fn profile_page(ui: &mut Ui) -> Response {
    super::text_page(ui, "Profile", "Your profile information goes here.")
}
