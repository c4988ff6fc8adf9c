//! Pages module for the application.
//!
//! One page per route:
//! - `login_page`: sign-in form, the only page reachable while signed out
//! - `home_page`, `profile_page`, `dashboard_page`: static content
//! - `users_page`: the demo user directory in a data table

mod dashboard_page;
mod home_page;
mod login_page;
mod profile_page;
mod users_page;

pub use dashboard_page::dashboard_page;
pub use home_page::home_page;
pub use login_page::login_page;
pub use profile_page::profile_page;
pub use users_page::users_page;

use egui::{Response, RichText, Ui};

/// Heading followed by a line of text.
fn text_page(ui: &mut Ui, heading: &str, body: &str) -> Response {
    ui.vertical(|ui| {
        ui.label(RichText::new(heading).heading().size(28.0));
        ui.add_space(12.0);
        ui.label(body);
    })
    .response
}
