//! The demo user directory.

use egui::{Response, RichText, Ui};
use nexus_business::grid::CardRenderer;
use nexus_business::users::user_card;

use crate::{state::State, widgets};

/// User directory listed through the data table.
pub fn users_page(state: &mut State, ui: &mut Ui) -> Response {
    let viewport = state.viewport;
    let heading_size = if viewport.is_mobile() { 22.0 } else { 28.0 };

    ui.vertical(|ui| {
        ui.label(RichText::new("Users").heading().size(heading_size));
        ui.add_space(12.0);

        let users = &mut state.users;
        widgets::data_table(
            ui,
            "users_table",
            &mut users.grid,
            &users.rows,
            viewport,
            Some(&user_card as &CardRenderer),
        );
    })
    .response
}
