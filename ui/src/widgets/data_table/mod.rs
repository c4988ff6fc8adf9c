//! Generic data table widget.
//!
//! Paints one frame of a [`GridEngine`]: the table or card stack followed by
//! the pagination control. Interactions are collected while painting and
//! applied to the engine once painting is done.
//!
//! - `table`: header and body in table mode
//! - `cards`: card stack in card mode
//! - `pagination`: rows-per-page selector and page navigation

mod cards;
mod pagination;
mod table;

use egui::{Response, Ui};
use nexus_business::grid::{CardRenderer, GridBody, GridEngine, GridEvent, Row, Viewport};

pub use cards::render_cards;
pub use pagination::render_pagination;
pub use table::render_table;

/// Shows `rows` through `grid` and applies any interaction to it.
pub fn data_table(
    ui: &mut Ui,
    id_salt: &str,
    grid: &mut GridEngine,
    rows: &[Row],
    viewport: Viewport,
    card_renderer: Option<&CardRenderer>,
) -> Response {
    let output = grid.render(rows, viewport, card_renderer);
    let mut events: Vec<GridEvent> = Vec::new();

    let response = ui
        .vertical(|ui| {
            match &output.body {
                GridBody::Cards(cards) => render_cards(ui, cards),
                GridBody::Table { header, rows } => {
                    render_table(ui, id_salt, header, rows, &mut events);
                }
            }
            ui.add_space(8.0);
            render_pagination(ui, id_salt, &output.pager, &mut events);
        })
        .response;

    for event in events {
        grid.apply(event);
    }

    response
}
