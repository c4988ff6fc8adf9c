//! Table mode: header row and body cells.

use egui::{Button, Color32, Frame, Grid, InnerResponse, Margin, RichText, ScrollArea, Ui};
use nexus_business::grid::{Cell, GridEvent, HeaderCell};

use crate::utils::colors::COLOR_PRIMARY;
use crate::widgets::cell::paint_cell;

fn header_frame<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(COLOR_PRIMARY)
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

fn data_frame<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 4))
        .show(ui, add_contents)
}

/// Sortable headers are frameless buttons; the active one carries an arrow.
fn render_header_cell(ui: &mut Ui, cell: &HeaderCell, events: &mut Vec<GridEvent>) {
    header_frame(ui, |ui| {
        if !cell.sortable {
            ui.label(RichText::new(&cell.label).strong().color(Color32::WHITE));
            return;
        }

        let text = if cell.active {
            format!("{} {}", cell.label, cell.direction.arrow())
        } else {
            cell.label.clone()
        };
        let clicked = ui
            .add(Button::new(RichText::new(text).strong().color(Color32::WHITE)).frame(false))
            .on_hover_text(format!("Sort by {}", cell.label))
            .clicked();
        if clicked {
            events.push(GridEvent::SortRequested(cell.id));
        }
    });
}

/// Header row with sortable labels followed by the page rows.
///
/// Header clicks are pushed to `events` as [`GridEvent::SortRequested`].
pub fn render_table(
    ui: &mut Ui,
    id_salt: &str,
    header: &[HeaderCell],
    rows: &[Vec<Cell>],
    events: &mut Vec<GridEvent>,
) {
    ScrollArea::horizontal().id_salt(id_salt).show(ui, |ui| {
        Grid::new(id_salt)
            .num_columns(header.len())
            .striped(true)
            .spacing([0.0, 0.0])
            .min_col_width(48.0)
            .show(ui, |ui| {
                for cell in header {
                    render_header_cell(ui, cell, events);
                }
                ui.end_row();

                for row in rows {
                    for cell in row {
                        data_frame(ui, |ui| paint_cell(ui, cell));
                    }
                    ui.end_row();
                }
            });
    });
}
