//! Pagination control shown under the table or card stack.

use egui::{Button, ComboBox, Ui};
use nexus_business::grid::{GridEvent, PagerModel};

/// Rows-per-page selector, range summary and Previous/Next buttons.
pub fn render_pagination(
    ui: &mut Ui,
    id_salt: &str,
    pager: &PagerModel,
    events: &mut Vec<GridEvent>,
) {
    ui.horizontal_wrapped(|ui| {
        ui.label("Rows per page:");

        let mut page_size = pager.page_size;
        ComboBox::from_id_salt((id_salt, "page_size"))
            .selected_text(page_size.to_string())
            .width(56.0)
            .show_ui(ui, |ui| {
                for &option in &pager.page_size_options {
                    ui.selectable_value(&mut page_size, option, option.to_string());
                }
            });
        if page_size != pager.page_size {
            events.push(GridEvent::PageSizeChanged(page_size));
        }

        ui.separator();
        ui.label(pager.summary());

        if ui
            .add_enabled(pager.has_previous(), Button::new("Previous"))
            .clicked()
        {
            events.push(GridEvent::PageChanged(pager.page.saturating_sub(1)));
        }
        if ui.add_enabled(pager.has_next(), Button::new("Next")).clicked() {
            events.push(GridEvent::PageChanged(pager.page.saturating_add(1)));
        }
    });
}
