//! Card mode: one framed card per row.

use egui::{Frame, Margin, RichText, Ui};
use nexus_business::grid::Card;

use crate::widgets::cell::{avatar, badge};

fn render_card(ui: &mut Ui, card: &Card) {
    Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .corner_radius(8)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                if let Some(url) = &card.avatar_url {
                    avatar(ui, &card.avatar_alt, 48.0).on_hover_text(url);
                }
                ui.vertical(|ui| {
                    ui.label(RichText::new(&card.title).strong().size(16.0));
                    if let Some(subtitle) = &card.subtitle {
                        ui.weak(subtitle);
                    }
                });
            });

            ui.add_space(6.0);
            for (label, value) in &card.fields {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    ui.strong(format!("{label}:"));
                    ui.label(value);
                });
            }

            if !card.badges.is_empty() {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    for (label, tone) in &card.badges {
                        badge(ui, label, *tone);
                    }
                });
            }
        });
}

/// Stacks one framed card per row of the page.
pub fn render_cards(ui: &mut Ui, cards: &[Card]) {
    for card in cards {
        render_card(ui, card);
        ui.add_space(8.0);
    }
}
