//! Top bar of the signed-in layout.

use egui::{Align, Button, Color32, Layout, RichText, Ui};
use nexus_business::{Route, Session};

use crate::utils::colors::COLOR_RED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    ToggleNav,
    Navigate(Route),
    Logout,
}

/// Menu toggle and title on the left, greeting and avatar menu on the right.
pub fn top_bar(ui: &mut Ui, session: &Session, nav_visible: bool) -> Option<TopBarAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        let menu_icon = if nav_visible { "✕" } else { "☰" };
        let toggle =
            Button::new(RichText::new(menu_icon).size(20.0).color(Color32::WHITE)).frame(false);
        if ui.add(toggle).on_hover_text("Toggle navigation").clicked() {
            action = Some(TopBarAction::ToggleNav);
        }

        ui.label(
            RichText::new("Neighbor Nexus")
                .strong()
                .size(20.0)
                .color(Color32::WHITE),
        );

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let initial = session.display_initial().to_string();
            ui.menu_button(RichText::new(initial).strong().size(18.0), |ui| {
                if ui.button("Profile").clicked() {
                    action = Some(TopBarAction::Navigate(Route::Profile));
                    ui.close();
                }
                if ui.button(RichText::new("Logout").color(COLOR_RED)).clicked() {
                    action = Some(TopBarAction::Logout);
                    ui.close();
                }
            });

            if let Some(user) = session.user() {
                ui.vertical(|ui| {
                    ui.with_layout(Layout::top_down(Align::Max), |ui| {
                        ui.label(RichText::new("Welcome").small().color(Color32::WHITE));
                        ui.label(RichText::new(&user.email).small().strong().color(Color32::WHITE));
                    });
                });
            }
        });
    });

    action
}
