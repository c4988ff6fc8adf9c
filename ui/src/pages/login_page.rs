//! Login page for unauthenticated users.
//!
//! Displays the sign-in card centered on the screen, with the demo
//! credentials spelled out above the form.

use egui::{Align, Button, Frame, Key, Layout, Margin, Response, RichText, TextEdit, Ui};
use nexus_business::DEMO_CREDENTIALS;

use crate::state::State;
use crate::utils::colors::{COLOR_INFO, COLOR_PRIMARY, COLOR_RED};

const FORM_WIDTH: f32 = 360.0;

#[derive(Default)]
struct Intent {
    submit: bool,
    fill_demo: bool,
    toggle_password: bool,
}

fn demo_panel(ui: &mut Ui) {
    Frame::NONE
        .stroke(egui::Stroke::new(1.0, COLOR_INFO))
        .corner_radius(6)
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(FORM_WIDTH);
            ui.label(RichText::new("Demo Credentials:").strong());
            ui.label(format!("Email: {}", DEMO_CREDENTIALS.email));
            ui.label(format!("Password: {}", DEMO_CREDENTIALS.password));
        });
}

/// Renders the login page and applies whatever the user did.
pub fn login_page(state: &mut State, ui: &mut Ui) -> Response {
    let mut intent = Intent::default();

    let response = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("Neighbor Nexus").heading().strong().color(COLOR_PRIMARY));
            ui.label("Sign in to your account");
            ui.add_space(16.0);

            if let Some(err) = state.login.error {
                ui.colored_label(COLOR_RED, err.to_string());
                ui.add_space(8.0);
            }

            demo_panel(ui);
            ui.add_space(12.0);

            let form = &mut state.login;
            ui.label("Email Address");
            ui.add(
                TextEdit::singleline(&mut form.input.email)
                    .hint_text("you@example.com")
                    .desired_width(FORM_WIDTH),
            );
            ui.add_space(8.0);

            ui.label("Password");
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - FORM_WIDTH).max(0.0) / 2.0);
                let password = ui.add(
                    TextEdit::singleline(&mut form.input.password)
                        .password(!form.show_password)
                        .desired_width(FORM_WIDTH - 60.0),
                );
                if password.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    intent.submit = true;
                }
                let toggle_text = if form.show_password { "Hide" } else { "Show" };
                if ui.button(toggle_text).clicked() {
                    intent.toggle_password = true;
                }
            });
            ui.add_space(16.0);

            if ui
                .add_sized([FORM_WIDTH, 36.0], Button::new(RichText::new("Sign In").strong()))
                .clicked()
            {
                intent.submit = true;
            }
            ui.add_space(8.0);
            if ui
                .add_sized([FORM_WIDTH, 32.0], Button::new("Use Demo Credentials"))
                .clicked()
            {
                intent.fill_demo = true;
            }
        })
        .response;

    if intent.toggle_password {
        state.login.toggle_password_visibility();
    }
    if intent.fill_demo {
        state.fill_demo_credentials();
    }
    if intent.submit {
        state.submit_login();
    }

    response
}
