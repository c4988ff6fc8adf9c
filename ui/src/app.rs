use chrono::Utc;
use egui::{CentralPanel, Frame, Margin, ScrollArea, SidePanel, TopBottomPanel};
use nexus_business::Route;
use nexus_business::grid::Viewport;

use crate::utils::colors::{COLOR_PRIMARY, COLOR_PRIMARY_PALE};
use crate::widgets::TopBarAction;
use crate::{pages, state::State, widgets};

const NAV_WIDTH: f32 = 200.0;

/// The Neighbor Nexus application.
pub struct NexusApp {
    state: State,
}

impl NexusApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Paints the signed-in shell and returns where the top bar ends.
    fn layout(&mut self, ctx: &egui::Context) -> f32 {
        let state = &mut self.state;

        let top_panel = TopBottomPanel::top("top_panel")
            .frame(Frame::NONE.fill(COLOR_PRIMARY).inner_margin(Margin::symmetric(8, 10)))
            .show(ctx, |ui| widgets::top_bar(ui, &state.session, state.nav_visible()));
        let action = top_panel.inner;
        let bar_bottom = top_panel.response.rect.bottom();

        TopBottomPanel::bottom("footer_panel")
            .frame(Frame::NONE.fill(COLOR_PRIMARY))
            .show(ctx, |ui| {
                widgets::footer(ui);
            });

        let mut picked = None;
        if state.viewport.is_mobile() {
            if state.drawer_open {
                egui::Window::new("Navigation")
                    .title_bar(false)
                    .resizable(false)
                    .anchor(egui::Align2::LEFT_TOP, [0.0, 56.0])
                    .fixed_size([NAV_WIDTH, 0.0])
                    .show(ctx, |ui| {
                        picked = widgets::navbar(ui, state.route).1;
                    });
            }
        } else if state.nav_open {
            SidePanel::left("nav_panel")
                .resizable(false)
                .exact_width(NAV_WIDTH)
                .show(ctx, |ui| {
                    picked = widgets::navbar(ui, state.route).1;
                });
        }

        CentralPanel::default()
            .frame(Frame::NONE.fill(COLOR_PRIMARY_PALE).inner_margin(Margin::same(16)))
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| match state.route {
                    Route::Home => {
                        pages::home_page(ui);
                    }
                    Route::Profile => {
                        pages::profile_page(ui);
                    }
                    Route::Dashboard => {
                        pages::dashboard_page(ui);
                    }
                    Route::Users => {
                        pages::users_page(state, ui);
                    }
                    Route::Login => {}
                });
            });

        match action {
            Some(TopBarAction::ToggleNav) => state.toggle_nav(),
            Some(TopBarAction::Navigate(route)) => state.navigate(route),
            Some(TopBarAction::Logout) => state.logout(),
            None => {}
        }
        if let Some(route) = picked {
            state.navigate(route);
        }
        bar_bottom
    }
}

impl eframe::App for NexusApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let width = ctx.available_rect().width();
        self.state.viewport = Viewport::classify(width, &self.state.config.breakpoints);
        self.state.toasts.expire(Utc::now());
        self.state.enforce_auth();

        let toasts_top = if self.state.session.is_authenticated() {
            self.layout(ctx)
        } else {
            CentralPanel::default()
                .frame(Frame::NONE.fill(COLOR_PRIMARY_PALE).inner_margin(Margin::same(16)))
                .show(ctx, |ui| {
                    ScrollArea::vertical().show(ui, |ui| {
                        pages::login_page(&mut self.state, ui);
                    });
                });
            0.0
        };

        widgets::toasts(ctx, &mut self.state.toasts, toasts_top);
        if !self.state.toasts.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
