//! Toast overlay stacked from the top-right corner.

use egui::{Align2, Area, Button, Color32, Context, Frame, Id, Margin, Order, RichText};
use nexus_business::ToastQueue;

use crate::utils::colors::severity_color;

const TOAST_WIDTH: f32 = 280.0;

/// Paints every queued toast; the ✖ button dismisses one.
///
/// The stack starts `top` points below the screen edge so it never covers
/// the top bar. Popup menus stay above it.
pub fn toasts(ctx: &Context, queue: &mut ToastQueue, top: f32) {
    if queue.is_empty() {
        return;
    }

    let mut dismissed = None;
    Area::new(Id::new("toasts"))
        .anchor(Align2::RIGHT_TOP, [-12.0, top + 12.0])
        .order(Order::Middle)
        .show(ctx, |ui| {
            ui.set_max_width(TOAST_WIDTH);
            for toast in queue.iter() {
                Frame::NONE
                    .fill(severity_color(toast.severity))
                    .corner_radius(6)
                    .inner_margin(Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.set_width(TOAST_WIDTH);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&toast.message).color(Color32::WHITE));
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                let close = Button::new(RichText::new("✖").color(Color32::WHITE))
                                    .frame(false);
                                if ui.add(close).on_hover_text("Dismiss").clicked() {
                                    dismissed = Some(toast.id);
                                }
                            });
                        });
                    });
                ui.add_space(6.0);
            }
        });

    if let Some(id) = dismissed {
        queue.dismiss(id);
    }
}

#[cfg(test)]
mod toasts_tests {
    use chrono::Utc;
    use egui_kittest::Harness;
    use kittest::Queryable;
    use nexus_business::ToastQueue;

    #[test]
    fn test_toasts_are_shown_and_dismissed() {
        let mut queue = ToastQueue::default();
        queue.success("Saved profile", Utc::now());

        let mut harness = Harness::new_state(
            |ctx, queue: &mut ToastQueue| {
                super::toasts(ctx, queue, 0.0);
            },
            queue,
        );
        harness.step();
        assert!(
            harness.query_by_label_contains("Saved profile").is_some(),
            "Toast message should be visible"
        );

        if let Some(close) = harness.query_by_label("✖") {
            close.click();
        }
        harness.step();
        harness.step();
        assert!(harness.state().is_empty(), "Clicking ✖ should dismiss the toast");
    }
}
