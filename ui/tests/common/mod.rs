use egui_kittest::Harness;
use kittest::Queryable;
use nexus_ui::NexusApp;
use nexus_ui::state::State;

/// Frames to run after an interaction so its effects are painted.
pub const SETTLE_FRAMES: usize = 3;

pub const DESKTOP_SIZE: egui::Vec2 = egui::vec2(1400.0, 900.0);
pub const MOBILE_SIZE: egui::Vec2 = egui::vec2(400.0, 800.0);

pub struct TestCtx<'a> {
    harness: Harness<'a, NexusApp>,
}

impl<'a> TestCtx<'a> {
    pub fn new_app(size: egui::Vec2) -> Self {
        let app = NexusApp::new(State::default());
        let harness = Harness::builder().with_size(size).build_eframe(|_| app);
        Self { harness }
    }

    /// Starts already signed in with the demo account.
    #[allow(unused)]
    pub fn signed_in(size: egui::Vec2) -> Self {
        let mut ctx = Self::new_app(size);
        ctx.click("Use Demo Credentials");
        ctx.click("Sign In");
        ctx
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, NexusApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, NexusApp> {
        &self.harness
    }

    pub fn state(&self) -> &State {
        self.harness.state().state()
    }

    pub fn settle(&mut self) {
        for _ in 0..SETTLE_FRAMES {
            self.harness.step();
        }
    }

    /// Clicks the node labeled exactly `label`, then settles.
    pub fn click(&mut self, label: &str) {
        self.harness.step();
        if let Some(node) = self.harness.query_by_label(label) {
            node.click();
        }
        self.settle();
    }

    #[allow(unused)]
    pub fn has_label(&self, label: &str) -> bool {
        self.harness.query_by_label(label).is_some()
    }

    #[allow(unused)]
    pub fn has_label_containing(&self, label: &str) -> bool {
        self.harness.query_by_label_contains(label).is_some()
    }
}
