//! Non-blocking permission denial notices, rendered in egui.
//!
//! A denied capability surfaces as a floating dialog over whatever phase the
//! app is in. Dialogs only inform; dismissing one changes nothing about the
//! rest of the app. On Android these would be occluded once the activity's
//! WebView covers the GL surface, so denials go through the activity's own
//! notice there and land here only when that path fails.

use shell_core::Capability;

/// Open denial dialogs, in the order the denials arrived.
pub struct PermissionAlerts {
    open: Vec<Capability>,
}

impl PermissionAlerts {
    pub fn new() -> Self {
        Self { open: Vec::new() }
    }

    /// Queue a denial notice. At most one per capability.
    pub fn push(&mut self, capability: Capability) {
        if !self.is_open(capability) {
            self.open.push(capability);
        }
    }

    /// Whether a notice for `capability` is currently showing.
    pub fn is_open(&self, capability: Capability) -> bool {
        self.open.contains(&capability)
    }

    pub fn draw(&mut self, ctx: &egui::Context) {
        self.open.retain(|capability| {
            let mut keep = true;
            egui::Window::new(capability.denial_title())
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label(capability.denial_rationale());
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("OK").clicked() {
                            keep = false;
                        }
                    });
                });
            keep
        });
    }
}
