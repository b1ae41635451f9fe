//! Hosted-page surface.
//!
//! On Android the platform web viewer is layered over this panel by the
//! activity, so the panel only paints a quiet backdrop plus a spinner while
//! the first page load is in flight. On desktop the page opens in the system
//! browser and the panel says so.

use shell_core::{BrowserHost, PageEngine};

pub fn draw<E: PageEngine>(ctx: &egui::Context, browser: &BrowserHost<E>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
        .show(ctx, |ui| {
            if browser.loading() {
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Spinner::new().size(32.0));
                });
            } else if cfg!(not(target_os = "android")) {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new("Tymiqly is open in your browser")
                            .color(egui::Color32::from_rgb(71, 85, 105)),
                    );
                });
            }
        });
}
