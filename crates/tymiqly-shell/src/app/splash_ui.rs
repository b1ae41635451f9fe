//! Custom splash rendering.
//!
//! Pure cosmetics over a [`SplashFrame`] snapshot: soft corner circles, the
//! spring-scaled logo disc, product copy, the three-dot loader, and the
//! footer line. All motion lives in the presenter; this module only paints.

use egui::{Align2, Color32, FontId, pos2, vec2};
use shell_core::{LOADER_DOTS, SplashFrame};

const BLUSH: Color32 = Color32::from_rgb(253, 236, 236);
const DOT_IDLE: Color32 = Color32::from_rgb(251, 202, 202);
const ACCENT: Color32 = Color32::from_rgb(249, 115, 22);
const TITLE: Color32 = Color32::from_rgb(15, 23, 42);
const BODY: Color32 = Color32::from_rgb(71, 85, 105);
const FOOTER: Color32 = Color32::from_rgb(148, 163, 184);

pub fn draw(ctx: &egui::Context, frame: &SplashFrame) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(Color32::WHITE))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            let painter = ui.painter();
            let opacity = frame.opacity;

            // Decorative corner circles, bleeding off-screen.
            painter.circle_filled(rect.right_top() + vec2(30.0, -30.0), 130.0, BLUSH);
            painter.circle_filled(rect.left_bottom() + vec2(-40.0, 40.0), 150.0, BLUSH);

            // Logo disc: scaled by the entrance spring, faded with the page.
            let logo_center = rect.center() - vec2(0.0, 90.0);
            let logo_radius = 72.0 * frame.scale;
            painter.circle_filled(
                logo_center + vec2(0.0, 4.0),
                logo_radius + 6.0,
                Color32::from_black_alpha(18).gamma_multiply(opacity),
            );
            painter.circle_filled(logo_center, logo_radius, Color32::WHITE.gamma_multiply(opacity));
            painter.text(
                logo_center,
                Align2::CENTER_CENTER,
                "T",
                FontId::proportional(58.0 * frame.scale),
                ACCENT.gamma_multiply(opacity),
            );

            painter.text(
                rect.center() + vec2(0.0, 30.0),
                Align2::CENTER_CENTER,
                "Expert Repairs at Your Doorstep",
                FontId::proportional(19.0),
                TITLE.gamma_multiply(opacity),
            );
            painter.text(
                rect.center() + vec2(0.0, 62.0),
                Align2::CENTER_CENTER,
                "Quick Check-In  \u{2022}  Secure Records  \u{2022}  Smart Analytics",
                FontId::proportional(13.0),
                BODY.gamma_multiply(opacity),
            );

            // Loader dots: the active one cycles with the presenter.
            for dot in 0..LOADER_DOTS {
                let center = rect.center() + vec2((dot as f32 - 1.0) * 18.0, 130.0);
                let color = if dot == frame.loader_index { ACCENT } else { DOT_IDLE };
                painter.circle_filled(center, 4.5, color);
            }

            painter.text(
                pos2(rect.center().x, rect.bottom() - 24.0),
                Align2::CENTER_BOTTOM,
                "Powered by Just Repair",
                FontId::proportional(12.0),
                FOOTER,
            );
        });
}
