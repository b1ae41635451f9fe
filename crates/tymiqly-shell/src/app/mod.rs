//! Main application state and frame loop.
//!
//! Wires the lifecycle coordinator to the platform seams: splash first, then
//! the hosted page, with permission notices floating over either phase.

mod alerts;
mod browser_ui;
mod config;
mod splash_ui;

use alerts::PermissionAlerts;
use instant::Instant;
use shell_core::{
    BackAction, BrowserHost, Capability, Lifecycle, PageEvent, Phase, SplashEvent, SplashPresenter,
    request_all,
};
use shell_entrypoints::platform::{
    PlatformNativeSplash, PlatformPageEngine, PlatformPermissionApi, show_native_notice,
};
use std::time::Duration;
use tokio::sync::mpsc;

/// Repaint cadence while the hosted page is up; navigation state is polled,
/// not pushed, so the page surface wakes on its own.
const READY_REPAINT_INTERVAL: Duration = Duration::from_millis(250);

/// Main application structure
pub struct TymiqlyShellApp {
    lifecycle: Lifecycle<PlatformNativeSplash>,
    splash: Option<SplashPresenter>,
    browser: BrowserHost<PlatformPageEngine>,
    alerts: PermissionAlerts,
    denied_rx: mpsc::UnboundedReceiver<Capability>,
    last_frame: Instant,
}

impl TymiqlyShellApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let denied_rx = Self::spawn_permission_requests(cc.egui_ctx.clone());

        Self {
            lifecycle: Lifecycle::new(PlatformNativeSplash::new()),
            splash: Some(SplashPresenter::new()),
            browser: BrowserHost::new(PlatformPageEngine::new()),
            alerts: PermissionAlerts::new(),
            denied_rx,
            last_frame: Instant::now(),
        }
    }

    /// Kick off the camera-then-location permission sequence.
    ///
    /// Fire-and-forget: the sequence starts at mount, runs once per app
    /// session, and never gates the splash or the page load. Denials come
    /// back over the channel so the frame loop can raise notices.
    fn spawn_permission_requests(
        repaint_ctx: egui::Context,
    ) -> mpsc::UnboundedReceiver<Capability> {
        let (denied_tx, denied_rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            let mut api = PlatformPermissionApi::new();
            let outcome = request_all(&mut api, |capability| {
                if denied_tx.send(capability).is_ok() {
                    repaint_ctx.request_repaint();
                }
            })
            .await;
            tracing::info!(
                "permission requests settled: camera {:?}, location {:?}",
                outcome.camera,
                outcome.location
            );
        });
        denied_rx
    }

    /// Surface denials reported by the permission task, in request order.
    ///
    /// Android shows them through the activity so they stay visible above
    /// the WebView layer; elsewhere they render as egui windows.
    fn drain_denials(&mut self) {
        while let Ok(capability) = self.denied_rx.try_recv() {
            let shown_natively = show_native_notice(
                capability.denial_title(),
                capability.denial_rationale(),
            );
            if !shown_natively {
                self.alerts.push(capability);
            }
        }
    }

    fn frame_delta(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        dt
    }

    /// Route a back press through the lifecycle, in every phase.
    ///
    /// On Android the activity forwards KEYCODE_BACK as an Escape key event,
    /// which doubles as the development shortcut on desktop. Unconsumed
    /// presses close the window, matching the OS default for a single
    /// activity; mid-splash there is never page history, so a press always
    /// falls through to that default.
    fn handle_back_press(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            return;
        }
        match self.lifecycle.back_pressed(&mut self.browser) {
            BackAction::Consumed => {}
            BackAction::Propagate => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn update_splashing(&mut self, ctx: &egui::Context, dt: Duration) {
        let finished = match self.splash.as_mut() {
            Some(presenter) => presenter.advance(dt) == Some(SplashEvent::Finished),
            None => false,
        };

        if let Some(presenter) = &self.splash {
            splash_ui::draw(ctx, &presenter.frame());
        }

        if finished {
            // Ordering matters: flip the phase (and release the native
            // splash) before the page load is issued.
            self.lifecycle.complete_splash();
            self.splash = None;
            self.browser.load_once(&config::hosted_page());
        }

        // Keep the entrance animation and loader cadence moving; one more
        // repaint after finishing lands us in the ready branch.
        ctx.request_repaint();
    }

    fn update_ready(&mut self, ctx: &egui::Context) {
        for event in self.browser.pump() {
            if let PageEvent::HistoryChanged { can_go_back } = event {
                self.lifecycle.navigation_changed(can_go_back);
            }
        }

        browser_ui::draw(ctx, &self.browser);

        ctx.request_repaint_after(READY_REPAINT_INTERVAL);
    }
}

#[profiling::all_functions]
impl eframe::App for TymiqlyShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = self.frame_delta();

        self.drain_denials();
        self.handle_back_press(ctx);

        match self.lifecycle.phase() {
            Phase::Splashing => self.update_splashing(ctx, dt),
            Phase::Ready => self.update_ready(ctx),
        }

        self.alerts.draw(ctx);
    }
}
