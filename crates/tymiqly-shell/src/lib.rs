//! Tymiqly Shell - Application Library
//!
//! This is the main application crate that wires the lifecycle coordinator,
//! the splash presenter, and the hosted page viewer into the platform entry
//! points.

mod app;

pub use app::TymiqlyShellApp;

/// Window title on desktop, activity label on Android.
pub const APP_NAME: &str = "Tymiqly";

/// Entry point for Android
#[cfg(target_os = "android")]
#[unsafe(no_mangle)] // SAFETY: there is no other global function of this name
pub fn android_main(app: winit::platform::android::activity::AndroidApp) {
    shell_entrypoints::android_main(APP_NAME, app, |cc| Box::new(TymiqlyShellApp::new(cc)));
}
