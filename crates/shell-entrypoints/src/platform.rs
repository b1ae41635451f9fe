//! Platform selection for the seams `shell-core` defines.
//!
//! The application constructs its state over these aliases and stays free of
//! `cfg` switching.

#[cfg(target_os = "android")]
pub type PlatformNativeSplash = crate::android::splash::AndroidSplash;
#[cfg(target_os = "android")]
pub type PlatformPermissionApi = crate::android::permissions::AndroidPermissionApi;
#[cfg(target_os = "android")]
pub type PlatformPageEngine = crate::android::webview::AndroidWebViewEngine;

/// Show a user-facing notice natively, returning whether the platform did.
///
/// The Android activity draws it above the WebView layer, which covers the
/// GL surface (and any egui windows) once the hosted page is up. A JNI
/// failure falls back to the caller's egui rendering.
#[cfg(target_os = "android")]
pub fn show_native_notice(title: &str, message: &str) -> bool {
    match crate::android::show_notice(title, message) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!("could not show notice through the activity: {err}");
            false
        }
    }
}

/// Desktop has no occlusion problem; the caller draws an egui window.
#[cfg(not(target_os = "android"))]
pub fn show_native_notice(_title: &str, _message: &str) -> bool {
    false
}

#[cfg(not(target_os = "android"))]
pub type PlatformNativeSplash = crate::desktop::DesktopSplash;
#[cfg(not(target_os = "android"))]
pub type PlatformPermissionApi = crate::desktop::DesktopPermissionApi;
#[cfg(not(target_os = "android"))]
pub type PlatformPageEngine = crate::desktop::SystemBrowserEngine;
