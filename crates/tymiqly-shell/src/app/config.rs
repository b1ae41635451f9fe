//! Hosted-page configuration, fixed for the life of the app.

use shell_core::PageConfig;

/// The single remote page the shell hosts.
pub const HOSTED_URL: &str = "https://tymiqly.com";

/// Custom User-Agent so the hosted page can recognize the shell.
pub const USER_AGENT: &str = "TymiqlyAppWebView";

/// Viewer settings for the hosted page. The page does its own media capture
/// and geolocation, so the viewer grants it the broadest surface.
pub fn hosted_page() -> PageConfig {
    PageConfig {
        url: HOSTED_URL.to_string(),
        user_agent: USER_AGENT.to_string(),
        allow_mixed_content: true,
        enable_geolocation: true,
        allow_inline_media: true,
        allow_file_access: true,
        allow_any_origin: true,
    }
}
