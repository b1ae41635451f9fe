//! Shell Core - Application Lifecycle Coordination for the Tymiqly Shell
//!
//! This library contains the platform-independent core of the shell: the small
//! state machine that sequences the splash-to-content handoff, fires the
//! camera/location permission requests without ever gating startup on them,
//! and mirrors the embedded page's navigation history so the hardware back
//! button can be routed into it.
//!
//! # Architecture
//!
//! - **[`Lifecycle`]**: top-level `Splashing → Ready` state holder and back-press arbiter
//! - **[`SplashPresenter`]**: entrance animation pair plus the cyclic loader cadence
//! - **[`BrowserHost`]**: navigation-state adapter over the black-box page viewer
//! - **[`request_all`]**: sequential, non-blocking camera-then-location requester
//!
//! Everything here runs on the UI thread's cooperative event loop; there are
//! no locks because there is only one writer per piece of state.

mod browser;
mod lifecycle;
mod permissions;
mod splash;

// Public API exports
pub use browser::{BrowserHost, PageConfig, PageEngine, PageEvent};
pub use lifecycle::{BackAction, BackNavigator, Lifecycle, NativeSplash, Phase};
pub use permissions::{
    Capability, PermissionApi, PermissionOutcome, PermissionStatus, request_all,
};
pub use splash::{LOADER_DOTS, SplashEvent, SplashFrame, SplashPresenter};

/// Error types for platform seam failures
///
/// None of these are fatal: every failure degrades to "keep showing the
/// hosted content" at the boundary that produced it.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("permission API failure: {0}")]
    Permission(String),

    #[error("native splash control failure: {0}")]
    NativeSplash(String),

    #[error("embedded page engine failure: {0}")]
    Engine(String),
}

pub type Result<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_seam() {
        let err = ShellError::NativeSplash("activity detached".into());
        assert!(err.to_string().contains("native splash"));
        let err = ShellError::Engine("no web view".into());
        assert!(err.to_string().contains("page engine"));
    }
}
