//! Desktop development fallbacks for the platform seams.
//!
//! Desktop has no native splash, no runtime permission model, and no embedded
//! WebView surface wired into the GL context, so these implementations keep
//! the shell's control flow intact while delegating page rendering to the
//! system browser.

use shell_core::{
    Capability, NativeSplash, PageConfig, PageEngine, PageEvent, PermissionApi, PermissionStatus,
    ShellError,
};

/// No OS splash placeholder exists on desktop; hiding it is a no-op.
#[derive(Default)]
pub struct DesktopSplash;

impl DesktopSplash {
    pub fn new() -> Self {
        Self
    }
}

impl NativeSplash for DesktopSplash {
    fn hide(&mut self) -> shell_core::Result<()> {
        tracing::debug!("no native splash on desktop, nothing to hide");
        Ok(())
    }
}

/// Desktop grants capabilities implicitly (no runtime dialogs).
#[derive(Default)]
pub struct DesktopPermissionApi;

impl DesktopPermissionApi {
    pub fn new() -> Self {
        Self
    }
}

impl PermissionApi for DesktopPermissionApi {
    async fn request(&mut self, capability: Capability) -> shell_core::Result<PermissionStatus> {
        tracing::debug!(
            "desktop build: {} access implicitly granted",
            capability.label()
        );
        Ok(PermissionStatus::Granted)
    }
}

/// Opens the hosted page in the system browser.
///
/// The external browser owns its own history, so no backward navigation is
/// ever reported and the in-app back press falls through to the OS default.
#[derive(Default)]
pub struct SystemBrowserEngine {
    pending: Vec<PageEvent>,
}

impl SystemBrowserEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageEngine for SystemBrowserEngine {
    fn load(&mut self, config: &PageConfig) -> shell_core::Result<()> {
        open::that_detached(&config.url)
            .map_err(|e| ShellError::Engine(format!("could not open system browser: {e}")))?;
        // The hand-off is instantaneous from the shell's point of view.
        self.pending.push(PageEvent::LoadStarted);
        self.pending.push(PageEvent::LoadFinished);
        Ok(())
    }

    fn go_back(&mut self) {
        tracing::debug!("system browser owns its history, back command ignored");
    }

    fn poll(&mut self) -> Vec<PageEvent> {
        std::mem::take(&mut self.pending)
    }
}
