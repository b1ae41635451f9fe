//! Browser host: navigation-state adapter over the embedded page viewer
//!
//! The rendering engine itself is a black box behind [`PageEngine`]; this
//! module owns the authoritative history/loading state derived from its
//! event stream and exposes the guarded backward-navigation command.

use crate::Result;
use crate::lifecycle::BackNavigator;

/// The hosted page target and the viewer settings applied when loading it.
///
/// Fixed for the whole app session: there are no dynamic URL changes.
#[derive(Clone, Debug)]
pub struct PageConfig {
    pub url: String,
    /// Custom User-Agent identifying the app to the hosted page.
    pub user_agent: String,
    pub allow_mixed_content: bool,
    pub enable_geolocation: bool,
    pub allow_inline_media: bool,
    pub allow_file_access: bool,
    /// Permit navigation to any origin inside the viewer.
    pub allow_any_origin: bool,
}

/// Events reported by the embedded viewer, delivered in occurrence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    /// The viewer's history depth changed (any navigation inside the page).
    HistoryChanged { can_go_back: bool },
    /// A content load started.
    LoadStarted,
    /// A content load finished.
    LoadFinished,
}

/// The embedded page viewer.
///
/// Implementations wrap a platform web view; all of them degrade to "no
/// history, not loading" on platform failure rather than erroring upward.
pub trait PageEngine {
    /// Navigate the viewer to the configured page.
    fn load(&mut self, config: &PageConfig) -> Result<()>;

    /// Pop one entry of the viewer's internal history. Callers check
    /// [`BrowserHost::can_go_back`] first; an unguarded call on an empty
    /// history must be a no-op.
    fn go_back(&mut self);

    /// Drain events observed since the last poll, in occurrence order.
    fn poll(&mut self) -> Vec<PageEvent>;
}

/// Owns the navigation state of the embedded viewer and the one-time load.
pub struct BrowserHost<E: PageEngine> {
    engine: E,
    can_go_back: bool,
    loading: bool,
    load_issued: bool,
}

impl<E: PageEngine> BrowserHost<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            can_go_back: false,
            loading: false,
            load_issued: false,
        }
    }

    /// Whether backward history currently exists, per the latest report.
    pub fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    /// Whether a content load is in flight. Informational only; never part
    /// of the back-press logic.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Load the fixed page target. The first call wins; later calls are
    /// ignored since the target never changes within a session.
    pub fn load_once(&mut self, config: &PageConfig) {
        if self.load_issued {
            tracing::debug!("hosted page load already issued, ignoring");
            return;
        }
        self.load_issued = true;
        self.loading = true;
        tracing::info!("loading hosted page {}", config.url);

        if let Err(err) = self.engine.load(config) {
            tracing::warn!("hosted page load failed to start: {err}");
            self.loading = false;
        }
    }

    /// Drain the engine's event stream, apply each event in order, and return
    /// the drained events so the caller can forward history changes to the
    /// lifecycle mirror.
    pub fn pump(&mut self) -> Vec<PageEvent> {
        let events = self.engine.poll();
        for event in &events {
            match *event {
                PageEvent::HistoryChanged { can_go_back } => self.can_go_back = can_go_back,
                PageEvent::LoadStarted => self.loading = true,
                PageEvent::LoadFinished => self.loading = false,
            }
        }
        events
    }

    /// Pop one history entry if any exists; logged no-op otherwise.
    pub fn go_back(&mut self) {
        if !self.can_go_back {
            tracing::debug!("back requested with no page history, ignoring");
            return;
        }
        self.engine.go_back();
    }
}

impl<E: PageEngine> BackNavigator for BrowserHost<E> {
    fn go_back(&mut self) {
        BrowserHost::go_back(self);
    }
}
