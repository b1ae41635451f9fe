//! Top-level lifecycle state machine
//!
//! Owns the `Splashing → Ready` phase, the mirrored navigation state used for
//! back-press arbitration, and the one-shot release of the OS-level splash
//! placeholder. All mutation happens through `&mut self` on the UI thread, so
//! the check-then-act in [`Lifecycle::back_pressed`] is atomic by construction.

use crate::Result;

/// Top-level phase of the shell.
///
/// Monotonic: once `Ready`, the shell never returns to `Splashing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The custom splash is on screen; the hosted page is not mounted yet.
    Splashing,
    /// The hosted page is mounted and owns the screen.
    Ready,
}

/// What to do with a hardware back press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackAction {
    /// The press was routed into the embedded page's history; suppress the
    /// OS default behavior.
    Consumed,
    /// No page history to pop; let the OS perform its default action
    /// (typically exiting the app).
    Propagate,
}

/// Control over the OS-level splash placeholder.
///
/// The matching "prevent auto-hide" call happens once in the process entry
/// point, before this type exists.
pub trait NativeSplash {
    /// Hide the native splash now. Failures are cosmetic only.
    fn hide(&mut self) -> Result<()>;
}

/// Backward-navigation command sink, implemented by the browser host.
pub trait BackNavigator {
    fn go_back(&mut self);
}

/// The lifecycle state holder.
///
/// Created at process start in `Splashing`; [`Lifecycle::complete_splash`] is
/// invoked by the splash presenter's completion event and transitions to
/// `Ready` exactly once.
pub struct Lifecycle<S: NativeSplash> {
    phase: Phase,
    /// Read-only mirror of the browser host's history state, adopted via
    /// [`Lifecycle::navigation_changed`].
    can_go_back: bool,
    native_splash: S,
    native_splash_released: bool,
}

impl<S: NativeSplash> Lifecycle<S> {
    pub fn new(native_splash: S) -> Self {
        Self {
            phase: Phase::Splashing,
            can_go_back: false,
            native_splash,
            native_splash_released: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    /// Splash presenter finished: flip to `Ready` and release the native
    /// splash. Safe to call more than once; the release happens once in
    /// effect and a failed release is swallowed (cosmetic only).
    pub fn complete_splash(&mut self) {
        if self.phase == Phase::Splashing {
            self.phase = Phase::Ready;
            tracing::info!("splash finished, handing off to hosted content");
        }

        if !self.native_splash_released {
            self.native_splash_released = true;
            if let Err(err) = self.native_splash.hide() {
                tracing::warn!("native splash release failed (ignored): {err}");
            }
        }
    }

    /// Adopt a new history report from the browser host. Pure state update.
    pub fn navigation_changed(&mut self, can_go_back: bool) {
        self.can_go_back = can_go_back;
    }

    /// Arbitrate a hardware back press.
    ///
    /// Issues exactly one backward-navigation command when the shell is
    /// `Ready` and the mirrored history is non-empty; otherwise reports
    /// [`BackAction::Propagate`] and issues nothing.
    pub fn back_pressed(&mut self, nav: &mut impl BackNavigator) -> BackAction {
        if self.phase == Phase::Ready && self.can_go_back {
            nav.go_back();
            BackAction::Consumed
        } else {
            BackAction::Propagate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShellError;

    struct FakeSplash {
        hide_calls: u32,
        fail: bool,
    }

    impl FakeSplash {
        fn new() -> Self {
            Self {
                hide_calls: 0,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                hide_calls: 0,
                fail: true,
            }
        }
    }

    impl NativeSplash for FakeSplash {
        fn hide(&mut self) -> crate::Result<()> {
            self.hide_calls += 1;
            if self.fail {
                Err(ShellError::NativeSplash("simulated".into()))
            } else {
                Ok(())
            }
        }
    }

    struct FakeNavigator {
        pops: u32,
    }

    impl BackNavigator for FakeNavigator {
        fn go_back(&mut self) {
            self.pops += 1;
        }
    }

    #[test]
    fn test_starts_splashing_with_empty_history() {
        let lifecycle = Lifecycle::new(FakeSplash::new());
        assert_eq!(lifecycle.phase(), Phase::Splashing);
        assert!(!lifecycle.can_go_back());
    }

    #[test]
    fn test_complete_splash_transitions_once() {
        let mut lifecycle = Lifecycle::new(FakeSplash::new());
        lifecycle.complete_splash();
        assert_eq!(lifecycle.phase(), Phase::Ready);

        // Redundant invocations keep the phase and do not re-release.
        lifecycle.complete_splash();
        lifecycle.complete_splash();
        assert_eq!(lifecycle.phase(), Phase::Ready);
        assert_eq!(lifecycle.native_splash.hide_calls, 1);
    }

    #[test]
    fn test_failed_native_release_is_swallowed_and_not_retried() {
        let mut lifecycle = Lifecycle::new(FakeSplash::failing());
        lifecycle.complete_splash();
        assert_eq!(lifecycle.phase(), Phase::Ready);

        lifecycle.complete_splash();
        assert_eq!(lifecycle.native_splash.hide_calls, 1);
    }

    #[test]
    fn test_back_propagates_while_splashing() {
        let mut lifecycle = Lifecycle::new(FakeSplash::new());
        let mut nav = FakeNavigator { pops: 0 };

        // Even with history reported, a press before readiness passes through.
        lifecycle.navigation_changed(true);
        assert_eq!(lifecycle.back_pressed(&mut nav), BackAction::Propagate);
        assert_eq!(nav.pops, 0);
    }

    #[test]
    fn test_back_propagates_without_history() {
        let mut lifecycle = Lifecycle::new(FakeSplash::new());
        let mut nav = FakeNavigator { pops: 0 };

        lifecycle.complete_splash();
        assert_eq!(lifecycle.back_pressed(&mut nav), BackAction::Propagate);
        assert_eq!(nav.pops, 0);
    }

    #[test]
    fn test_back_consumed_pops_exactly_one_entry() {
        let mut lifecycle = Lifecycle::new(FakeSplash::new());
        let mut nav = FakeNavigator { pops: 0 };

        lifecycle.complete_splash();
        lifecycle.navigation_changed(true);
        assert_eq!(lifecycle.back_pressed(&mut nav), BackAction::Consumed);
        assert_eq!(nav.pops, 1);

        // History emptied by the pop: the next press passes through.
        lifecycle.navigation_changed(false);
        assert_eq!(lifecycle.back_pressed(&mut nav), BackAction::Propagate);
        assert_eq!(nav.pops, 1);
    }

    #[test]
    fn test_mirror_tracks_latest_report() {
        let mut lifecycle = Lifecycle::new(FakeSplash::new());
        for reported in [true, false, false, true, false] {
            lifecycle.navigation_changed(reported);
            assert_eq!(lifecycle.can_go_back(), reported);
        }
    }
}
