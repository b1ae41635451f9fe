//! Native splash screen control via the hosting activity.
//!
//! `TymiqlyShellActivity` installs the AndroidX splash screen and exposes
//! `setKeepSplashScreen(boolean)`: `true` holds the OS placeholder open past
//! its auto-hide, `false` releases it. Both directions are cosmetic only, so
//! callers swallow failures.

use super::with_activity;
use jni::objects::JValue;
use shell_core::{NativeSplash, ShellError};

pub(crate) fn set_keep_splash(keep: bool) -> Result<(), String> {
    with_activity(|env, activity| {
        env.call_method(
            activity,
            "setKeepSplashScreen",
            "(Z)V",
            &[JValue::Bool(keep.into())],
        )
        .map_err(|e| format!("setKeepSplashScreen failed: {e:?}"))?;
        Ok(())
    })
}

/// "Hide now" handle passed to the lifecycle.
#[derive(Default)]
pub struct AndroidSplash;

impl AndroidSplash {
    pub fn new() -> Self {
        Self
    }
}

impl NativeSplash for AndroidSplash {
    fn hide(&mut self) -> shell_core::Result<()> {
        set_keep_splash(false).map_err(ShellError::NativeSplash)
    }
}
