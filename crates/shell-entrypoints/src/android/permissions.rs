//! Runtime permission dialogs via the hosting activity.
//!
//! The user's decision arrives Java-side only, in
//! `onRequestPermissionsResult`; the activity latches it per request code and
//! the bridge resolves by polling that latch together with
//! `checkSelfPermission`. The latch fires on every denial path, including
//! "don't ask again" and permissions denied in a prior session. There is
//! deliberately no timeout: the UI stays interactive while the task sleeps
//! between polls, and the user can take as long as they like.

use super::with_activity;
use jni::objects::JValue;
use shell_core::{Capability, PermissionApi, PermissionStatus, ShellError};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Permission dialogs backed by the Android activity.
#[derive(Default)]
pub struct AndroidPermissionApi;

impl AndroidPermissionApi {
    pub fn new() -> Self {
        Self
    }
}

fn android_permission(capability: Capability) -> &'static str {
    match capability {
        Capability::Camera => "android.permission.CAMERA",
        Capability::Location => "android.permission.ACCESS_FINE_LOCATION",
    }
}

fn request_code(capability: Capability) -> i32 {
    match capability {
        Capability::Camera => 1001,
        Capability::Location => 1002,
    }
}

fn is_granted(permission: &str) -> Result<bool, String> {
    with_activity(|env, activity| {
        let name = env
            .new_string(permission)
            .map_err(|e| format!("failed to create permission string: {e:?}"))?;
        let granted = env
            .call_method(
                activity,
                "checkSelfPermission",
                "(Ljava/lang/String;)I",
                &[JValue::Object(&name)],
            )
            .and_then(|v| v.i())
            .map_err(|e| format!("checkSelfPermission failed: {e:?}"))?;
        // PackageManager.PERMISSION_GRANTED == 0
        Ok(granted == 0)
    })
}

/// Whether `onRequestPermissionsResult` has fired for this request code.
fn is_request_resolved(code: i32) -> Result<bool, String> {
    with_activity(|env, activity| {
        env.call_method(
            activity,
            "isPermissionRequestResolved",
            "(I)Z",
            &[JValue::Int(code)],
        )
        .and_then(|v| v.z())
        .map_err(|e| format!("isPermissionRequestResolved failed: {e:?}"))
    })
}

fn show_dialog(permission: &str, code: i32) -> Result<(), String> {
    with_activity(|env, activity| {
        let name = env
            .new_string(permission)
            .map_err(|e| format!("failed to create permission string: {e:?}"))?;
        let array = env
            .new_object_array(1, "java/lang/String", &name)
            .map_err(|e| format!("failed to create permission array: {e:?}"))?;
        env.call_method(
            activity,
            "requestPermissions",
            "([Ljava/lang/String;I)V",
            &[JValue::Object(&array), JValue::Int(code)],
        )
        .map_err(|e| format!("requestPermissions failed: {e:?}"))?;
        Ok(())
    })
}

/// Outcome of one poll round: a grant wins outright, a latched resolution
/// without the grant is a denial, anything else keeps polling.
fn poll_outcome(granted: bool, resolved: bool) -> Option<PermissionStatus> {
    if granted {
        Some(PermissionStatus::Granted)
    } else if resolved {
        Some(PermissionStatus::Denied)
    } else {
        None
    }
}

impl PermissionApi for AndroidPermissionApi {
    async fn request(&mut self, capability: Capability) -> shell_core::Result<PermissionStatus> {
        let permission = android_permission(capability);
        let code = request_code(capability);

        if is_granted(permission).map_err(ShellError::Permission)? {
            return Ok(PermissionStatus::Granted);
        }

        show_dialog(permission, code).map_err(ShellError::Permission)?;
        tracing::info!(
            "requested {} permission, awaiting the user's decision",
            capability.label()
        );

        loop {
            tokio::time::sleep(POLL_INTERVAL).await;

            let granted = is_granted(permission).map_err(ShellError::Permission)?;
            let resolved = is_request_resolved(code).map_err(ShellError::Permission)?;
            if let Some(status) = poll_outcome(granted, resolved) {
                return Ok(status);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_keeps_waiting_until_the_activity_resolves() {
        assert_eq!(poll_outcome(false, false), None);
    }

    #[test]
    fn test_resolved_without_grant_is_denial() {
        // Covers every denial path, "don't ask again" and repeated denials
        // across sessions included: the activity latch fires for all of them.
        assert_eq!(poll_outcome(false, true), Some(PermissionStatus::Denied));
    }

    #[test]
    fn test_grant_wins_over_the_latch() {
        assert_eq!(poll_outcome(true, true), Some(PermissionStatus::Granted));
    }
}
