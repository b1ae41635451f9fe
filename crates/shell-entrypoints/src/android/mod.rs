//! Android bridges for the shell's platform seams.
//!
//! Everything here talks to the hosting activity
//! (`com.tymiqly.shell.TymiqlyShellActivity`) over JNI: runtime permission
//! dialogs, native-splash control, and the activity-owned WebView that
//! renders the hosted page. JNI failures surface as `String` errors and are
//! wrapped into `shell_core::ShellError` at each bridge's boundary.

pub mod permissions;
pub mod splash;
pub mod webview;

use jni::{
    JavaVM,
    objects::{JObject, JValue},
    sys,
};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use winit::platform::android::activity::AndroidApp;

/// Handle to the running Android activity, stored by `android_main` before
/// the UI starts so the bridges can reach the JVM from any thread.
pub static ANDROID_APP: Lazy<Mutex<Option<AndroidApp>>> = Lazy::new(|| Mutex::new(None));

/// Attach to the JVM and run `f` with the JNI env and the activity object.
pub(crate) fn with_activity<R>(
    f: impl FnOnce(&mut jni::JNIEnv, &JObject) -> Result<R, String>,
) -> Result<R, String> {
    let guard = ANDROID_APP
        .lock()
        .map_err(|_| "android app handle poisoned".to_string())?;
    let app = guard
        .as_ref()
        .ok_or_else(|| "android app handle not initialized".to_string())?;

    let vm_ptr = app.vm_as_ptr() as *mut *const sys::JNIInvokeInterface_;
    let vm = unsafe { JavaVM::from_raw(vm_ptr) }
        .map_err(|e| format!("failed to get JavaVM: {e:?}"))?;

    let mut env = vm
        .attach_current_thread()
        .map_err(|e| format!("failed to attach thread: {e:?}"))?;

    let activity = unsafe { JObject::from_raw(app.activity_as_ptr() as sys::jobject) };

    f(&mut env, &activity)
}

/// Show a dismissable notice through the activity.
///
/// The activity renders it above the WebView layer, where egui windows are
/// occluded once the hosted page covers the GL surface.
pub(crate) fn show_notice(title: &str, message: &str) -> Result<(), String> {
    with_activity(|env, activity| {
        let title = env
            .new_string(title)
            .map_err(|e| format!("failed to create notice title: {e:?}"))?;
        let message = env
            .new_string(message)
            .map_err(|e| format!("failed to create notice message: {e:?}"))?;
        env.call_method(
            activity,
            "showNotice",
            "(Ljava/lang/String;Ljava/lang/String;)V",
            &[JValue::Object(&title), JValue::Object(&message)],
        )
        .map_err(|e| format!("showNotice failed: {e:?}"))?;
        Ok(())
    })
}
