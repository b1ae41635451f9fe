//! Bridge to the activity-owned WebView rendering the hosted page.
//!
//! The WebView lives in `TymiqlyShellActivity` (layered over the GL surface);
//! Rust drives it with commands and observes it by polling once per UI frame.
//! Polled state is diffed into the ordered event stream `shell-core` expects,
//! and every JNI failure degrades to "no history, not loading".

use super::with_activity;
use jni::objects::JValue;
use shell_core::{PageConfig, PageEngine, PageEvent, ShellError};

/// Embedded page viewer backed by the activity's WebView.
#[derive(Default)]
pub struct AndroidWebViewEngine {
    last_can_go_back: bool,
    last_loading: bool,
}

impl AndroidWebViewEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn query_bool(&self, method: &'static str) -> Result<bool, String> {
        with_activity(|env, activity| {
            env.call_method(activity, method, "()Z", &[])
                .and_then(|v| v.z())
                .map_err(|e| format!("{method} failed: {e:?}"))
        })
    }
}

impl PageEngine for AndroidWebViewEngine {
    fn load(&mut self, config: &PageConfig) -> shell_core::Result<()> {
        with_activity(|env, activity| {
            let url = env
                .new_string(&config.url)
                .map_err(|e| format!("failed to create url string: {e:?}"))?;
            let user_agent = env
                .new_string(&config.user_agent)
                .map_err(|e| format!("failed to create user agent string: {e:?}"))?;

            env.call_method(
                activity,
                "loadHostedPage",
                "(Ljava/lang/String;Ljava/lang/String;ZZZZZ)V",
                &[
                    JValue::Object(&url),
                    JValue::Object(&user_agent),
                    JValue::Bool(config.allow_mixed_content.into()),
                    JValue::Bool(config.enable_geolocation.into()),
                    JValue::Bool(config.allow_inline_media.into()),
                    JValue::Bool(config.allow_file_access.into()),
                    JValue::Bool(config.allow_any_origin.into()),
                ],
            )
            .map_err(|e| format!("loadHostedPage failed: {e:?}"))?;
            Ok(())
        })
        .map_err(ShellError::Engine)
    }

    fn go_back(&mut self) {
        let result = with_activity(|env, activity| {
            env.call_method(activity, "webViewGoBack", "()V", &[])
                .map_err(|e| format!("webViewGoBack failed: {e:?}"))?;
            Ok(())
        });
        if let Err(err) = result {
            tracing::warn!("could not pop web view history: {err}");
        }
    }

    fn poll(&mut self) -> Vec<PageEvent> {
        let can_go_back = self.query_bool("webViewCanGoBack").unwrap_or_else(|err| {
            tracing::trace!("web view history poll failed: {err}");
            false
        });
        let loading = self.query_bool("webViewIsLoading").unwrap_or(false);

        let mut events = Vec::new();
        if loading != self.last_loading {
            self.last_loading = loading;
            events.push(if loading {
                PageEvent::LoadStarted
            } else {
                PageEvent::LoadFinished
            });
        }
        if can_go_back != self.last_can_go_back {
            self.last_can_go_back = can_go_back;
            events.push(PageEvent::HistoryChanged { can_go_back });
        }
        events
    }
}
