//! Logging initialization for native builds.
//!
//! Android builds log through `android_logger` instead (see `android_main`),
//! which routes the `log` facade into logcat.

/// Initialize the tracing subscriber with env-filter support.
///
/// `RUST_LOG` is a debugging affordance only; when unset, a sensible default
/// is applied that keeps the graphics stack quiet.
#[cfg(not(target_arch = "wasm32"))]
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            // Safe: single-threaded at startup
            std::env::set_var("RUST_LOG", "info,wgpu=warn,naga=warn,winit=warn");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
