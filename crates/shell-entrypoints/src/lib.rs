//! Cross-platform entry points for the Tymiqly shell
//!
//! This crate owns everything that touches the platform: logging setup,
//! build-metadata reporting, the native and Android `main` functions, and the
//! per-platform implementations of the seams `shell-core` defines
//! (native-splash control, the OS permission dialogs, the embedded page
//! viewer).
//!
//! The application crate stays platform-agnostic: it constructs its state
//! over the [`platform`] type aliases and calls [`native_main`] /
//! [`android_main`] from its own entry points.

mod logging;
mod metadata;

#[cfg(target_os = "android")]
pub mod android;
#[cfg(not(target_os = "android"))]
pub mod desktop;
pub mod platform;

pub use logging::setup_logging;
pub use metadata::{log_version_info, short_version_info};

/// Entry point for Android
#[cfg(target_os = "android")]
pub fn android_main(
    app_name: &str,
    app: winit::platform::android::activity::AndroidApp,
    app_creator: impl FnOnce(&eframe::CreationContext<'_>) -> Box<dyn eframe::App> + Send + 'static,
) {
    use winit::platform::android::EventLoopBuilderExtAndroid;

    android_logger::init_once(android_logger::Config::default());
    log::info!("Starting {app_name} on Android");

    unsafe {
        // Safe: single-threaded at startup
        std::env::set_var("RUST_BACKTRACE", "full");
    }

    *android::ANDROID_APP.lock().unwrap() = Some(app.clone());

    // One-shot: hold the OS splash placeholder open until the lifecycle
    // releases it after the custom splash. Failure is cosmetic.
    if let Err(err) = android::splash::set_keep_splash(true) {
        log::warn!("could not hold the native splash open (ignored): {err}");
    }

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap();

    let app_name_owned = app_name.to_string();
    rt.block_on(async {
        log_version_info();

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_title(&app_name_owned),
            event_loop_builder: Some(Box::new(move |builder| {
                builder.with_android_app(app);
            })),
            ..Default::default()
        };

        let _ = eframe::run_native(
            &app_name_owned,
            native_options,
            Box::new(move |cc| Ok(app_creator(cc))),
        );
    });
}

/// Entry point for desktop/native platforms
///
/// Desktop builds exist for development; the window defaults to a phone-like
/// portrait shape so the splash and page surface lay out as they do on device.
#[cfg(not(target_arch = "wasm32"))]
pub async fn native_main(
    app_name: &str,
    app_creator: impl FnOnce(&eframe::CreationContext<'_>) -> Box<dyn eframe::App>,
) {
    // Logging MUST be initialized before the first event is emitted.
    logging::setup_logging();

    log_version_info();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 840.0])
            .with_title(app_name),
        ..Default::default()
    };

    let _ = eframe::run_native(
        app_name,
        native_options,
        Box::new(move |cc| Ok(app_creator(cc))),
    );
}
