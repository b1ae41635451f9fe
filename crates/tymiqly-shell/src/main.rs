#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// The binary uses the library, not duplicate modules
use tymiqly_shell::TymiqlyShellApp;

fn main() {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap();

    rt.block_on(async {
        shell_entrypoints::native_main(tymiqly_shell::APP_NAME, |cc| {
            Box::new(TymiqlyShellApp::new(cc))
        })
        .await;
    });
}
