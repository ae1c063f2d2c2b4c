//! Tauri desktop host for the MG Sender Pro shell.
//!
//! This crate adapts Tauri run events onto the toolkit-independent [`shell_host::AppLifecycle`]
//! and implements the shell's host-service contracts over [`tauri::AppHandle`]. The hosted
//! document is the bundled `frontend/` directory.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod external_url;
pub mod logging;
mod window_host;

use std::{rc::Rc, sync::Arc};

use shell_host::{AppLifecycle, ExitDecision, Platform, Shell, ShellServices, WindowHost};
use tauri::RunEvent;
use tracing::info;

use crate::external_url::OpenerExternalUrls;
use crate::window_host::TauriWindowHost;

/// Starts the Tauri desktop host process.
pub fn run() {
    logging::init_logging();

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .build(tauri::generate_context!())
        .expect("mg_sender_desktop failed to build Tauri application");

    let handle = app.handle().clone();
    let windows: Rc<dyn WindowHost> = Rc::new(TauriWindowHost::new(handle.clone()));
    let shell = Rc::new(Shell::new(
        ShellServices {
            windows: Rc::clone(&windows),
            external_urls: Arc::new(OpenerExternalUrls::new(handle)),
        },
        Platform::current(),
    ));
    let mut lifecycle = AppLifecycle::new(windows);
    shell.attach(&mut lifecycle);

    info!(
        event = "desktop.run",
        platform = shell.platform().as_str(),
        version = env!("CARGO_PKG_VERSION")
    );
    app.run(move |_app, event| dispatch_run_event(&lifecycle, event));
}

fn dispatch_run_event(lifecycle: &AppLifecycle, event: RunEvent) {
    match event {
        RunEvent::Ready => lifecycle.emit_ready(),
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => lifecycle.emit_activate(),
        RunEvent::ExitRequested { code, api, .. } => {
            if should_prevent_exit(code, lifecycle) {
                api.prevent_exit();
            }
        }
        _ => {}
    }
}

/// Decides whether an exit request must be cancelled.
///
/// `code` is only `None` when the last window closed; that case consults the lifecycle.
/// Explicit exits carry a code and always proceed.
fn should_prevent_exit(code: Option<i32>, lifecycle: &AppLifecycle) -> bool {
    match code {
        None => lifecycle.emit_all_windows_closed() == ExitDecision::StayResident,
        Some(_) => false,
    }
}
