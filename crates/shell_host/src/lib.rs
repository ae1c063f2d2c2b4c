//! Toolkit-independent core of the MG Sender Pro desktop shell.
//!
//! This crate owns the fixed window configuration, the platform quit policy, and the
//! [`Shell`] component that reacts to host lifecycle events. Concrete windowing lives behind the
//! [`WindowHost`] and [`ExternalUrlService`] contracts so the shell can be driven by the Tauri
//! host in `mg_sender_desktop` or by the in-memory adapters in tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod external_url;
pub mod lifecycle;
pub mod platform;
pub mod shell;
pub mod window_host;
pub mod window_open;

pub use config::{
    window_label, Rgba, WebPreferences, WindowConfig, APP_TITLE, BACKGROUND_COLOR,
    DEFAULT_HEIGHT, DEFAULT_WIDTH, ENTRY_DOCUMENT, ICON_PATH, MAIN_WINDOW_LABEL,
};
pub use error::ShellError;
pub use external_url::{ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService};
pub use lifecycle::AppLifecycle;
pub use platform::{should_quit_on_all_windows_closed, ExitDecision, Platform};
pub use shell::{Shell, ShellServices};
pub use window_host::{MemoryWindowHost, WindowHost, WindowLabel};
pub use window_open::{
    intercept_window_open, window_open_handler, WindowOpenHandler, WindowOpenResponse,
};
