//! Tauri-backed window provisioning.

use std::{cell::Cell, path::PathBuf};

use shell_host::{
    window_label, Rgba, ShellError, WebPreferences, WindowConfig, WindowHost, WindowLabel,
    WindowOpenHandler, WindowOpenResponse,
};
use tauri::{
    image::Image, menu::Menu, webview::NewWindowResponse, window::Color, AppHandle, Manager,
    Runtime, WebviewUrl, WebviewWindowBuilder,
};
use tracing::{info, warn};

/// Arguments Tauri passes to WebView2 by default; overriding browser args drops them otherwise.
const WEBVIEW2_DEFAULT_ARGS: &str =
    "--disable-features=msWebOOUI,msPdfOOUI,msSmartScreenProtection";

/// Window host over a running Tauri application.
pub(crate) struct TauriWindowHost<R: Runtime> {
    app: AppHandle<R>,
    created: Cell<usize>,
}

impl<R: Runtime> TauriWindowHost<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self {
            app,
            created: Cell::new(0),
        }
    }

    fn next_label(&self) -> String {
        let seq = self.created.get();
        self.created.set(seq + 1);
        window_label(seq)
    }

    fn load_icon(&self, path: &str) -> Option<Image<'static>> {
        let Some(asset) = self.app.asset_resolver().get(path.to_string()) else {
            warn!(event = "desktop.icon.missing", path);
            return None;
        };
        match Image::from_bytes(asset.bytes()) {
            Ok(icon) => Some(icon),
            Err(err) => {
                warn!(event = "desktop.icon.undecodable", path, error = %err);
                None
            }
        }
    }
}

impl<R: Runtime> WindowHost for TauriWindowHost<R> {
    fn window_count(&self) -> usize {
        self.app.webview_windows().len()
    }

    fn create_window(
        &self,
        config: &WindowConfig,
        on_open: WindowOpenHandler,
    ) -> Result<WindowLabel, ShellError> {
        let label = self.next_label();
        let creation_error = |reason: String| ShellError::WindowCreation {
            label: label.clone(),
            reason,
        };

        let mut builder = WebviewWindowBuilder::new(
            &self.app,
            label.clone(),
            WebviewUrl::App(PathBuf::from(&config.entry_document)),
        )
        .title(&config.title)
        .inner_size(f64::from(config.width), f64::from(config.height))
        .background_color(tauri_color(config.background_color))
        .on_new_window(move |url, _features| match on_open(url.as_str()) {
            WindowOpenResponse::Deny => NewWindowResponse::Deny,
        });

        if !config.auto_hide_menu_bar {
            let menu = Menu::default(&self.app).map_err(|err| creation_error(err.to_string()))?;
            builder = builder.menu(menu);
        }

        if let Some(icon) = self.load_icon(&config.icon_path) {
            builder = builder
                .icon(icon)
                .map_err(|err| creation_error(err.to_string()))?;
        }

        #[cfg(windows)]
        if let Some(args) = webview2_browser_args(&config.web_preferences) {
            builder = builder.additional_browser_args(&args);
        }

        builder
            .build()
            .map_err(|err| creation_error(err.to_string()))?;
        info!(
            event = "desktop.window.built",
            label = %label,
            web_security = config.web_preferences.web_security
        );
        Ok(WindowLabel(label))
    }

    // Called from the last-window-closed `ExitRequested` handler on quitting platforms, where
    // this queues a second `ExitRequested { code: Some(0) }` that `should_prevent_exit` lets
    // through. The already-running exit is unaffected.
    fn quit(&self) {
        self.app.exit(0);
    }
}

fn tauri_color(color: Rgba) -> Color {
    Color(color.r, color.g, color.b, color.a)
}

/// WebView2 arguments realizing `prefs`, or `None` when the defaults already do.
#[cfg_attr(not(windows), allow(dead_code))]
fn webview2_browser_args(prefs: &WebPreferences) -> Option<String> {
    if prefs.web_security {
        return None;
    }
    Some(format!(
        "{WEBVIEW2_DEFAULT_ARGS} --disable-web-security --allow-file-access-from-files"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shell_host::BACKGROUND_COLOR;

    #[test]
    fn background_maps_channel_for_channel() {
        assert_eq!(tauri_color(BACKGROUND_COLOR), Color(0x0f, 0x17, 0x2a, 0xff));
    }

    #[test]
    fn disabled_web_security_keeps_default_webview2_args() {
        let args = webview2_browser_args(&WebPreferences::default()).expect("args when disabled");
        assert!(args.starts_with(WEBVIEW2_DEFAULT_ARGS));
        assert!(args.contains("--disable-web-security"));
        assert!(args.contains("--allow-file-access-from-files"));
    }

    #[test]
    fn enforced_web_security_needs_no_extra_args() {
        let prefs = WebPreferences {
            web_security: true,
            ..WebPreferences::default()
        };
        assert_eq!(webview2_browser_args(&prefs), None);
    }
}
