//! The application shell: window provisioning and reactions to host lifecycle events.

use std::{cell::Cell, rc::Rc, sync::Arc};

use tracing::{debug, error, info};

use crate::{
    intercept_window_open, window_open_handler, AppLifecycle, ExitDecision, ExternalUrlService,
    Platform, ShellError, WindowConfig, WindowHost, WindowLabel, WindowOpenResponse,
};

#[derive(Clone)]
/// Host services injected into the [`Shell`].
pub struct ShellServices {
    /// Window provisioning surface of the host runtime.
    pub windows: Rc<dyn WindowHost>,
    /// Operating-system URL handler, shared with every window's open-request handler.
    pub external_urls: Arc<dyn ExternalUrlService>,
}

/// Owns the window configuration and implements the shell's lifecycle contract.
///
/// State machine: no window, then [`Shell::initialize`] or [`Shell::on_activate`] creates one;
/// when the last window closes [`Shell::on_all_windows_closed`] either quits or leaves the
/// process idling with no windows. At most one window per activation is not enforced.
pub struct Shell {
    services: ShellServices,
    platform: Platform,
    config: WindowConfig,
    ready: Cell<bool>,
}

impl Shell {
    /// Creates a shell using the fixed [`WindowConfig::default`] configuration.
    pub fn new(services: ShellServices, platform: Platform) -> Self {
        Self::with_config(services, platform, WindowConfig::default())
    }

    /// Creates a shell with an explicit window configuration.
    pub fn with_config(services: ShellServices, platform: Platform, config: WindowConfig) -> Self {
        Self {
            services,
            platform,
            config,
            ready: Cell::new(false),
        }
    }

    /// Configuration every window is built from.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Platform the quit policy is evaluated against.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Whether [`Shell::initialize`] has run.
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Handles host readiness: creates the first window and loads the entry document.
    pub fn initialize(&self) -> Result<WindowLabel, ShellError> {
        self.ready.set(true);
        info!(
            event = "shell.initialize",
            platform = self.platform.as_str()
        );
        self.create_window()
    }

    /// Handles reactivation: recreates a window only when none are open.
    ///
    /// Returns `Ok(None)` when nothing was created, either because a window already exists or
    /// because the host has not signalled readiness yet.
    pub fn on_activate(&self) -> Result<Option<WindowLabel>, ShellError> {
        if !self.is_ready() {
            debug!(event = "shell.activate.ignored", reason = "not_ready");
            return Ok(None);
        }

        let window_count = self.services.windows.window_count();
        if window_count > 0 {
            debug!(event = "shell.activate.ignored", window_count);
            return Ok(None);
        }

        self.create_window().map(Some)
    }

    /// Handles the last window closing.
    ///
    /// Requests process exit unless the platform keeps apps resident without windows.
    pub fn on_all_windows_closed(&self) -> ExitDecision {
        let decision = ExitDecision::for_platform(self.platform);
        info!(
            event = "shell.all_windows_closed",
            platform = self.platform.as_str(),
            decision = decision.as_str()
        );
        if decision == ExitDecision::Quit {
            self.services.windows.quit();
        }
        decision
    }

    /// Handles a page request to open `url` in a new window.
    ///
    /// Always denies the in-app window and forwards `url` to the OS handler. Windows created by
    /// this shell carry the same behavior through their [`crate::WindowOpenHandler`].
    pub fn on_window_open_request(&self, url: &str) -> WindowOpenResponse {
        intercept_window_open(self.services.external_urls.as_ref(), url)
    }

    /// Registers this shell's handlers on `lifecycle`.
    pub fn attach(self: &Rc<Self>, lifecycle: &mut AppLifecycle) {
        let shell = Rc::clone(self);
        lifecycle.on_ready(move || {
            if let Err(err) = shell.initialize() {
                error!(event = "shell.initialize.failed", error = %err);
            }
        });

        let shell = Rc::clone(self);
        lifecycle.on_activate(move || {
            if let Err(err) = shell.on_activate() {
                error!(event = "shell.activate.failed", error = %err);
            }
        });

        let shell = Rc::clone(self);
        lifecycle.on_all_windows_closed(move || shell.on_all_windows_closed());
    }

    fn create_window(&self) -> Result<WindowLabel, ShellError> {
        let on_open = window_open_handler(Arc::clone(&self.services.external_urls));
        let label = self.services.windows.create_window(&self.config, on_open)?;
        info!(
            event = "shell.window_created",
            label = %label,
            document = %self.config.entry_document,
            config = %self.config.snapshot()
        );
        Ok(label)
    }
}
