//! Application-lifecycle context bridging host events to registered handlers.
//!
//! The host adapter owns one [`AppLifecycle`], forwards its native events to the `emit_*`
//! methods, and applies the returned [`ExitDecision`]. Handlers run synchronously on the
//! event-loop thread in registration order.

use std::rc::Rc;

use tracing::debug;

use crate::{ExitDecision, WindowHost};

type Handler = Box<dyn Fn()>;
type ExitHandler = Box<dyn Fn() -> ExitDecision>;

/// Registry of lifecycle callbacks plus a view of the host's open windows.
pub struct AppLifecycle {
    windows: Rc<dyn WindowHost>,
    ready: Vec<Handler>,
    activate: Vec<Handler>,
    all_windows_closed: Vec<ExitHandler>,
}

impl AppLifecycle {
    /// Creates an empty lifecycle context over `windows`.
    pub fn new(windows: Rc<dyn WindowHost>) -> Self {
        Self {
            windows,
            ready: Vec::new(),
            activate: Vec::new(),
            all_windows_closed: Vec::new(),
        }
    }

    /// Number of windows the host currently has open.
    pub fn window_count(&self) -> usize {
        self.windows.window_count()
    }

    /// Registers a handler for the one-time "host ready" event.
    pub fn on_ready(&mut self, handler: impl Fn() + 'static) {
        self.ready.push(Box::new(handler));
    }

    /// Registers a handler for application reactivation (dock or taskbar click).
    pub fn on_activate(&mut self, handler: impl Fn() + 'static) {
        self.activate.push(Box::new(handler));
    }

    /// Registers a handler deciding what happens once the last window closes.
    ///
    /// Registering any handler replaces the host default of quitting: the process then exits
    /// only if at least one handler returns [`ExitDecision::Quit`].
    pub fn on_all_windows_closed(&mut self, handler: impl Fn() -> ExitDecision + 'static) {
        self.all_windows_closed.push(Box::new(handler));
    }

    /// Dispatches the "host ready" event.
    pub fn emit_ready(&self) {
        debug!(event = "lifecycle.ready", handlers = self.ready.len());
        for handler in &self.ready {
            handler();
        }
    }

    /// Dispatches the reactivation event.
    pub fn emit_activate(&self) {
        debug!(
            event = "lifecycle.activate",
            handlers = self.activate.len(),
            window_count = self.window_count()
        );
        for handler in &self.activate {
            handler();
        }
    }

    /// Dispatches the all-windows-closed event and returns the combined decision.
    pub fn emit_all_windows_closed(&self) -> ExitDecision {
        if self.all_windows_closed.is_empty() {
            debug!(event = "lifecycle.all_windows_closed", handlers = 0);
            return ExitDecision::Quit;
        }

        let decision = self
            .all_windows_closed
            .iter()
            .map(|handler| handler())
            .fold(ExitDecision::StayResident, |acc, next| {
                if next == ExitDecision::Quit {
                    ExitDecision::Quit
                } else {
                    acc
                }
            });
        debug!(
            event = "lifecycle.all_windows_closed",
            handlers = self.all_windows_closed.len(),
            decision = decision.as_str()
        );
        decision
    }
}
