//! Window provisioning contracts and the in-memory host used by tests.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::{window_label, ShellError, WindowConfig, WindowOpenHandler, WindowOpenResponse};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Host-assigned identifier of one open window.
pub struct WindowLabel(pub String);

impl WindowLabel {
    /// Returns the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host runtime surface the shell uses to inspect and provision windows.
///
/// All calls happen on the host's event-loop thread, so implementations are not required to be
/// `Send` or `Sync`.
pub trait WindowHost {
    /// Number of windows currently open.
    fn window_count(&self) -> usize;

    /// Creates a window from `config` and starts loading its entry document.
    ///
    /// `on_open` must be installed on the window's content and consulted for every request the
    /// page makes to open a new window.
    fn create_window(
        &self,
        config: &WindowConfig,
        on_open: WindowOpenHandler,
    ) -> Result<WindowLabel, ShellError>;

    /// Asks the host to terminate the process.
    fn quit(&self);
}

#[derive(Clone)]
struct MemoryWindow {
    label: WindowLabel,
    config: WindowConfig,
    on_open: WindowOpenHandler,
}

impl fmt::Debug for MemoryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryWindow")
            .field("label", &self.label)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
struct MemoryWindowState {
    open: Vec<MemoryWindow>,
    created: Vec<MemoryWindow>,
    quit_requests: usize,
    fail_creation: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory window host that records provisioning instead of drawing anything.
pub struct MemoryWindowHost {
    inner: Rc<RefCell<MemoryWindowState>>,
}

impl MemoryWindowHost {
    /// Makes every later [`WindowHost::create_window`] call fail with `reason`.
    pub fn fail_creation(&self, reason: impl Into<String>) {
        self.inner.borrow_mut().fail_creation = Some(reason.into());
    }

    /// Simulates the user closing the window labelled `label`.
    ///
    /// Returns `true` when a window was closed and it was the last one open.
    pub fn close_window(&self, label: &WindowLabel) -> bool {
        let mut state = self.inner.borrow_mut();
        let before = state.open.len();
        state.open.retain(|window| &window.label != label);
        before != state.open.len() && state.open.is_empty()
    }

    /// Simulates the user closing every open window.
    pub fn close_all(&self) {
        self.inner.borrow_mut().open.clear();
    }

    /// Simulates page content in window `label` asking to open `url` in a new window.
    ///
    /// Runs the handler installed at creation; returns `None` when no such window is open.
    pub fn request_window_open(
        &self,
        label: &WindowLabel,
        url: &str,
    ) -> Option<WindowOpenResponse> {
        let on_open = self
            .inner
            .borrow()
            .open
            .iter()
            .find(|window| &window.label == label)
            .map(|window| window.on_open.clone())?;
        Some(on_open(url))
    }

    /// Labels of windows currently open.
    pub fn open_labels(&self) -> Vec<WindowLabel> {
        self.inner
            .borrow()
            .open
            .iter()
            .map(|window| window.label.clone())
            .collect()
    }

    /// Every window created so far, including closed ones, with its configuration.
    pub fn created(&self) -> Vec<(WindowLabel, WindowConfig)> {
        self.inner
            .borrow()
            .created
            .iter()
            .map(|window| (window.label.clone(), window.config.clone()))
            .collect()
    }

    /// Number of times [`WindowHost::quit`] was called.
    pub fn quit_requests(&self) -> usize {
        self.inner.borrow().quit_requests
    }
}

impl WindowHost for MemoryWindowHost {
    fn window_count(&self) -> usize {
        self.inner.borrow().open.len()
    }

    fn create_window(
        &self,
        config: &WindowConfig,
        on_open: WindowOpenHandler,
    ) -> Result<WindowLabel, ShellError> {
        let mut state = self.inner.borrow_mut();
        let label = WindowLabel(window_label(state.created.len()));
        if let Some(reason) = &state.fail_creation {
            return Err(ShellError::WindowCreation {
                label: label.0,
                reason: reason.clone(),
            });
        }
        let window = MemoryWindow {
            label: label.clone(),
            config: config.clone(),
            on_open,
        };
        state.open.push(window.clone());
        state.created.push(window);
        Ok(label)
    }

    fn quit(&self) {
        self.inner.borrow_mut().quit_requests += 1;
    }
}
