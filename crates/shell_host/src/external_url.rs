//! External URL host-service contracts.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ShellError;

/// Host service for opening URLs with the operating system's default handler.
///
/// Window hosts call it from webview callbacks, so implementations must be thread-safe.
pub trait ExternalUrlService: Send + Sync {
    /// Opens `url` outside the shell, typically in the default browser.
    fn open_url(&self, url: &str) -> Result<(), ShellError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for hosts without an OS shell integration.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url(&self, _url: &str) -> Result<(), ShellError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory external URL service that records every dispatched URL.
pub struct MemoryExternalUrlService {
    opened: Arc<Mutex<Vec<String>>>,
    failure: Option<String>,
}

impl MemoryExternalUrlService {
    /// Creates a service whose every dispatch fails with `reason` after being recorded.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            opened: Arc::default(),
            failure: Some(reason.into()),
        }
    }

    /// Returns dispatched URLs in call order.
    pub fn opened(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.opened.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ExternalUrlService for MemoryExternalUrlService {
    fn open_url(&self, url: &str) -> Result<(), ShellError> {
        self.lock().push(url.to_string());
        match &self.failure {
            Some(reason) => Err(ShellError::ExternalOpen {
                url: url.to_string(),
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}
