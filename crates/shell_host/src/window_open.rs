//! Interception of page-initiated window opens.

use std::sync::Arc;

use tracing::{info, warn};

use crate::ExternalUrlService;

/// Answer returned to the host when page content asks for a new window.
///
/// The shell never lets page content open an in-app window, so denial is the only answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowOpenResponse {
    /// Suppress the in-app window.
    Deny,
}

/// Callback a window host installs on a window's content for new-window requests.
///
/// Hosts may invoke it from webview threads, hence `Send + Sync`.
pub type WindowOpenHandler = Arc<dyn Fn(&str) -> WindowOpenResponse + Send + Sync>;

/// Hands `url` to the operating system and denies the in-app window.
///
/// Every request is redirected: there is no scheme filtering or allow-list. A failure of the
/// external handler is logged and otherwise swallowed, since the page has no channel to learn
/// about it.
pub fn intercept_window_open(
    external_urls: &dyn ExternalUrlService,
    url: &str,
) -> WindowOpenResponse {
    match external_urls.open_url(url) {
        Ok(()) => info!(event = "shell.window_open.redirected", url),
        Err(err) => warn!(
            event = "shell.window_open.redirect_failed",
            url,
            error = %err
        ),
    }
    WindowOpenResponse::Deny
}

/// Builds the [`WindowOpenHandler`] that routes requests through `external_urls`.
pub fn window_open_handler(external_urls: Arc<dyn ExternalUrlService>) -> WindowOpenHandler {
    Arc::new(move |url: &str| intercept_window_open(external_urls.as_ref(), url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryExternalUrlService;

    #[test]
    fn redirects_once_and_denies() {
        let service = MemoryExternalUrlService::default();
        let response = intercept_window_open(&service, "https://example.com");
        assert_eq!(response, WindowOpenResponse::Deny);
        assert_eq!(service.opened(), vec!["https://example.com".to_string()]);
    }

    #[test]
    fn denies_even_when_the_os_handler_fails() {
        let service = MemoryExternalUrlService::failing("no default browser");
        let response = intercept_window_open(&service, "https://example.com");
        assert_eq!(response, WindowOpenResponse::Deny);
        assert_eq!(service.opened().len(), 1);
    }

    #[test]
    fn performs_no_scheme_filtering() {
        let service = MemoryExternalUrlService::default();
        for url in ["file:///etc/hosts", "javascript:alert(1)", "not a url"] {
            assert_eq!(
                intercept_window_open(&service, url),
                WindowOpenResponse::Deny
            );
        }
        assert_eq!(service.opened().len(), 3);
    }

    #[test]
    fn handler_shares_the_service_it_was_built_from() {
        let service = MemoryExternalUrlService::default();
        let handler = window_open_handler(Arc::new(service.clone()));
        assert_eq!(handler("https://example.com"), WindowOpenResponse::Deny);
        assert_eq!(service.opened(), vec!["https://example.com".to_string()]);
    }
}
