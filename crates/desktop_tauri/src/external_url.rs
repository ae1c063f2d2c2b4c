//! External URL handling for desktop host integration.

use shell_host::{ExternalUrlService, ShellError};
use tauri::{AppHandle, Runtime};
use tauri_plugin_opener::OpenerExt;

#[derive(Clone)]
/// Opens URLs with the system default external handler through the Tauri opener plugin.
pub(crate) struct OpenerExternalUrls<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> OpenerExternalUrls<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> ExternalUrlService for OpenerExternalUrls<R> {
    fn open_url(&self, url: &str) -> Result<(), ShellError> {
        self.app
            .opener()
            .open_url(url, None::<String>)
            .map_err(|err| ShellError::ExternalOpen {
                url: url.to_string(),
                reason: err.to_string(),
            })
    }
}
