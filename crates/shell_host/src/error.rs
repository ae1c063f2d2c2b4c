//! Error type shared by the shell core and its host adapters.

use thiserror::Error;

/// Errors surfaced by shell operations and host adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// A color literal could not be parsed as `#rrggbb` or `#rrggbbaa`.
    #[error("invalid color literal `{0}`")]
    InvalidColor(String),
    /// The host runtime failed to construct a window.
    #[error("window `{label}` could not be created: {reason}")]
    WindowCreation {
        /// Label the window would have been registered under.
        label: String,
        /// Host-provided failure description.
        reason: String,
    },
    /// The operating system handler refused or failed to open a URL.
    #[error("external URL open failed for `{url}`: {reason}")]
    ExternalOpen {
        /// URL handed to the external handler.
        url: String,
        /// Host-provided failure description.
        reason: String,
    },
}
