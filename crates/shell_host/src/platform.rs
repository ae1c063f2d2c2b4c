//! Platform identification and the quit-on-last-window policy.

/// Desktop platform the shell is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS, where apps conventionally stay resident with no windows open.
    MacOs,
    /// Microsoft Windows.
    Windows,
    /// Linux desktops.
    Linux,
    /// Any other target.
    Other,
}

impl Platform {
    /// Returns the platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Other => "other",
        }
    }
}

/// Returns whether the process should exit once its last window closes on `platform`.
pub const fn should_quit_on_all_windows_closed(platform: Platform) -> bool {
    !matches!(platform, Platform::MacOs)
}

/// Outcome of the all-windows-closed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    /// Terminate the process.
    Quit,
    /// Keep the process alive with no windows open.
    StayResident,
}

impl ExitDecision {
    /// Applies [`should_quit_on_all_windows_closed`] to `platform`.
    pub const fn for_platform(platform: Platform) -> Self {
        if should_quit_on_all_windows_closed(platform) {
            Self::Quit
        } else {
            Self::StayResident
        }
    }

    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::StayResident => "stay_resident",
        }
    }
}
