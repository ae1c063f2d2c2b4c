//! Fixed window configuration for the application shell.
//!
//! Every value here is a compile-time constant. The shell has no CLI flags, environment
//! variables, or persisted window state; the only way to change a window's appearance is to
//! change these constants.

use serde::Serialize;

use crate::ShellError;

/// Initial window width in logical pixels.
pub const DEFAULT_WIDTH: u32 = 1200;
/// Initial window height in logical pixels.
pub const DEFAULT_HEIGHT: u32 = 800;
/// Window title.
pub const APP_TITLE: &str = "MG Sender Pro";
/// Window icon, relative to the bundled frontend assets.
pub const ICON_PATH: &str = "assets/icon.png";
/// Local document loaded into every window, relative to the bundled frontend assets.
pub const ENTRY_DOCUMENT: &str = "index.html";
/// Label of the first window created by the shell.
pub const MAIN_WINDOW_LABEL: &str = "main";
/// Window background painted before the document renders (`#0f172a`).
pub const BACKGROUND_COLOR: Rgba = Rgba::opaque(0x0f, 0x17, 0x2a);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// 8-bit RGBA color.
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, `0xff` is fully opaque.
    pub a: u8,
}

impl Rgba {
    /// Builds a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::InvalidColor`] when `literal` is not a `#`-prefixed 6 or 8 digit
    /// hex string.
    pub fn from_hex(literal: &str) -> Result<Self, ShellError> {
        let invalid = || ShellError::InvalidColor(literal.to_string());
        let digits = literal.strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |idx: usize| u8::from_str_radix(&digits[idx..idx + 2], 16);
        let r = channel(0).map_err(|_| invalid())?;
        let g = channel(2).map_err(|_| invalid())?;
        let b = channel(4).map_err(|_| invalid())?;
        let a = if digits.len() == 8 {
            channel(6).map_err(|_| invalid())?
        } else {
            0xff
        };
        Ok(Self { r, g, b, a })
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Page-level settings recorded for the hosted document.
///
/// These mirror the settings the application shipped with: the page may reach host APIs
/// directly, runs without context isolation, and is exempt from same-origin restrictions so it
/// can read local spreadsheets and images. They are preserved as configuration.
pub struct WebPreferences {
    /// Expose the host API object to page scripts.
    pub host_api_in_page: bool,
    /// Run page scripts in an isolated world separate from host glue code.
    pub context_isolation: bool,
    /// Enforce same-origin and CORS restrictions for local resources.
    pub web_security: bool,
}

impl Default for WebPreferences {
    fn default() -> Self {
        Self {
            host_api_in_page: true,
            context_isolation: false,
            web_security: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Construction-time attributes of a shell window. Not mutated after the window exists.
pub struct WindowConfig {
    /// Inner width in logical pixels.
    pub width: u32,
    /// Inner height in logical pixels.
    pub height: u32,
    /// Title bar text.
    pub title: String,
    /// Icon asset path relative to the bundled frontend.
    pub icon_path: String,
    /// Background color shown before the document paints.
    pub background_color: Rgba,
    /// Whether the menu bar stays hidden.
    pub auto_hide_menu_bar: bool,
    /// Local document loaded into the window.
    pub entry_document: String,
    /// Page-level settings.
    pub web_preferences: WebPreferences,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: APP_TITLE.to_string(),
            icon_path: ICON_PATH.to_string(),
            background_color: BACKGROUND_COLOR,
            auto_hide_menu_bar: true,
            entry_document: ENTRY_DOCUMENT.to_string(),
            web_preferences: WebPreferences::default(),
        }
    }
}

impl WindowConfig {
    /// Renders the configuration as a compact JSON snapshot for diagnostics.
    pub fn snapshot(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| format!("<unserializable: {err}>"))
    }
}

/// Returns the window label for the `seq`-th window created by this process.
///
/// The first window is [`MAIN_WINDOW_LABEL`]; later ones are suffixed with their 1-based
/// ordinal so labels never repeat within a process.
pub fn window_label(seq: usize) -> String {
    if seq == 0 {
        MAIN_WINDOW_LABEL.to_string()
    } else {
        format!("{MAIN_WINDOW_LABEL}-{}", seq + 1)
    }
}
