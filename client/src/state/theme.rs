//! Theme preference store.
//!
//! DESIGN
//! ======
//! `ThemeController` owns the current mode and reaches the browser only
//! through the `ThemeBackend` seam, so precedence (stored value, then OS
//! hint, then light) is testable without a DOM. The stored value is
//! authoritative for client reads; the cookie is a mirror the server reads
//! to render the first paint.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failed storage or cookie write is logged
//! and swallowed; the mode is still applied to the document for the current
//! session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

/// localStorage key and cookie name shared by every theme writer.
pub const THEME_KEY: &str = "theme";

/// Class toggled on `<html>` while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Client hint header carrying the OS color-scheme preference.
pub const COLOR_SCHEME_HINT_HEADER: &str = "sec-ch-prefers-color-scheme";

/// One year, in seconds.
pub const COOKIE_MAX_AGE_SECS: u32 = 60 * 60 * 24 * 365;

/// Visual mode applied to the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Accessible label for a toggle button showing this mode.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    pub const fn toggle_title(self) -> &'static str {
        match self {
            Self::Light => "Dark mode",
            Self::Dark => "Light mode",
        }
    }

    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀︎",
        }
    }

    /// Class applied to `<html>` by the server-rendered shell.
    pub const fn root_class(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => DARK_CLASS,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode {0:?}")]
pub struct ParseThemeModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeModeError(other.to_owned())),
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Failures reaching durable client state. Never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("cookie unavailable: {0}")]
    CookieUnavailable(String),
}

// =============================================================================
// PURE HELPERS
// =============================================================================

/// Parse a persisted value, treating anything unrecognized as absent.
pub fn parse_mode(raw: Option<&str>) -> Option<ThemeMode> {
    raw.and_then(|value| value.parse::<ThemeMode>().ok())
}

/// `Set-Cookie`-style string written through `document.cookie`.
pub fn theme_cookie(mode: ThemeMode) -> String {
    format!("{THEME_KEY}={mode}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax")
}

/// Look up `name` in a `Cookie` request header.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
}

/// Mode the server should render before any script runs.
///
/// The cookie wins when it holds a valid mode; otherwise the
/// `Sec-CH-Prefers-Color-Scheme` hint decides. `None` means the server has
/// no signal and the page renders light until the bootstrap script runs.
pub fn mode_from_request(cookie_header: Option<&str>, color_scheme_hint: Option<&str>) -> Option<ThemeMode> {
    let from_cookie = cookie_header.and_then(|header| parse_mode(cookie_value(header, THEME_KEY)));
    from_cookie.or_else(|| {
        let hint = color_scheme_hint?.trim().trim_matches('"');
        match hint {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    })
}

// =============================================================================
// BACKEND SEAM
// =============================================================================

/// Browser capabilities the controller depends on.
pub trait ThemeBackend {
    /// Raw value under [`THEME_KEY`] in durable storage.
    fn read_stored(&self) -> Result<Option<String>, ThemeError>;

    fn write_stored(&self, value: &str) -> Result<(), ThemeError>;

    fn write_cookie(&self, cookie: &str) -> Result<(), ThemeError>;

    /// OS color-scheme hint. `None` when the media query API is unavailable.
    fn prefers_dark(&self) -> Option<bool>;

    /// Reflect `mode` on the document root.
    fn apply(&self, mode: ThemeMode);
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Single owner of the page's theme mode.
///
/// Constructed once per page and shared by reference with the controls that
/// change it. The mode sits in an atomic so the controller can live in a
/// `Send + Sync` context; all access still happens on the UI thread.
#[derive(Debug)]
pub struct ThemeController<B> {
    backend: B,
    dark: AtomicBool,
}

impl<B: ThemeBackend> ThemeController<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, dark: AtomicBool::new(false) }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mode most recently applied.
    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.dark.load(Ordering::Relaxed))
    }

    /// Resolve the starting mode and apply it.
    ///
    /// A valid stored value beats the OS hint; with neither, the page is
    /// light. The resolved mode is mirrored into the cookie so the server
    /// renders the same mode on the next request. Storage is written only
    /// by an explicit choice.
    pub fn initialize(&self) -> ThemeMode {
        let mode = self
            .stored_mode()
            .or_else(|| self.backend.prefers_dark().map(ThemeMode::from_dark))
            .unwrap_or_default();
        self.write_cookie(mode);
        self.apply(mode);
        mode
    }

    /// Persist `mode` to storage and cookie, then apply it.
    pub fn set_theme(&self, mode: ThemeMode) {
        if let Err(e) = self.backend.write_stored(mode.as_str()) {
            log::warn!("theme: could not persist {mode}: {e}");
        }
        self.write_cookie(mode);
        self.apply(mode);
    }

    /// Flip the current mode and persist it.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.mode().toggled();
        self.set_theme(next);
        next
    }

    /// React to a `storage` event raised by another tab.
    ///
    /// A `None` key means the other tab cleared storage, and a `None` value
    /// for the theme key means it removed the entry; both resync. Writes are
    /// never echoed back.
    pub fn handle_storage_event(&self, key: Option<&str>, new_value: Option<&str>) -> Option<ThemeMode> {
        match key {
            Some(THEME_KEY) if new_value.is_some() => {
                let mode = parse_mode(new_value)?;
                self.apply(mode);
                Some(mode)
            }
            Some(THEME_KEY) | None => Some(self.resync()),
            Some(_) => None,
        }
    }

    /// Re-read storage after the tab returns to the foreground.
    pub fn resync(&self) -> ThemeMode {
        let mode = self.stored_mode().unwrap_or_else(|| self.mode());
        self.apply(mode);
        mode
    }

    fn stored_mode(&self) -> Option<ThemeMode> {
        match self.backend.read_stored() {
            Ok(raw) => parse_mode(raw.as_deref()),
            Err(e) => {
                log::warn!("theme: {e}");
                None
            }
        }
    }

    fn write_cookie(&self, mode: ThemeMode) {
        if let Err(e) = self.backend.write_cookie(&theme_cookie(mode)) {
            log::warn!("theme: {e}");
        }
    }

    fn apply(&self, mode: ThemeMode) {
        self.dark.store(mode.is_dark(), Ordering::Relaxed);
        self.backend.apply(mode);
    }
}
