//! The two-value color mode and its persisted string form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The user's preferred color mode.
///
/// Persisted as the strings `"light"` and `"dark"`; anything else read back
/// from storage is rejected at the parse boundary rather than passed through.
///
/// # Example
///
/// ```rust
/// use dimmer::ColorMode;
///
/// assert_eq!(ColorMode::Light.opposite(), ColorMode::Dark);
/// assert_eq!("dark".parse::<ColorMode>(), Ok(ColorMode::Dark));
/// assert!("sepia".parse::<ColorMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Returns the other mode.
    pub fn opposite(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Maps a boolean "dark scheme preferred" signal to a mode.
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// The persisted string form, `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ParseModeError;

    /// Parses a stored value, tolerating surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(ParseModeError {
                value: s.to_string(),
            }),
        }
    }
}

/// Error returned when a persisted value is not a recognized color mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError {
    value: String,
}

impl ParseModeError {
    /// The offending value as read from storage.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a color mode (expected 'light' or 'dark')",
            self.value
        )
    }
}

impl std::error::Error for ParseModeError {}
