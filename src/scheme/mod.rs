//! OS color-scheme detection.
//!
//! This module provides:
//!
//! - [`ModeDetector`]: The detection trait, blanket-implemented for closures
//! - [`OsDetector`]: Queries the operating system's preferred scheme
//! - [`SchemeWatcher`]: Turns a poll-only detector into change notifications

mod os;
mod watch;

pub use os::OsDetector;
pub use watch::SchemeWatcher;

use crate::mode::ColorMode;

/// Determines whether the user prefers a light or dark color mode.
///
/// Implemented for any `Fn() -> ColorMode`, so tests and headless hosts can
/// inject a fixed mode:
///
/// ```rust
/// use dimmer::{ColorMode, ModeDetector};
///
/// let detector = || ColorMode::Dark;
/// assert_eq!(detector.detect(), ColorMode::Dark);
/// ```
pub trait ModeDetector {
    /// Returns the currently preferred mode.
    fn detect(&self) -> ColorMode;
}

impl<F> ModeDetector for F
where
    F: Fn() -> ColorMode,
{
    fn detect(&self) -> ColorMode {
        self()
    }
}
