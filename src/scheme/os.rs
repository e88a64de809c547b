//! OS-level color-scheme detection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::ModeDetector;
use crate::mode::ColorMode;

/// Detects the operating system's preferred color scheme.
///
/// This is the detector production embedders hand to the controller; the
/// stored preference still wins over it once one exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDetector;

impl ModeDetector for OsDetector {
    fn detect(&self) -> ColorMode {
        match detect_os_theme() {
            OsThemeMode::Dark => ColorMode::Dark,
            OsThemeMode::Light => ColorMode::Light,
        }
    }
}
