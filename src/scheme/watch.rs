//! Change detection over a poll-only detector.

use super::ModeDetector;
use crate::mode::ColorMode;

/// Tracks a detector across polls and reports transitions.
///
/// There is no portable subscription API for the OS scheme signal, so hosts
/// poll at whatever cadence suits their event loop and forward any reported
/// change into
/// [`ThemeController::on_system_scheme_change`](crate::ThemeController::on_system_scheme_change).
///
/// # Example
///
/// ```rust
/// use dimmer::{ColorMode, SchemeWatcher};
///
/// let mut watcher = SchemeWatcher::new(|| ColorMode::Dark);
/// // The construction-time detection is the baseline, not a change.
/// assert_eq!(watcher.poll(), None);
/// assert_eq!(watcher.last(), ColorMode::Dark);
/// ```
pub struct SchemeWatcher<D: ModeDetector> {
    detector: D,
    last: ColorMode,
}

impl<D: ModeDetector> SchemeWatcher<D> {
    /// Creates a watcher, taking the current detection as the baseline.
    pub fn new(detector: D) -> Self {
        let last = detector.detect();
        Self { detector, last }
    }

    /// Re-detects and returns the new mode when it differs from the last poll.
    pub fn poll(&mut self) -> Option<ColorMode> {
        let mode = self.detector.detect();
        if mode == self.last {
            None
        } else {
            self.last = mode;
            Some(mode)
        }
    }

    /// The mode seen at the most recent poll.
    pub fn last(&self) -> ColorMode {
        self.last
    }
}

impl<D: ModeDetector> std::fmt::Debug for SchemeWatcher<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemeWatcher")
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_stable_signal_reports_nothing() {
        let mut watcher = SchemeWatcher::new(|| ColorMode::Light);
        assert_eq!(watcher.poll(), None);
        assert_eq!(watcher.poll(), None);
    }

    #[test]
    fn test_transition_reported_once() {
        let current = Cell::new(ColorMode::Light);
        let mut watcher = SchemeWatcher::new(|| current.get());

        current.set(ColorMode::Dark);
        assert_eq!(watcher.poll(), Some(ColorMode::Dark));
        // Same value again is no longer a transition.
        assert_eq!(watcher.poll(), None);
        assert_eq!(watcher.last(), ColorMode::Dark);
    }

    #[test]
    fn test_flapping_signal_reports_each_edge() {
        let current = Cell::new(ColorMode::Dark);
        let mut watcher = SchemeWatcher::new(|| current.get());

        current.set(ColorMode::Light);
        assert_eq!(watcher.poll(), Some(ColorMode::Light));
        current.set(ColorMode::Dark);
        assert_eq!(watcher.poll(), Some(ColorMode::Dark));
    }
}
