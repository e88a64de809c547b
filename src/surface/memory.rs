//! In-memory recording surface.

use std::collections::{HashMap, HashSet};

use super::ThemeSurface;

/// A [`ThemeSurface`] that records attribute writes in memory.
///
/// Headless hosts read the attributes back and style themselves however they
/// like; tests use the write counter to pin down reflection behavior.
///
/// # Example
///
/// ```rust
/// use dimmer::{MemorySurface, ThemeSurface};
///
/// let mut surface = MemorySurface::new().with_control("theme-toggle");
/// surface.set_root_attribute("data-bs-theme", "dark");
/// assert_eq!(surface.root_attribute("data-bs-theme"), Some("dark"));
/// assert!(surface.bind_toggle("theme-toggle"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    controls: HashSet<String>,
    bound: Option<String>,
    root: HashMap<String, String>,
    toggle: HashMap<String, String>,
    root_writes: usize,
}

impl MemorySurface {
    /// Creates an empty surface with no controls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a control id that [`bind_toggle`](ThemeSurface::bind_toggle) can
    /// find, returning the surface for chaining.
    pub fn with_control(mut self, id: &str) -> Self {
        self.controls.insert(id.to_string());
        self
    }

    /// The current value of a root attribute.
    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.root.get(name).map(String::as_str)
    }

    /// The current value of an attribute on the toggle control.
    pub fn toggle_label(&self, name: &str) -> Option<&str> {
        self.toggle.get(name).map(String::as_str)
    }

    /// Number of root attribute writes since creation.
    pub fn root_writes(&self) -> usize {
        self.root_writes
    }

    /// Whether a toggle control is currently bound.
    pub fn toggle_bound(&self) -> bool {
        self.bound.is_some()
    }
}

impl ThemeSurface for MemorySurface {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root_writes += 1;
        self.root.insert(name.to_string(), value.to_string());
    }

    fn bind_toggle(&mut self, id: &str) -> bool {
        if self.controls.contains(id) {
            self.bound = Some(id.to_string());
            true
        } else {
            false
        }
    }

    fn set_toggle_label(&mut self, name: &str, value: &str) {
        if self.bound.is_some() {
            self.toggle.insert(name.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_attribute_overwrites() {
        let mut surface = MemorySurface::new();
        surface.set_root_attribute("data-bs-theme", "dark");
        surface.set_root_attribute("data-bs-theme", "light");
        assert_eq!(surface.root_attribute("data-bs-theme"), Some("light"));
        assert_eq!(surface.root_writes(), 2);
    }

    #[test]
    fn test_bind_toggle_requires_control() {
        let mut surface = MemorySurface::new();
        assert!(!surface.bind_toggle("theme-toggle"));

        let mut surface = MemorySurface::new().with_control("theme-toggle");
        assert!(surface.bind_toggle("theme-toggle"));
        assert!(surface.toggle_bound());
    }

    #[test]
    fn test_label_ignored_until_bound() {
        let mut surface = MemorySurface::new().with_control("theme-toggle");
        surface.set_toggle_label("aria-label", "dark");
        assert_eq!(surface.toggle_label("aria-label"), None);

        surface.bind_toggle("theme-toggle");
        surface.set_toggle_label("aria-label", "dark");
        assert_eq!(surface.toggle_label("aria-label"), Some("dark"));
    }
}
