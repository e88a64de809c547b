//! The presentation surface the controller reflects onto.
//!
//! This module provides:
//!
//! - [`ThemeSurface`]: Root attribute plus an optional toggle control
//! - [`MemorySurface`]: Recording implementation for tests and headless hosts
//!
//! The surface carries no theme definitions of its own. External styling is
//! expected to key off the root attribute; the controller only keeps that
//! attribute and the toggle's accessible label in step with the current mode.

mod memory;

pub use memory::MemorySurface;

/// The presentation side of the controller.
pub trait ThemeSurface {
    /// Sets the named attribute on the root element, overwriting any
    /// previous value.
    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Looks up the toggle control by id, returning `true` when found.
    ///
    /// Binding is what arms [`set_toggle_label`](Self::set_toggle_label);
    /// the controller treats a failed lookup as non-fatal.
    fn bind_toggle(&mut self, id: &str) -> bool;

    /// Sets the named attribute on the bound toggle control.
    ///
    /// Only called after a successful bind; implementations may ignore it
    /// otherwise.
    fn set_toggle_label(&mut self, name: &str, value: &str);
}
