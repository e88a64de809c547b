//! Light/dark theme preference control with OS detection and durable
//! persistence.
//!
//! `dimmer` keeps a single color mode consistent across three collaborators:
//! a durable key-value store, a presentation attribute on a root element, and
//! an optional toggle control's accessible label. The mode is resolved at
//! construction, a valid stored preference first, OS detection as the
//! fallback, persisted on every change, and updated on user toggles and OS
//! scheme changes.
//!
//! This crate provides:
//!
//! - [`ThemeController`]: Owns the current mode and drives the collaborators
//! - [`ColorMode`]: The two-value light/dark mode
//! - [`PreferenceStore`], [`FileStore`], [`MemoryStore`]: Durable storage
//! - [`ModeDetector`], [`OsDetector`], [`SchemeWatcher`]: The OS scheme signal
//! - [`ThemeSurface`], [`MemorySurface`]: The presentation side
//!
//! # Example
//!
//! ```rust
//! use dimmer::{ColorMode, MemoryStore, MemorySurface, ThemeController};
//!
//! // A fresh session with no stored preference follows the OS signal.
//! let mut controller = ThemeController::new(
//!     MemoryStore::new(),
//!     || ColorMode::Dark,
//!     MemorySurface::new().with_control("theme-toggle"),
//! );
//! assert_eq!(controller.current(), ColorMode::Dark);
//!
//! // Load-time wiring binds the toggle control.
//! controller.on_load();
//! assert!(controller.toggle_bound());
//!
//! // A click flips the mode, persists it, and relabels the toggle.
//! controller.toggle();
//! assert_eq!(
//!     controller.surface().root_attribute("data-bs-theme"),
//!     Some("light"),
//! );
//! assert_eq!(
//!     controller.surface().toggle_label("aria-label"),
//!     Some("light"),
//! );
//! ```
//!
//! Production embedders swap in [`FileStore`] for cross-session persistence,
//! [`OsDetector`] for real OS detection, and their own [`ThemeSurface`]
//! implementation for whatever actually gets painted.

mod controller;
mod mode;
mod scheme;
mod store;
mod surface;

pub use controller::{ControllerOptions, ThemeController};
pub use mode::{ColorMode, ParseModeError};
pub use scheme::{ModeDetector, OsDetector, SchemeWatcher};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError};
pub use surface::{MemorySurface, ThemeSurface};
