//! End-to-end controller lifecycle: startup resolution, toggling,
//! persistence across sessions, and OS scheme changes.

use std::io;

use dimmer::{
    ColorMode, ControllerOptions, FileStore, MemoryStore, MemorySurface, PreferenceStore,
    StoreError, ThemeController,
};

fn prefers_dark() -> ColorMode {
    ColorMode::Dark
}

fn prefers_light() -> ColorMode {
    ColorMode::Light
}

/// A store that is present but unusable, like disabled browser storage.
struct OfflineStore {
    fail_reads: bool,
}

impl PreferenceStore for OfflineStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            Err(StoreError::Io(io::Error::new(
                io::ErrorKind::Other,
                "storage offline",
            )))
        } else {
            Ok(None)
        }
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io(io::Error::new(
            io::ErrorKind::Other,
            "storage offline",
        )))
    }
}

#[test]
fn test_os_signal_fallback_both_ways() {
    let dark_session =
        ThemeController::new(MemoryStore::new(), prefers_dark, MemorySurface::new());
    assert_eq!(dark_session.current(), ColorMode::Dark);

    let light_session =
        ThemeController::new(MemoryStore::new(), prefers_light, MemorySurface::new());
    assert_eq!(light_session.current(), ColorMode::Light);
}

#[test]
fn test_stored_value_precedence_over_signal() {
    let store = MemoryStore::with_entry("theme-preference", "light");
    let controller = ThemeController::new(store, prefers_dark, MemorySurface::new());
    assert_eq!(controller.current(), ColorMode::Light);
    assert_eq!(
        controller.surface().root_attribute("data-bs-theme"),
        Some("light")
    );
}

#[test]
fn test_round_trip_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    {
        let mut first = ThemeController::new(
            FileStore::new(&path),
            prefers_light,
            MemorySurface::new(),
        );
        first.apply_preference(Some(ColorMode::Dark));
    }

    // A fresh session with a light OS signal still resolves to dark.
    let second = ThemeController::new(FileStore::new(&path), prefers_light, MemorySurface::new());
    assert_eq!(second.current(), ColorMode::Dark);
}

#[test]
fn test_toggle_writes_opposite_value() {
    let mut controller =
        ThemeController::new(MemoryStore::new(), prefers_dark, MemorySurface::new());
    let writes = controller.store().writes();

    controller.toggle();
    assert_eq!(controller.current(), ColorMode::Light);
    assert_eq!(controller.store().writes(), writes + 1);
    assert_eq!(
        controller.store().get("theme-preference").unwrap().as_deref(),
        Some("light")
    );
}

#[test]
fn test_on_load_rebinds_and_labels_on_next_change() {
    let surface = MemorySurface::new().with_control("theme-toggle");
    let mut controller = ThemeController::new(MemoryStore::new(), prefers_dark, surface);

    controller.on_load();
    assert!(controller.toggle_bound());

    controller.toggle();
    assert_eq!(
        controller.surface().toggle_label("aria-label"),
        Some("light")
    );
}

#[test]
fn test_missing_toggle_is_nonfatal() {
    let mut controller =
        ThemeController::new(MemoryStore::new(), prefers_dark, MemorySurface::new());

    controller.on_load();
    assert!(!controller.toggle_bound());

    // The controller still works; only the surface toggle stays inert.
    controller.toggle();
    assert_eq!(controller.current(), ColorMode::Light);
    assert_eq!(controller.surface().toggle_label("aria-label"), None);
}

#[test]
fn test_system_change_ignored_while_stored() {
    // Default gating: the startup write counts as a stored preference.
    let mut controller =
        ThemeController::new(MemoryStore::new(), prefers_dark, MemorySurface::new());
    assert_eq!(controller.current(), ColorMode::Dark);

    controller.on_system_scheme_change(false);
    assert_eq!(controller.current(), ColorMode::Dark);
    assert_eq!(
        controller.surface().root_attribute("data-bs-theme"),
        Some("dark")
    );
}

#[test]
fn test_system_change_override_reapplies() {
    let options = ControllerOptions::new().with_system_override(true);
    let mut controller = ThemeController::with_options(
        MemoryStore::new(),
        prefers_dark,
        MemorySurface::new(),
        options,
    );

    controller.on_system_scheme_change(false);
    assert_eq!(controller.current(), ColorMode::Light);
    assert_eq!(
        controller.store().get("theme-preference").unwrap().as_deref(),
        Some("light")
    );
}

#[test]
fn test_system_change_applies_when_nothing_stored() {
    // Writes fail, so no preference ever lands in the store and the
    // default gating lets the signal through.
    let store = OfflineStore { fail_reads: false };
    let mut controller = ThemeController::new(store, prefers_dark, MemorySurface::new());
    assert_eq!(controller.current(), ColorMode::Dark);

    controller.on_system_scheme_change(false);
    assert_eq!(controller.current(), ColorMode::Light);
}

#[test]
fn test_unreadable_store_degrades_to_detector() {
    let store = OfflineStore { fail_reads: true };
    let controller = ThemeController::new(store, prefers_dark, MemorySurface::new());

    // No panic, no error surfaced; the session runs on the detected mode.
    assert_eq!(controller.current(), ColorMode::Dark);
    assert_eq!(
        controller.surface().root_attribute("data-bs-theme"),
        Some("dark")
    );
}

#[test]
fn test_fresh_session_scenario() {
    // Fresh session, nothing stored, OS prefers dark.
    let surface = MemorySurface::new().with_control("theme-toggle");
    let mut controller = ThemeController::new(MemoryStore::new(), prefers_dark, surface);
    assert_eq!(
        controller.surface().root_attribute("data-bs-theme"),
        Some("dark")
    );
    assert_eq!(
        controller.store().get("theme-preference").unwrap().as_deref(),
        Some("dark")
    );

    // The user clicks the toggle.
    controller.on_load();
    controller.toggle();
    assert_eq!(
        controller.surface().root_attribute("data-bs-theme"),
        Some("light")
    );
    assert_eq!(
        controller.store().get("theme-preference").unwrap().as_deref(),
        Some("light")
    );

    // The OS later flips to light while a preference is stored; under the
    // default gating the stored value keeps winning.
    controller.on_system_scheme_change(true);
    assert_eq!(
        controller.surface().root_attribute("data-bs-theme"),
        Some("light")
    );
    assert_eq!(controller.current(), ColorMode::Light);
}
