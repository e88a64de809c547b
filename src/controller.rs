//! The theme preference controller.

use tracing::{debug, warn};

use crate::mode::ColorMode;
use crate::scheme::ModeDetector;
use crate::store::PreferenceStore;
use crate::surface::ThemeSurface;

/// Configuration for [`ThemeController`].
///
/// The defaults mirror the conventional web contract: storage key
/// `theme-preference`, root attribute `data-bs-theme`, toggle id
/// `theme-toggle`, label attribute `aria-label`, and OS scheme changes
/// deferring to a stored preference.
///
/// # Example
///
/// ```rust
/// use dimmer::ControllerOptions;
///
/// let options = ControllerOptions::new()
///     .with_storage_key("theme")
///     .with_system_override(true);
/// assert_eq!(options.storage_key, "theme");
/// ```
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Key the preference is stored under.
    pub storage_key: String,
    /// Attribute set on the surface's root element.
    pub root_attribute: String,
    /// Id [`ThemeController::on_load`] binds the toggle control by.
    pub toggle_id: String,
    /// Accessible-label attribute kept in step on the bound toggle.
    pub label_attribute: String,
    /// When `true`, an OS scheme change re-applies the derived mode even if
    /// a valid preference is stored. When `false` (the default) a stored
    /// preference wins and the change is ignored.
    pub system_change_overrides_stored: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            storage_key: "theme-preference".to_string(),
            root_attribute: "data-bs-theme".to_string(),
            toggle_id: "theme-toggle".to_string(),
            label_attribute: "aria-label".to_string(),
            system_change_overrides_stored: false,
        }
    }
}

impl ControllerOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the storage key, returning updated options for chaining.
    pub fn with_storage_key(mut self, key: &str) -> Self {
        self.storage_key = key.to_string();
        self
    }

    /// Sets the root attribute name.
    pub fn with_root_attribute(mut self, name: &str) -> Self {
        self.root_attribute = name.to_string();
        self
    }

    /// Sets the toggle control id.
    pub fn with_toggle_id(mut self, id: &str) -> Self {
        self.toggle_id = id.to_string();
        self
    }

    /// Sets the toggle's label attribute name.
    pub fn with_label_attribute(mut self, name: &str) -> Self {
        self.label_attribute = name.to_string();
        self
    }

    /// Chooses whether OS scheme changes override a stored preference.
    pub fn with_system_override(mut self, enabled: bool) -> Self {
        self.system_change_overrides_stored = enabled;
        self
    }
}

/// Keeps a single current color mode consistent with three collaborators:
/// a durable store entry, a root presentation attribute, and an optional
/// toggle control's accessible label.
///
/// Construction resolves and applies the preference immediately, before any
/// load-time wiring, so the surface never paints in the wrong mode. Each
/// controller owns its state; independent controllers never interfere.
///
/// # Example
///
/// ```rust
/// use dimmer::{ColorMode, MemoryStore, MemorySurface, ThemeController};
///
/// let mut controller = ThemeController::new(
///     MemoryStore::new(),
///     || ColorMode::Dark,
///     MemorySurface::new().with_control("theme-toggle"),
/// );
/// assert_eq!(controller.current(), ColorMode::Dark);
/// assert_eq!(
///     controller.surface().root_attribute("data-bs-theme"),
///     Some("dark"),
/// );
///
/// controller.on_load();
/// controller.toggle();
/// assert_eq!(controller.current(), ColorMode::Light);
/// ```
pub struct ThemeController<S, D, U>
where
    S: PreferenceStore,
    D: ModeDetector,
    U: ThemeSurface,
{
    store: S,
    detector: D,
    surface: U,
    options: ControllerOptions,
    current: ColorMode,
    toggle_bound: bool,
}

impl<S, D, U> ThemeController<S, D, U>
where
    S: PreferenceStore,
    D: ModeDetector,
    U: ThemeSurface,
{
    /// Creates a controller with default options, resolving and applying the
    /// preference before returning.
    pub fn new(store: S, detector: D, surface: U) -> Self {
        Self::with_options(store, detector, surface, ControllerOptions::default())
    }

    /// Creates a controller with explicit options.
    pub fn with_options(store: S, detector: D, surface: U, options: ControllerOptions) -> Self {
        let mut controller = Self {
            store,
            detector,
            surface,
            options,
            // Placeholder until the startup resolution below runs.
            current: ColorMode::Light,
            toggle_bound: false,
        };
        controller.apply_preference(None);
        controller
    }

    /// The active color mode.
    pub fn current(&self) -> ColorMode {
        self.current
    }

    /// The durable store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The presentation surface.
    pub fn surface(&self) -> &U {
        &self.surface
    }

    /// The options this controller was built with.
    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Whether [`on_load`](Self::on_load) found the toggle control.
    pub fn toggle_bound(&self) -> bool {
        self.toggle_bound
    }

    /// Resolves the effective mode.
    ///
    /// A stored value that parses as a [`ColorMode`] wins. Anything else, a
    /// value outside the light/dark pair, nothing stored yet, or an
    /// unreadable store, falls back to the detector.
    pub fn resolve_preference(&self) -> ColorMode {
        match self.store.get(&self.options.storage_key) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(mode) => mode,
                Err(err) => {
                    warn!(%err, "ignoring persisted preference");
                    self.detector.detect()
                }
            },
            Ok(None) => self.detector.detect(),
            Err(err) => {
                warn!(%err, "preference store unreadable, using detected mode");
                self.detector.detect()
            }
        }
    }

    /// Applies `mode`, or the freshly resolved preference when `None`.
    ///
    /// The store is written on every call, even when the mode is unchanged.
    /// A write failure is logged and the mode stays active in memory for the
    /// rest of the session.
    pub fn apply_preference(&mut self, mode: Option<ColorMode>) {
        let mode = mode.unwrap_or_else(|| self.resolve_preference());
        self.current = mode;
        if let Err(err) = self.store.set(&self.options.storage_key, mode.as_str()) {
            warn!(%err, "preference not persisted, continuing in memory");
        }
        self.reflect();
    }

    /// Writes the current mode onto the surface: the root attribute always,
    /// the toggle's label attribute once a toggle is bound.
    pub fn reflect(&mut self) {
        self.surface
            .set_root_attribute(&self.options.root_attribute, self.current.as_str());
        if self.toggle_bound {
            self.surface
                .set_toggle_label(&self.options.label_attribute, self.current.as_str());
        }
    }

    /// Switches to the opposite mode, persisting and reflecting it.
    pub fn toggle(&mut self) {
        self.apply_preference(Some(self.current.opposite()));
    }

    /// Load-time wiring: reflects once more, so tooling that attaches after
    /// the initial paint sees the value, then binds the toggle control.
    ///
    /// A missing control is non-fatal; it is logged and toggling via the
    /// surface simply stays inert.
    pub fn on_load(&mut self) {
        self.reflect();
        self.toggle_bound = self.surface.bind_toggle(&self.options.toggle_id);
        if self.toggle_bound {
            debug!(id = %self.options.toggle_id, "toggle control bound");
        } else {
            warn!(id = %self.options.toggle_id, "toggle control not found, toggling disabled");
        }
    }

    /// Reacts to an OS color-scheme change.
    ///
    /// With [`system_change_overrides_stored`](ControllerOptions::system_change_overrides_stored)
    /// unset, a valid stored preference wins and the change is ignored.
    /// Otherwise the signal-derived mode is re-applied unconditionally.
    pub fn on_system_scheme_change(&mut self, is_dark: bool) {
        let has_stored = matches!(
            self.store.get(&self.options.storage_key),
            Ok(Some(raw)) if raw.parse::<ColorMode>().is_ok()
        );
        if has_stored && !self.options.system_change_overrides_stored {
            debug!("stored preference retained over system change");
            return;
        }
        self.apply_preference(Some(ColorMode::from_dark_flag(is_dark)));
    }
}

impl<S, D, U> std::fmt::Debug for ThemeController<S, D, U>
where
    S: PreferenceStore,
    D: ModeDetector,
    U: ThemeSurface,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("current", &self.current)
            .field("toggle_bound", &self.toggle_bound)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
