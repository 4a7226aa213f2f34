//! Theme preference controller.
//!
//! The controller is the only writer of the root marker, the icon markup,
//! and the stored preference. It keeps no copy of the mode: `current()`
//! reads the live marker, so anything else that touches the marker is still
//! honored by the next toggle.
//!
//! Storage is best-effort. An unreadable entry counts as "unset" (dark), and
//! a failed write is logged while the visual change still happens.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::state::theme::{StoredPreference, ThemeMode, initial_mode};
use crate::util::preference_store::PreferenceStore;
use crate::util::theme_surface::ThemeSurface;
use crate::util::theme_visual::visual_for;

/// Something that can run a handler when clicked.
pub trait ClickTarget {
    fn on_click(&self, handler: Box<dyn FnMut()>);
}

pub struct ThemeController<S, D> {
    store: S,
    surface: D,
    config: ThemeConfig,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    pub fn new(store: S, surface: D, config: ThemeConfig) -> Self {
        Self { store, surface, config }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Tri-state reading of storage. Read failures are reported as `Unset`.
    pub fn stored_preference(&self) -> StoredPreference {
        match self.store.read(&self.config.storage_key) {
            Ok(raw) => self.config.classify(raw.as_deref()),
            Err(e) => {
                log::warn!("theme preference unreadable, using default: {e}");
                StoredPreference::Unset
            }
        }
    }

    /// Read storage once and apply the resulting mode.
    pub fn load_initial_mode(&self) -> ThemeMode {
        let stored = self.stored_preference();
        let mode = initial_mode(stored);
        log::debug!("initial theme {mode:?} from stored preference {stored:?}");
        self.apply_mode(mode);
        mode
    }

    /// Render `mode` and persist its sentinel.
    pub fn apply_mode(&self, mode: ThemeMode) {
        let visual = visual_for(mode);
        self.surface.set_light_marker(visual.light_marker);
        self.surface.set_icon_markup(visual.icon_markup);

        let sentinel = self.config.sentinel(mode);
        if let Err(e) = self.store.write(&self.config.storage_key, sentinel) {
            log::warn!("theme preference not saved: {e}");
        }
    }

    /// Mode currently shown, read from the root marker.
    pub fn current(&self) -> ThemeMode {
        ThemeMode::from_light(self.surface.has_light_marker())
    }

    /// Switch to the other mode and return it.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.current().toggled();
        self.apply_mode(next);
        log::info!("theme switched to {next:?}");
        next
    }
}

/// Register the toggle handler when the page has a toggle control.
///
/// Returns whether a handler was registered.
pub fn bind_toggle<S, D, T>(controller: &Rc<ThemeController<S, D>>, toggle: Option<&T>) -> bool
where
    S: PreferenceStore + 'static,
    D: ThemeSurface + 'static,
    T: ClickTarget + ?Sized,
{
    let Some(toggle) = toggle else {
        log::debug!("no #{} control on this page", controller.config().toggle_id);
        return false;
    };
    let controller = Rc::clone(controller);
    toggle.on_click(Box::new(move || {
        controller.toggle();
    }));
    true
}

/// Page-load sequence: apply the stored mode, then wire the toggle.
pub fn boot<S, D, T>(controller: &Rc<ThemeController<S, D>>, toggle: Option<&T>) -> ThemeMode
where
    S: PreferenceStore + 'static,
    D: ThemeSurface + 'static,
    T: ClickTarget + ?Sized,
{
    let mode = controller.load_initial_mode();
    bind_toggle(controller, toggle);
    mode
}
