//! Page bootstrap: logging, config, the theme controller, and page effects.
//!
//! Runs once per page after the document has been parsed. Order matters:
//! config is resolved first, the stored theme is applied before any listener
//! exists, and decorative effects come last.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

pub const BANNER: &str = "ByteTalk: Where the bytes spill the tea! 😎";

/// Whether boot has to wait for `DOMContentLoaded`.
#[must_use]
pub fn should_defer(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Console verbosity: debug in debug builds, info otherwise.
#[must_use]
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info }
}

/// WASM entry: install the panic hook and logger, then run now or on
/// `DOMContentLoaded`.
#[cfg(feature = "browser")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log_level());
    log::info!("{BANNER}");

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; page behavior disabled");
        return;
    };

    if should_defer(&document.ready_state()) {
        let doc = document.clone();
        let mut ran = false;
        crate::util::dom::listen(&document, "DOMContentLoaded", move |_event| {
            if std::mem::replace(&mut ran, true) {
                return;
            }
            run(&doc);
        });
    } else {
        run(&document);
    }
}

#[cfg(feature = "browser")]
fn run(document: &web_sys::Document) {
    use std::rc::Rc;

    use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
    use crate::controller::theme::{ThemeController, boot};
    use crate::util::page_effects;
    use crate::util::preference_store::LocalStorageStore;
    use crate::util::theme_surface::DocumentSurface;

    let raw_config = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let config = PageConfig::resolve(raw_config.as_deref());

    let controller = Rc::new(ThemeController::new(
        LocalStorageStore::new(),
        DocumentSurface::locate(&config.theme),
        config.theme.clone(),
    ));
    let toggle = document.get_element_by_id(&config.theme.toggle_id);
    let mode = boot(&controller, toggle.as_ref());
    log::debug!("theme {mode:?} applied, toggle bound: {}", toggle.is_some());

    page_effects::install(&config.effects);
}
