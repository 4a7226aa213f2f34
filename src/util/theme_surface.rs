//! The rendered side of the theme: root marker class and icon markup.
//!
//! The marker on the root container is the live record of the current mode;
//! [`ThemeSurface::has_light_marker`] reads it back so toggles never trust a
//! cached flag.

#[cfg(test)]
#[path = "theme_surface_test.rs"]
mod theme_surface_test;

use std::cell::{Cell, RefCell};

/// DOM operations the theme controller needs.
pub trait ThemeSurface {
    fn has_light_marker(&self) -> bool;
    fn set_light_marker(&self, enabled: bool);
    /// Replace the icon's inner markup. No-op when there is no icon.
    fn set_icon_markup(&self, markup: &str);
}

/// In-memory surface for native builds and tests.
#[derive(Debug)]
pub struct MemorySurface {
    light_marker: Cell<bool>,
    icon: Option<RefCell<String>>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self { light_marker: Cell::new(false), icon: Some(RefCell::new(String::new())) }
    }
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose page has no icon element.
    #[must_use]
    pub fn without_icon() -> Self {
        Self { icon: None, ..Self::default() }
    }

    /// Current icon markup, `None` when the page has no icon.
    #[must_use]
    pub fn icon_markup(&self) -> Option<String> {
        self.icon.as_ref().map(|icon| icon.borrow().clone())
    }
}

impl ThemeSurface for MemorySurface {
    fn has_light_marker(&self) -> bool {
        self.light_marker.get()
    }

    fn set_light_marker(&self, enabled: bool) {
        self.light_marker.set(enabled);
    }

    fn set_icon_markup(&self, markup: &str) {
        if let Some(icon) = &self.icon {
            *icon.borrow_mut() = markup.to_owned();
        }
    }
}

/// `document.body` plus the icon element, looked up once per page.
#[cfg(feature = "browser")]
pub struct DocumentSurface {
    root: Option<web_sys::HtmlElement>,
    icon: Option<web_sys::Element>,
    marker_class: String,
}

#[cfg(feature = "browser")]
impl DocumentSurface {
    #[must_use]
    pub fn locate(config: &crate::config::ThemeConfig) -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        let root = document.as_ref().and_then(web_sys::Document::body);
        let icon = document.as_ref().and_then(|d| d.get_element_by_id(&config.icon_id));
        if root.is_none() {
            log::debug!("no <body>; theme marker will not render");
        }
        if icon.is_none() {
            log::debug!("no #{} element; theme icon will not render", config.icon_id);
        }
        Self { root, icon, marker_class: config.marker_class.clone() }
    }
}

#[cfg(feature = "browser")]
impl ThemeSurface for DocumentSurface {
    fn has_light_marker(&self) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| root.class_list().contains(&self.marker_class))
    }

    fn set_light_marker(&self, enabled: bool) {
        let Some(root) = &self.root else {
            return;
        };
        let class_list = root.class_list();
        let result = if enabled {
            class_list.add_1(&self.marker_class)
        } else {
            class_list.remove_1(&self.marker_class)
        };
        if let Err(e) = result {
            log::warn!("failed to update theme marker: {e:?}");
        }
    }

    fn set_icon_markup(&self, markup: &str) {
        if let Some(icon) = &self.icon {
            icon.set_inner_html(markup);
        }
    }
}
