//! Pure mapping from theme mode to what the page should show.
//!
//! The icon always shows the *destination* glyph: the moon while light mode
//! is active (click to go dark), the sun while dark mode is active.

#[cfg(test)]
#[path = "theme_visual_test.rs"]
mod theme_visual_test;

use crate::state::theme::ThemeMode;

/// Inner markup of the icon `<svg>` while light mode is active.
pub const MOON_ICON: &str = r#"<path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>"#;

/// Inner markup of the icon `<svg>` while dark mode is active.
pub const SUN_ICON: &str = concat!(
    r#"<circle cx="12" cy="12" r="5"></circle>"#,
    r#"<line x1="12" y1="1" x2="12" y2="3"></line>"#,
    r#"<line x1="12" y1="21" x2="12" y2="23"></line>"#,
    r#"<line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line>"#,
    r#"<line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line>"#,
    r#"<line x1="1" y1="12" x2="3" y2="12"></line>"#,
    r#"<line x1="21" y1="12" x2="23" y2="12"></line>"#,
    r#"<line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line>"#,
    r#"<line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line>"#,
);

/// Visual instructions for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeVisual {
    pub light_marker: bool,
    pub icon_markup: &'static str,
}

#[must_use]
pub fn visual_for(mode: ThemeMode) -> ThemeVisual {
    match mode {
        ThemeMode::Light => ThemeVisual { light_marker: true, icon_markup: MOON_ICON },
        ThemeMode::Dark => ThemeVisual { light_marker: false, icon_markup: SUN_ICON },
    }
}
