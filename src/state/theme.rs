//! Theme mode and the tri-state stored preference.
//!
//! DESIGN
//! ======
//! Storage can hold a light sentinel, a dark sentinel, or nothing usable.
//! `StoredPreference` keeps that distinction visible; `initial_mode` is the
//! single place where "nothing stored" collapses into a concrete mode.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// Binary visual presentation state of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn from_light(is_light: bool) -> Self {
        if is_light { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }

    /// The mode a toggle moves to.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// What persistent storage says about the user's choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoredPreference {
    /// No entry, an unrecognized value, or storage could not be read.
    #[default]
    Unset,
    Light,
    Dark,
}

impl StoredPreference {
    /// Classify a raw storage value against the two sentinels.
    ///
    /// Matching is exact; anything else is `Unset`.
    #[must_use]
    pub fn classify(raw: Option<&str>, light_sentinel: &str, dark_sentinel: &str) -> Self {
        match raw {
            Some(value) if value == light_sentinel => Self::Light,
            Some(value) if value == dark_sentinel => Self::Dark,
            _ => Self::Unset,
        }
    }

    #[must_use]
    pub fn mode(self) -> Option<ThemeMode> {
        match self {
            Self::Unset => None,
            Self::Light => Some(ThemeMode::Light),
            Self::Dark => Some(ThemeMode::Dark),
        }
    }
}

impl From<ThemeMode> for StoredPreference {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::Light,
            ThemeMode::Dark => Self::Dark,
        }
    }
}

/// Mode shown to a visitor with no recorded preference.
pub const FIRST_VISIT_MODE: ThemeMode = ThemeMode::Dark;

/// Resolve the mode to apply on page load.
///
/// Only an explicit light preference yields `Light`.
#[must_use]
pub fn initial_mode(stored: StoredPreference) -> ThemeMode {
    stored.mode().unwrap_or(FIRST_VISIT_MODE)
}
