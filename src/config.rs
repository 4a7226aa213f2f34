//! Page configuration: DOM hooks, storage sentinels, and effect timings.
//!
//! Defaults reproduce the ByteTalk templates. A page may override any field
//! by embedding JSON in an element with id [`CONFIG_ELEMENT_ID`]; missing
//! fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::state::theme::{StoredPreference, ThemeMode};

/// Id of the optional `<script type="application/json">` override element.
pub const CONFIG_ELEMENT_ID: &str = "bytetalk-config";

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_LIGHT_SENTINEL: &str = "light-mode";
pub const DEFAULT_DARK_SENTINEL: &str = "dark-mode";
pub const DEFAULT_MARKER_CLASS: &str = "light-mode";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";
pub const DEFAULT_ICON_ID: &str = "theme-icon";
pub const DEFAULT_PULSE_MS: u32 = 300;

/// Errors produced while loading page configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The override element did not contain valid JSON for `PageConfig`.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// The JSON parsed but a field value is unusable.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Theme controller settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub light_sentinel: String,
    pub dark_sentinel: String,
    /// Class on `<body>` whose presence means light mode.
    pub marker_class: String,
    pub toggle_id: String,
    pub icon_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            light_sentinel: DEFAULT_LIGHT_SENTINEL.to_owned(),
            dark_sentinel: DEFAULT_DARK_SENTINEL.to_owned(),
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            icon_id: DEFAULT_ICON_ID.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Storage value written for `mode`.
    #[must_use]
    pub fn sentinel(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Light => &self.light_sentinel,
            ThemeMode::Dark => &self.dark_sentinel,
        }
    }

    #[must_use]
    pub fn classify(&self, raw: Option<&str>) -> StoredPreference {
        StoredPreference::classify(raw, &self.light_sentinel, &self.dark_sentinel)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("light_sentinel", &self.light_sentinel),
            ("dark_sentinel", &self.dark_sentinel),
            ("marker_class", &self.marker_class),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("theme.{name} must not be empty")));
            }
        }
        if self.marker_class.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid("theme.marker_class must be a single class name".into()));
        }
        if self.light_sentinel == self.dark_sentinel {
            return Err(ConfigError::Invalid("theme sentinels must differ".into()));
        }
        Ok(())
    }
}

/// Selectors, classes, and timings for the decorative page effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub alert_selector: String,
    pub alert_class: String,
    pub social_link_selector: String,
    pub hover_transform: String,
    pub hover_text_shadow: String,
    pub rest_transform: String,
    pub rest_text_shadow: String,
    /// Comma-separated selector list for buttons that pulse on click.
    pub pulse_selector: String,
    pub pulse_class: String,
    pub pulse_ms: u32,
    pub delete_selector: String,
    pub delete_prompt: String,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            alert_selector: ".alert".to_owned(),
            alert_class: "animate__fadeInDown".to_owned(),
            social_link_selector: ".social-links a".to_owned(),
            hover_transform: "translateY(-3px)".to_owned(),
            hover_text_shadow: "0 0 15px var(--neon-yellow)".to_owned(),
            rest_transform: "translateY(0)".to_owned(),
            rest_text_shadow: "none".to_owned(),
            pulse_selector:
                ".btn-neon-purple, .btn-neon-green-outline, .btn-neon-purple-outline, .btn-neon-blue-outline"
                    .to_owned(),
            pulse_class: "animate__pulse_click".to_owned(),
            pulse_ms: DEFAULT_PULSE_MS,
            delete_selector: ".btn-delete-confirm".to_owned(),
            delete_prompt: "Are you sure you want to delete this post? This action cannot be undone. 🚨"
                .to_owned(),
        }
    }
}

/// Full page configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme: ThemeConfig,
    pub effects: EffectsConfig,
}

impl PageConfig {
    /// Parse and validate a JSON override.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.theme.validate()?;
        Ok(config)
    }

    /// Resolve configuration from the optional override text.
    ///
    /// Blank or absent text yields defaults. Errors are logged and also
    /// yield defaults so a bad override never disables the page.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring page config override: {e}");
                Self::default()
            }
        }
    }
}
