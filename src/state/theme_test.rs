use super::*;

const LIGHT: &str = "light-mode";
const DARK: &str = "dark-mode";

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn theme_mode_default_is_dark() {
    assert_eq!(ThemeMode::default(), ThemeMode::Dark);
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
}

#[test]
fn toggled_twice_is_identity() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(mode.toggled().toggled(), mode);
    }
}

#[test]
fn from_light_matches_is_light() {
    assert!(ThemeMode::from_light(true).is_light());
    assert!(!ThemeMode::from_light(false).is_light());
}

#[test]
fn theme_mode_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
    assert_eq!(serde_json::from_str::<ThemeMode>("\"dark\"").unwrap(), ThemeMode::Dark);
}

// =============================================================
// StoredPreference
// =============================================================

#[test]
fn classify_recognizes_sentinels() {
    assert_eq!(StoredPreference::classify(Some(LIGHT), LIGHT, DARK), StoredPreference::Light);
    assert_eq!(StoredPreference::classify(Some(DARK), LIGHT, DARK), StoredPreference::Dark);
}

#[test]
fn classify_treats_missing_and_unknown_as_unset() {
    assert_eq!(StoredPreference::classify(None, LIGHT, DARK), StoredPreference::Unset);
    assert_eq!(StoredPreference::classify(Some(""), LIGHT, DARK), StoredPreference::Unset);
    assert_eq!(StoredPreference::classify(Some("light"), LIGHT, DARK), StoredPreference::Unset);
    assert_eq!(StoredPreference::classify(Some("LIGHT-MODE"), LIGHT, DARK), StoredPreference::Unset);
}

#[test]
fn stored_preference_from_mode_round_trips() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(StoredPreference::from(mode).mode(), Some(mode));
    }
    assert_eq!(StoredPreference::Unset.mode(), None);
}

// =============================================================
// initial_mode policy
// =============================================================

#[test]
fn initial_mode_defaults_to_dark_when_unset() {
    assert_eq!(initial_mode(StoredPreference::Unset), ThemeMode::Dark);
    assert_eq!(FIRST_VISIT_MODE, ThemeMode::Dark);
}

#[test]
fn initial_mode_is_light_only_for_explicit_light() {
    assert_eq!(initial_mode(StoredPreference::Light), ThemeMode::Light);
    assert_eq!(initial_mode(StoredPreference::Dark), ThemeMode::Dark);
}
