use super::*;

#[test]
fn light_mode_sets_marker_and_shows_moon() {
    let visual = visual_for(ThemeMode::Light);
    assert!(visual.light_marker);
    assert_eq!(visual.icon_markup, MOON_ICON);
}

#[test]
fn dark_mode_clears_marker_and_shows_sun() {
    let visual = visual_for(ThemeMode::Dark);
    assert!(!visual.light_marker);
    assert_eq!(visual.icon_markup, SUN_ICON);
}

#[test]
fn sun_icon_has_disc_and_eight_rays() {
    assert!(SUN_ICON.starts_with(r#"<circle cx="12" cy="12" r="5"></circle>"#));
    assert_eq!(SUN_ICON.matches("<line ").count(), 8);
    assert!(!SUN_ICON.contains('\n'));
}

#[test]
fn moon_icon_is_single_path() {
    assert_eq!(MOON_ICON.matches("<path ").count(), 1);
    assert!(MOON_ICON.contains("M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"));
}
