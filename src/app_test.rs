use super::*;

#[test]
fn defers_only_while_loading() {
    assert!(should_defer("loading"));
    assert!(!should_defer("interactive"));
    assert!(!should_defer("complete"));
}

#[cfg(debug_assertions)]
#[test]
fn log_level_is_debug_in_test_builds() {
    assert_eq!(log_level(), log::Level::Debug);
}

#[test]
fn banner_names_the_site() {
    assert!(BANNER.starts_with("ByteTalk:"));
}
