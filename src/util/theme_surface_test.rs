use super::*;

#[test]
fn memory_surface_starts_dark_with_empty_icon() {
    let surface = MemorySurface::new();
    assert!(!surface.has_light_marker());
    assert_eq!(surface.icon_markup(), Some(String::new()));
}

#[test]
fn marker_reads_back_what_was_set() {
    let surface = MemorySurface::new();
    surface.set_light_marker(true);
    assert!(surface.has_light_marker());
    surface.set_light_marker(false);
    assert!(!surface.has_light_marker());
}

#[test]
fn icon_markup_is_fully_replaced() {
    let surface = MemorySurface::new();
    surface.set_icon_markup("<path></path>");
    surface.set_icon_markup("<circle></circle>");
    assert_eq!(surface.icon_markup().as_deref(), Some("<circle></circle>"));
}

#[test]
fn missing_icon_ignores_markup() {
    let surface = MemorySurface::without_icon();
    surface.set_icon_markup("<path></path>");
    assert_eq!(surface.icon_markup(), None);
}
