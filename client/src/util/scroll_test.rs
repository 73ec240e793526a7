use super::*;

#[test]
fn nav_shadow_appears_after_offset() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(8.0));
    assert!(is_scrolled(8.5));
}

#[test]
fn slide_selector_targets_index_attribute() {
    assert_eq!(slide_selector(3), "[data-slide-index=\"3\"]");
}

#[test]
fn parse_slide_index_round_trips_attribute() {
    assert_eq!(parse_slide_index(Some("12")), Some(12));
    assert_eq!(parse_slide_index(Some("-1")), None);
    assert_eq!(parse_slide_index(Some("x")), None);
    assert_eq!(parse_slide_index(None), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_helpers_are_inert_outside_browser() {
    assert!(window_scroll_y().abs() < f64::EPSILON);
    scroll_to_slide(2);
}
