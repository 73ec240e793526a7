use super::*;

#[test]
fn reduced_motion_is_off_outside_browser() {
    assert!(!prefers_reduced_motion());
}

#[test]
fn parallax_offset_scales_with_scroll() {
    assert!((parallax_offset(100.0, 0.15) - 15.0).abs() < 1e-9);
    assert!(parallax_offset(0.0, 0.5).abs() < f64::EPSILON);
}

#[test]
fn parallax_offset_ignores_overscroll_and_garbage() {
    assert!(parallax_offset(-40.0, 0.5).abs() < f64::EPSILON);
    assert!(parallax_offset(f64::NAN, 0.5).abs() < f64::EPSILON);
    assert!(parallax_offset(10.0, f64::INFINITY).abs() < f64::EPSILON);
}

#[test]
fn parallax_transform_formats_translate() {
    assert_eq!(parallax_transform(200.0, 0.15), "translate3d(0, 30.0px, 0)");
}
