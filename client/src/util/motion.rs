//! Reduced-motion capability check and parallax math.
//!
//! The preference is read once when a component mounts and is not
//! re-evaluated if the user changes it mid-session.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Parallax drift applied to the hero portrait, as a fraction of scroll.
pub const HERO_PARALLAX_SPEED: f64 = 0.15;

/// Whether the user asked the OS to minimize motion.
///
/// An unavailable media query API counts as "no preference".
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Vertical offset in pixels for a layer drifting at `speed`.
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    if !scroll_y.is_finite() || !speed.is_finite() {
        return 0.0;
    }
    scroll_y.max(0.0) * speed
}

/// Inline `transform` for a parallax layer.
pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translate3d(0, {:.1}px, 0)", parallax_offset(scroll_y, speed))
}
