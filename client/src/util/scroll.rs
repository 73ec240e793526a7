//! Scroll position reads and programmatic scrolling.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Attribute carrying each deck panel's position.
pub const SLIDE_INDEX_ATTR: &str = "data-slide-index";

/// Scroll distance after which the nav bar gains its shadow.
pub const NAV_SHADOW_OFFSET: f64 = 8.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SHADOW_OFFSET
}

/// CSS selector for deck panel `index`.
pub fn slide_selector(index: usize) -> String {
    format!("[{SLIDE_INDEX_ATTR}=\"{index}\"]")
}

/// Read a panel's position back from its attribute value.
pub fn parse_slide_index(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse().ok()
}

/// Current vertical scroll offset of the window.
pub fn window_scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll deck panel `index` so its start edge is in view.
///
/// Does nothing when the panel is not in the document.
pub fn scroll_to_slide(index: usize) {
    #[cfg(feature = "hydrate")]
    {
        let Some(panel) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&slide_selector(index)).ok().flatten())
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        panel.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = index;
    }
}
