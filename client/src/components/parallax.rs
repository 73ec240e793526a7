//! Scroll-linked vertical drift for a decorative layer.

use leptos::prelude::*;

use crate::util::motion::parallax_transform;

/// Wraps `children` in a layer that drifts at `speed` times the scroll
/// offset. The layer stays still when reduced motion is requested.
#[component]
pub fn Parallax(speed: f64, #[prop(optional)] extra: &'static str, children: Children) -> impl IntoView {
    let scroll_y = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::motion::prefers_reduced_motion;
        use crate::util::scroll::window_scroll_y;

        if !prefers_reduced_motion() {
            scroll_y.set(window_scroll_y());
            let handle = window_event_listener(leptos::ev::scroll, move |_| scroll_y.set(window_scroll_y()));
            on_cleanup(move || handle.remove());
        }
    }

    view! {
        <div class=format!("parallax {extra}") style:transform=move || parallax_transform(scroll_y.get(), speed)>
            {children()}
        </div>
    }
}
