//! Light/dark toggle button.
//!
//! The icon and label always describe the mode the click switches to.

use leptos::prelude::*;

use crate::state::theme::ThemeMode;
use crate::util::theme_dom::SharedTheme;

#[component]
pub fn ThemeToggle(#[prop(optional)] extra: &'static str) -> impl IntoView {
    let theme = expect_context::<SharedTheme>();
    let mode = expect_context::<RwSignal<ThemeMode>>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        mode.set(theme.toggle());
    };

    view! {
        <button
            type="button"
            class=format!("theme-toggle {extra}")
            aria-label=move || mode.get().toggle_label()
            title=move || mode.get().toggle_title()
            on:click=on_click
        >
            {move || mode.get().toggle_icon()}
        </button>
    }
}
