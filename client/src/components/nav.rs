//! Fixed top navigation for the long-form page.
//!
//! DESIGN
//! ======
//! Desktop shows inline anchor links plus the theme toggle. Narrow screens
//! get a menu button that opens a modal drawer. While the drawer is open,
//! Tab cycles within it, Escape closes it, and a click on the backdrop
//! closes it. The bar gains a shadow once the page scrolls past
//! `NAV_SHADOW_OFFSET`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::data::profile::PROFILE;

/// Anchor targets shown in both the bar and the drawer.
pub const NAV_LINKS: [(&str, &str); 3] = [("#work", "Work"), ("#about", "About"), ("#contact", "Contact")];

/// Index to move focus to when Tab would leave a trapped region.
///
/// `active` is the position of the focused element among the `count`
/// focusable elements. Returns `None` when the browser's default order
/// already keeps focus inside.
pub fn focus_trap_target(count: usize, active: Option<usize>, shift: bool) -> Option<usize> {
    let last = count.checked_sub(1)?;
    match (active, shift) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(i), false) if i >= last => Some(0),
        (Some(0), true) => Some(last),
        _ => None,
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let open = RwSignal::new(false);
    let scrolled = RwSignal::new(false);
    let close_ref = NodeRef::<leptos::html::Button>::new();
    let link_refs: [NodeRef<leptos::html::A>; 3] = [NodeRef::new(), NodeRef::new(), NodeRef::new()];

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::{is_scrolled, window_scroll_y};

        scrolled.set(is_scrolled(window_scroll_y()));
        let scroll = window_event_listener(leptos::ev::scroll, move |_| {
            scrolled.set(is_scrolled(window_scroll_y()));
        });
        let escape = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && open.get_untracked() {
                open.set(false);
            }
        });
        on_cleanup(move || {
            scroll.remove();
            escape.remove();
        });

        Effect::new(move |_| {
            if !open.get() {
                return;
            }
            if let Some(button) = close_ref.get()
                && let Err(e) = button.focus()
            {
                log::debug!("nav: focus failed: {e:?}");
            }
        });
    }

    let on_drawer_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Tab" {
            return;
        }
        #[cfg(feature = "hydrate")]
        trap_focus(&ev, close_ref, link_refs);
        #[cfg(not(feature = "hydrate"))]
        let _ = (close_ref, link_refs);
    };

    view! {
        <header class="nav" class:nav--scrolled=move || scrolled.get()>
            <div class="nav__bar">
                <a href="#intro" class="nav__brand">
                    <img class="nav__avatar" src=PROFILE.portrait alt="" />
                    <span>{PROFILE.name}</span>
                </a>
                <nav class="nav__links" aria-label="Primary">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a href=href class="nav__link">{label}</a> })
                        .collect_view()}
                    <ThemeToggle />
                </nav>
                <button
                    type="button"
                    class="nav__menu-button"
                    aria-label="Open menu"
                    aria-haspopup="dialog"
                    aria-expanded=move || if open.get() { "true" } else { "false" }
                    on:click=move |_| open.set(true)
                >
                    "☰"
                </button>
            </div>
            <Show when=move || open.get()>
                <div class="nav__backdrop" on:click=move |_| open.set(false)>
                    <div
                        class="nav__drawer"
                        role="dialog"
                        aria-modal="true"
                        aria-label="Menu"
                        on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                        on:keydown=on_drawer_keydown
                    >
                        <div class="nav__drawer-header">
                            <span class="nav__drawer-title">"Menu"</span>
                            <button
                                type="button"
                                class="nav__close"
                                aria-label="Close menu"
                                node_ref=close_ref
                                on:click=move |_| open.set(false)
                            >
                                "✕"
                            </button>
                        </div>
                        {NAV_LINKS
                            .into_iter()
                            .zip(link_refs)
                            .map(|((href, label), link_ref)| {
                                view! {
                                    <a
                                        href=href
                                        class="nav__drawer-link"
                                        node_ref=link_ref
                                        on:click=move |_| open.set(false)
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle extra="nav__drawer-toggle" />
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[cfg(feature = "hydrate")]
fn trap_focus(
    ev: &leptos::ev::KeyboardEvent,
    close_ref: NodeRef<leptos::html::Button>,
    link_refs: [NodeRef<leptos::html::A>; 3],
) {
    let mut focusables: Vec<web_sys::HtmlElement> = Vec::with_capacity(link_refs.len() + 1);
    if let Some(button) = close_ref.get_untracked() {
        focusables.push((*button).clone());
    }
    for link in link_refs {
        if let Some(anchor) = link.get_untracked() {
            focusables.push((*anchor).clone());
        }
    }

    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .and_then(|active| focusables.iter().position(|el| el.is_same_node(Some(active.as_ref()))));

    let Some(target) = focus_trap_target(focusables.len(), active, ev.shift_key()) else {
        return;
    };
    ev.prevent_default();
    if let Some(el) = focusables.get(target)
        && let Err(e) = el.focus()
    {
        log::debug!("nav: focus failed: {e:?}");
    }
}
