//! Fade-in wrapper driven by the page's shared `RevealSet`.
//!
//! Each wrapper owns one observer that watches only its own element and
//! stops watching after the first intersection. Under reduced motion the
//! element is marked revealed on mount and no observer is created.

use leptos::prelude::*;

use crate::state::reveal::RevealSet;

#[component]
pub fn Reveal(#[prop(into)] id: String, #[prop(optional)] extra: &'static str, children: Children) -> impl IntoView {
    let reveal = expect_context::<RwSignal<RevealSet>>();
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    watch(id.clone(), node, reveal);

    let revealed = {
        let id = id.clone();
        move || reveal.with(|set| set.is_revealed(&id))
    };

    view! {
        <div
            class=format!("reveal {extra}")
            class:is-revealed=revealed
            data-reveal-id=id
            node_ref=node
        >
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn watch(id: String, node: NodeRef<leptos::html::Div>, reveal: RwSignal<RevealSet>) {
    use crate::state::reveal::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
    use crate::util::motion::prefers_reduced_motion;
    use crate::util::observer::{Observer, ObserverOptions};

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        if prefers_reduced_motion() {
            reveal.update(|set| {
                set.mark(&id);
            });
            return;
        }

        let observed = id.clone();
        let observer = Observer::new(
            ObserverOptions::new(REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN),
            None,
            move |entry, observer| {
                let first = reveal
                    .try_update(|set| set.observe(&observed, entry.is_intersecting()))
                    .unwrap_or(false);
                if first {
                    observer.unobserve(&entry.target());
                }
            },
        );
        match observer {
            Ok(observer) => {
                let target: &web_sys::Element = &el;
                observer.observe(Some(target));
                let stored = StoredValue::new_local(observer);
                on_cleanup(move || stored.dispose());
            }
            Err(e) => {
                log::warn!("reveal: observer unavailable for {id}: {e:?}");
                reveal.update(|set| {
                    set.mark(&id);
                });
            }
        }
    });
}
