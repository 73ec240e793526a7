//! Paginated slide deck served at `/`.
//!
//! DESIGN
//! ======
//! Every slide is a full-viewport panel tagged with `data-slide-index`.
//! One observer rooted at the deck viewport reports panels crossing the
//! half-visible line and feeds `SlideDeck::observe_crossing`; buttons, dots,
//! and the keyboard go through `SlideDeck::apply` and then scroll the
//! chosen panel into view. Both paths write the same signal, so whichever
//! fires last wins.

#[cfg(test)]
#[path = "deck_test.rs"]
mod deck_test;

use leptos::prelude::*;

use crate::components::slide_controls::SlideControls;
use crate::data::case_studies::{CASE_STUDIES, CaseStudy};
use crate::pages::deck_slides::render_slide;
use crate::state::slides::{DeckCommand, SlideDeck};
use crate::util::scroll::scroll_to_slide;

/// One panel of the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideKind {
    Title,
    About,
    PortfolioDivider,
    CaseIntro(&'static CaseStudy),
    CaseDetail(&'static CaseStudy),
    Capabilities,
    ThankYou,
}

impl SlideKind {
    /// Short name used for the slide's dot and accessible label.
    pub fn title(self) -> String {
        match self {
            Self::Title => "Title".to_owned(),
            Self::About => "About".to_owned(),
            Self::PortfolioDivider => "Portfolio".to_owned(),
            Self::CaseIntro(case) => case.title.to_owned(),
            Self::CaseDetail(case) => format!("{} Details", case.title),
            Self::Capabilities => "Capabilities".to_owned(),
            Self::ThankYou => "Thank You".to_owned(),
        }
    }
}

/// Deck order: opener, about, then an intro and detail slide per case
/// study, closing with capabilities and contact.
pub fn deck_slides() -> Vec<SlideKind> {
    let mut slides = vec![SlideKind::Title, SlideKind::About, SlideKind::PortfolioDivider];
    for case in CASE_STUDIES {
        slides.push(SlideKind::CaseIntro(case));
        slides.push(SlideKind::CaseDetail(case));
    }
    slides.push(SlideKind::Capabilities);
    slides.push(SlideKind::ThankYou);
    slides
}

#[component]
pub fn DeckPage() -> impl IntoView {
    let slides = deck_slides();
    let deck = RwSignal::new(SlideDeck::new(slides.len()));
    let viewport = NodeRef::<leptos::html::Main>::new();

    let navigate = Callback::new(move |command: DeckCommand| {
        if let Some(index) = deck.try_update(|d| d.apply(command)).flatten() {
            scroll_to_slide(index);
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let keys = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.alt_key() || ev.ctrl_key() || ev.meta_key() {
                return;
            }
            if let Some(command) = DeckCommand::from_key(&ev.key()) {
                ev.prevent_default();
                navigate.run(command);
            }
        });
        on_cleanup(move || keys.remove());
        track_visible_slide(viewport, deck);
    }

    let titles = slides.iter().map(|slide| slide.title()).collect::<Vec<_>>();

    view! {
        <div class="deck">
            <main class="deck__viewport" node_ref=viewport>
                {slides
                    .into_iter()
                    .enumerate()
                    .map(|(index, slide)| {
                        view! {
                            <section
                                class="deck__slide"
                                data-slide-index=index.to_string()
                                aria-label=slide.title()
                            >
                                {render_slide(slide)}
                            </section>
                        }
                    })
                    .collect_view()}
            </main>
            <SlideControls deck titles on_navigate=navigate />
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn track_visible_slide(viewport: NodeRef<leptos::html::Main>, deck: RwSignal<SlideDeck>) {
    use wasm_bindgen::JsCast as _;

    use crate::state::slides::SLIDE_VISIBILITY_THRESHOLD;
    use crate::util::observer::{Observer, ObserverOptions};
    use crate::util::scroll::{SLIDE_INDEX_ATTR, parse_slide_index};

    Effect::new(move |_| {
        let Some(root) = viewport.get() else {
            return;
        };
        let root_el: &web_sys::Element = &root;
        let observer = Observer::new(
            ObserverOptions::new(SLIDE_VISIBILITY_THRESHOLD, "0px"),
            Some(root_el),
            move |entry, _| {
                if !entry.is_intersecting() {
                    return;
                }
                let raw = entry.target().get_attribute(SLIDE_INDEX_ATTR);
                if let Some(index) = parse_slide_index(raw.as_deref()) {
                    deck.update(|d| {
                        d.observe_crossing(index, entry.intersection_ratio());
                    });
                }
            },
        );
        let observer = match observer {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("deck: observer unavailable: {e:?}");
                return;
            }
        };

        match root_el.query_selector_all(&format!("[{SLIDE_INDEX_ATTR}]")) {
            Ok(panels) => {
                for i in 0..panels.length() {
                    let panel = panels.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok());
                    observer.observe(panel.as_ref());
                }
            }
            Err(e) => log::warn!("deck: panel query failed: {e:?}"),
        }

        let stored = StoredValue::new_local(observer);
        on_cleanup(move || stored.dispose());
    });
}
