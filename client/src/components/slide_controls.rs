//! Floating prev/next buttons, slide counter, and dot index for the deck.

#[cfg(test)]
#[path = "slide_controls_test.rs"]
mod slide_controls_test;

use leptos::prelude::*;

use crate::state::slides::{DeckCommand, SlideDeck};

/// Accessible name for the dot that jumps to slide `index`.
pub fn dot_label(index: usize, title: &str) -> String {
    format!("Go to slide {}: {title}", index + 1)
}

/// Command for a dot click. Indexes past `i64::MAX` clamp to the last slide.
pub fn dot_command(index: usize) -> DeckCommand {
    DeckCommand::GoTo(i64::try_from(index).unwrap_or(i64::MAX))
}

#[component]
pub fn SlideControls(
    deck: RwSignal<SlideDeck>,
    titles: Vec<String>,
    on_navigate: Callback<DeckCommand>,
) -> impl IntoView {
    view! {
        <div class="slide-controls" role="navigation" aria-label="Slide navigation">
            <button
                type="button"
                class="slide-controls__button"
                aria-label="Previous slide"
                disabled=move || deck.get().is_first()
                on:click=move |_| on_navigate.run(DeckCommand::Prev)
            >
                "↑"
            </button>
            <span class="slide-controls__counter" aria-live="polite">
                {move || deck.get().counter_label()}
            </span>
            <button
                type="button"
                class="slide-controls__button"
                aria-label="Next slide"
                disabled=move || deck.get().is_last()
                on:click=move |_| on_navigate.run(DeckCommand::Next)
            >
                "↓"
            </button>
            <ol class="slide-controls__dots">
                {titles
                    .into_iter()
                    .enumerate()
                    .map(|(index, title)| {
                        let label = dot_label(index, &title);
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class="slide-controls__dot"
                                    class:slide-controls__dot--active=move || deck.get().current() == index
                                    aria-label=label
                                    title=title
                                    on:click=move |_| on_navigate.run(dot_command(index))
                                ></button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}
