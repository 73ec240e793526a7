//! Button and link-button with shared variants.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::either::Either;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
}

/// Class list for a button, with `extra` appended when non-empty.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Default => "btn--default",
        ButtonVariant::Secondary => "btn--secondary",
        ButtonVariant::Ghost => "btn--ghost",
    };
    let size = match size {
        ButtonSize::Default => "btn--md",
        ButtonSize::Sm => "btn--sm",
        ButtonSize::Lg => "btn--lg",
    };
    let extra = extra.trim();
    if extra.is_empty() {
        format!("btn {variant} {size}")
    } else {
        format!("btn {variant} {size} {extra}")
    }
}

/// Renders an `<a>` when `href` is set, otherwise a `<button>`.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] extra: &'static str,
    #[prop(optional, into)] href: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, size, extra);
    match href {
        Some(href) => Either::Left(view! {
            <a class=class href=href>
                {children()}
            </a>
        }),
        None => Either::Right(view! {
            <button type="button" class=class>
                {children()}
            </button>
        }),
    }
}
