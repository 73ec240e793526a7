//! Page section scaffolding shared by the long-form page.

use leptos::prelude::*;

#[component]
pub fn Section(
    #[prop(optional)] id: &'static str,
    #[prop(optional)] extra: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("section {extra}")>
            <div class="section__inner">{children()}</div>
        </section>
    }
}

#[component]
pub fn SectionHeader(children: Children) -> impl IntoView {
    view! { <div class="section__header">{children()}</div> }
}

#[component]
pub fn SectionTitle(children: Children) -> impl IntoView {
    view! { <h2 class="section__title">{children()}</h2> }
}

#[component]
pub fn SectionDescription(children: Children) -> impl IntoView {
    view! { <p class="section__description">{children()}</p> }
}
