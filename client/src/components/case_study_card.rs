//! Long-form case study card: hero image, brief, approach, outcomes.

use leptos::prelude::*;

use crate::data::case_studies::CaseStudy;

#[component]
pub fn CaseStudyCard(case: &'static CaseStudy) -> impl IntoView {
    let class = if case.featured { "case-card case-card--featured" } else { "case-card" };
    view! {
        <article class=class id=format!("case-{}", case.id)>
            {case
                .hero()
                .map(|hero| {
                    view! {
                        <div class="case-card__media">
                            <img src=hero.src alt=hero.alt loading="lazy" />
                        </div>
                    }
                })}
            <div class="case-card__body">
                <header class="case-card__header">
                    <h3 class="case-card__title">{case.title}</h3>
                    <p class="case-card__role">{case.role}</p>
                </header>
                <p class="case-card__summary">{case.summary}</p>
                <div class="case-card__grid">
                    <section class="case-card__block">
                        <h4>"Brief"</h4>
                        <p>{case.problem}</p>
                    </section>
                    <section class="case-card__block">
                        <h4>"Approach"</h4>
                        <BulletList items=case.approach />
                    </section>
                    <section class="case-card__block">
                        <h4>"Outcome"</h4>
                        <BulletList items=case.outcome />
                    </section>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn BulletList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="bullet-list">
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}
