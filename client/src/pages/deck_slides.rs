//! Markup for each deck slide kind.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::case_study_card::BulletList;
use crate::components::theme_toggle::ThemeToggle;
use crate::data::case_studies::CaseStudy;
use crate::data::profile::{CAPABILITIES, PROFILE};
use crate::pages::deck::SlideKind;

pub fn render_slide(slide: SlideKind) -> AnyView {
    match slide {
        SlideKind::Title => title_slide().into_any(),
        SlideKind::About => about_slide().into_any(),
        SlideKind::PortfolioDivider => divider_slide().into_any(),
        SlideKind::CaseIntro(case) => case_intro_slide(case).into_any(),
        SlideKind::CaseDetail(case) => case_detail_slide(case).into_any(),
        SlideKind::Capabilities => capabilities_slide().into_any(),
        SlideKind::ThankYou => thank_you_slide().into_any(),
    }
}

fn title_slide() -> impl IntoView {
    view! {
        <div class="slide slide--title">
            <div class="slide__corner">
                <ThemeToggle />
            </div>
            <img class="slide__portrait" src=PROFILE.portrait alt=PROFILE.name />
            <h1 class="slide__display">{PROFILE.name}</h1>
            <p class="slide__kicker">{PROFILE.headline}</p>
            <p class="slide__lede">{PROFILE.tagline}</p>
            <p class="slide__hint" aria-hidden="true">"Scroll or press ↓"</p>
        </div>
    }
}

fn about_slide() -> impl IntoView {
    view! {
        <div class="slide slide--about">
            <h2 class="slide__heading">"About"</h2>
            {PROFILE.about.iter().map(|paragraph| view! { <p class="slide__body">{*paragraph}</p> }).collect_view()}
            <p class="slide__meta">{PROFILE.affiliation}" · "{PROFILE.location}</p>
        </div>
    }
}

fn divider_slide() -> impl IntoView {
    view! {
        <div class="slide slide--divider">
            <h2 class="slide__display">"Portfolio"</h2>
            <p class="slide__lede">"Selected work"</p>
        </div>
    }
}

fn case_intro_slide(case: &'static CaseStudy) -> impl IntoView {
    view! {
        <div class="slide slide--case-intro">
            <img class="slide__logo" src=case.logo alt=format!("{} logo", case.title) />
            <h2 class="slide__display">{case.title}</h2>
            <p class="slide__kicker">{case.role}</p>
            <p class="slide__lede">{case.subtitle}</p>
        </div>
    }
}

fn case_detail_slide(case: &'static CaseStudy) -> impl IntoView {
    view! {
        <div class="slide slide--case-detail">
            <header class="slide__header">
                <h2 class="slide__heading">{case.title}</h2>
                <p class="slide__body">{case.problem}</p>
            </header>
            <div class="slide__columns">
                <section>
                    <h3>"Approach"</h3>
                    <BulletList items=case.approach />
                </section>
                <section>
                    <h3>"Outcome"</h3>
                    <BulletList items=case.outcome />
                </section>
            </div>
            {case
                .hero()
                .map(|hero| view! { <img class="slide__artifact" src=hero.src alt=hero.alt loading="lazy" /> })}
        </div>
    }
}

fn capabilities_slide() -> impl IntoView {
    view! {
        <div class="slide slide--capabilities">
            <h2 class="slide__heading">"What I Bring"</h2>
            <div class="capability-grid">
                {CAPABILITIES
                    .iter()
                    .map(|capability| {
                        view! {
                            <article class=format!("capability {}", capability.accent.class())>
                                <h3 class="capability__title">{capability.title}</h3>
                                <BulletList items=capability.bullets />
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn thank_you_slide() -> impl IntoView {
    view! {
        <div class="slide slide--thanks">
            <h2 class="slide__display">"Thank You"</h2>
            <p class="slide__lede">"Let's make something that moves the needle."</p>
            <div class="slide__actions">
                <Button href=PROFILE.mailto() size=ButtonSize::Lg>
                    "Email Me"
                </Button>
                <Button href="/new" variant=ButtonVariant::Secondary size=ButtonSize::Lg>
                    "Full Portfolio"
                </Button>
            </div>
            <p class="slide__meta">{PROFILE.email}" · "{PROFILE.location}</p>
        </div>
    }
}
