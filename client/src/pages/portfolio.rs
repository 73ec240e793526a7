//! Long-form portfolio page served at `/new`.
//!
//! Sections fade in once as they scroll into view; the page provides the
//! `RevealSet` every `Reveal` wrapper writes to.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::case_study_card::{BulletList, CaseStudyCard};
use crate::components::nav::Nav;
use crate::components::parallax::Parallax;
use crate::components::reveal::Reveal;
use crate::components::section::{Section, SectionDescription, SectionHeader, SectionTitle};
use crate::data::case_studies::CASE_STUDIES;
use crate::data::profile::{CAPABILITIES, PROFILE};
use crate::state::reveal::RevealSet;
use crate::util::motion::HERO_PARALLAX_SPEED;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    provide_context(RwSignal::new(RevealSet::new()));

    view! {
        <div class="portfolio">
            <a href="#main" class="skip-link">"Skip to content"</a>
            <Nav />
            <main id="main">
                <Hero />
                <Section id="work" extra="section--work">
                    <SectionHeader>
                        <SectionTitle>"Selected Work"</SectionTitle>
                        <SectionDescription>
                            "Campaigns and launches where strategy and craft shipped together."
                        </SectionDescription>
                    </SectionHeader>
                    <div class="case-list">
                        {CASE_STUDIES
                            .iter()
                            .map(|case| {
                                view! {
                                    <Reveal id=case.id>
                                        <CaseStudyCard case />
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </Section>
                <Section id="about" extra="section--about">
                    <Reveal id="about">
                        <SectionHeader>
                            <SectionTitle>"About"</SectionTitle>
                        </SectionHeader>
                        {PROFILE.about.iter().map(|paragraph| view! { <p class="about__body">{*paragraph}</p> }).collect_view()}
                        <p class="about__meta">{PROFILE.affiliation}</p>
                    </Reveal>
                    <div class="capability-grid">
                        {CAPABILITIES
                            .iter()
                            .map(|capability| {
                                view! {
                                    <Reveal id=format!("capability-{}", capability.accent.class())>
                                        <article class=format!("capability {}", capability.accent.class())>
                                            <h3 class="capability__title">{capability.title}</h3>
                                            <BulletList items=capability.bullets />
                                        </article>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </Section>
                <Section id="contact" extra="section--contact">
                    <Reveal id="contact">
                        <SectionHeader>
                            <SectionTitle>"Let's talk"</SectionTitle>
                            <SectionDescription>{PROFILE.location}</SectionDescription>
                        </SectionHeader>
                        <Button href=PROFILE.mailto() size=ButtonSize::Lg>
                            {PROFILE.email}
                        </Button>
                    </Reveal>
                </Section>
            </main>
            <footer class="footer">
                <p>{PROFILE.name}" · "{PROFILE.location}</p>
                <a href="/" class="footer__link">"View as slides"</a>
            </footer>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <header id="intro" class="hero">
            <div class="hero__copy">
                <p class="hero__kicker">{PROFILE.headline}</p>
                <h1 class="hero__title">{PROFILE.name}</h1>
                <p class="hero__tagline">{PROFILE.tagline}</p>
                <p class="hero__lede">{PROFILE.lede}</p>
                <div class="hero__actions">
                    <Button href="#work" size=ButtonSize::Lg>
                        "View Work"
                    </Button>
                    <Button href=PROFILE.mailto() variant=ButtonVariant::Ghost size=ButtonSize::Lg>
                        "Email Me"
                    </Button>
                </div>
            </div>
            <Parallax speed=HERO_PARALLAX_SPEED extra="hero__portrait">
                <img src=PROFILE.portrait alt=PROFILE.name />
            </Parallax>
        </header>
    }
}
