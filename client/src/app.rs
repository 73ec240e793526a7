//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::data::profile::PROFILE;
use crate::pages::{deck::DeckPage, portfolio::PortfolioPage};
use crate::util::theme_dom::{self, THEME_BOOTSTRAP_SCRIPT};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The bootstrap script runs before first paint so the stored theme wins
/// over whatever class the server guessed from the request.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let mode = theme_dom::initial_mode();
    view! {
        <!DOCTYPE html>
        <html lang="en" class=mode.root_class() data-server-theme=mode.as_str()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="color-scheme" content="light dark"/>
                <script inner_html=THEME_BOOTSTRAP_SCRIPT></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the page's theme controller and shares it, plus the mode signal
/// the toggles render from, with every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = theme_dom::new_shared();
    let mode = RwSignal::new(theme_dom::initial_mode());

    #[cfg(feature = "hydrate")]
    theme_dom::attach(theme.clone(), mode);

    provide_context(theme);
    provide_context(mode);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=format!("{} | {}", PROFILE.name, PROFILE.headline)/>
        <Meta name="description" content=PROFILE.tagline/>
        <Meta name="robots" content="noindex, nofollow"/>
        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DeckPage/>
                <Route path=StaticSegment("new") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}
