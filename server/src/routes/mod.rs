//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR pages (`/`, `/new`), the compiled
//! WASM/CSS bundle under `/pkg`, the public assets directory as fallback, and
//! a health probe. Every response passes through the credential gate and
//! advertises the color-scheme client hint so the next request can render
//! the right theme on first paint.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::http::header::{self, HeaderName, HeaderValue};
use axum::middleware;
use axum::routing::get;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::gate;
use crate::state::AppState;

const COLOR_SCHEME_HINT: &str = "Sec-CH-Prefers-Color-Scheme";

/// Full site router: pages, bundle, assets, health, and site-wide layers.
pub fn app(state: AppState) -> Router {
    let leptos_options = state.leptos_options.clone();
    let routes = generate_route_list(portfolio_client::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let assets = ServeDir::new(&state.config.assets_dir);

    let router = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&state, routes, {
            let opts = leptos_options.clone();
            move || portfolio_client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(assets);

    with_site_layers(router, state)
}

/// Wrap `router` in the credential gate, client-hint headers, compression,
/// and request tracing.
pub fn with_site_layers(router: Router<AppState>, state: AppState) -> Router {
    router
        .layer(middleware::from_fn_with_state(state.clone(), gate::require_credentials))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("accept-ch"),
            HeaderValue::from_static(COLOR_SCHEME_HINT),
        ))
        .layer(SetResponseHeaderLayer::appending(header::VARY, HeaderValue::from_static(COLOR_SCHEME_HINT)))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
