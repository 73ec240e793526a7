#![recursion_limit = "256"]

mod config;
mod error;
mod gate;
mod routes;
mod state;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env is normal outside local development.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Ok(path) = dotenv {
        tracing::info!(path = %path.display(), "loaded environment file");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server failed");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<(), ServerError> {
    let config = SiteConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;

    let addr = config.addr();
    let gated = config.gate_credentials().is_some();
    if config.production && !gated {
        tracing::warn!("production mode without BASIC_AUTH_USER/BASIC_AUTH_PASS; credential gate disabled");
    }

    let state = state::AppState::new(leptos_options, config);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, gated, "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
