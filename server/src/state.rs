//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and middleware via the `State`
//! extractor. Everything in it is immutable after startup, so cloning is a
//! couple of reference-count bumps per request.

use std::sync::Arc;

use axum::extract::FromRef;
use leptos::prelude::LeptosOptions;

use crate::config::SiteConfig;
use crate::gate::CredentialGate;

#[derive(Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub config: Arc<SiteConfig>,
    /// Present only when the credential gate is enforced.
    pub gate: Option<Arc<CredentialGate>>,
}

impl AppState {
    pub fn new(leptos_options: LeptosOptions, config: SiteConfig) -> Self {
        let gate = config.gate_credentials().map(|creds| Arc::new(CredentialGate::new(creds)));
        Self { leptos_options, config: Arc::new(config), gate }
    }
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}
