//! Production-only HTTP Basic credential gate.
//!
//! DESIGN
//! ======
//! A request passes when it carries the right `Authorization: Basic` header
//! or a cookie proving it did so earlier. The cookie holds the SHA-256 of
//! `user:pass`, so it is worthless once the credentials rotate. Asset paths
//! the browser fetches without credentials (WASM bundle, favicons) and the
//! health probe bypass the gate.
//!
//! `CredentialGate::evaluate` is a pure decision over the request's path and
//! headers; `require_credentials` is the thin Axum middleware around it.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use time::Duration;

use crate::config::BasicAuthCredentials;
use crate::state::AppState;

pub const AUTH_COOKIE_NAME: &str = "auth";
pub const AUTH_COOKIE_MAX_AGE: Duration = Duration::hours(1);
pub const CHALLENGE: &str = "Basic realm=\"Private\"";
pub const CHALLENGE_BODY: &str = "Authorization Required";

const BYPASS_PREFIXES: &[&str] = &["/pkg/"];
const BYPASS_PATHS: &[&str] = &["/favicon.ico", "/favicon.svg", "/healthz"];

/// What to do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Pass through unchanged.
    Allow,
    /// Pass through and set the auth cookie on the response.
    AllowAndRemember,
    /// Answer `401` with a Basic challenge.
    Challenge,
}

#[derive(Clone)]
pub struct CredentialGate {
    credentials: String,
    cookie_token: String,
}

impl std::fmt::Debug for CredentialGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialGate").finish_non_exhaustive()
    }
}

impl CredentialGate {
    pub fn new(credentials: &BasicAuthCredentials) -> Self {
        let joined = format!("{}:{}", credentials.user, credentials.pass);
        let cookie_token = credential_token(&joined);
        Self { credentials: joined, cookie_token }
    }

    /// Value stored in the auth cookie after a successful header check.
    pub fn cookie_token(&self) -> &str {
        &self.cookie_token
    }

    pub fn evaluate(&self, path: &str, authorization: Option<&str>, cookie: Option<&str>) -> GateDecision {
        if is_bypass_path(path) {
            return GateDecision::Allow;
        }
        if authorization.is_some_and(|value| self.header_matches(value)) {
            return GateDecision::AllowAndRemember;
        }
        if cookie.is_some_and(|value| ct_eq(value.as_bytes(), self.cookie_token.as_bytes())) {
            return GateDecision::Allow;
        }
        GateDecision::Challenge
    }

    fn header_matches(&self, value: &str) -> bool {
        let Some((scheme, encoded)) = value.trim().split_once(' ') else {
            return false;
        };
        if !scheme.eq_ignore_ascii_case("basic") {
            return false;
        }
        match BASE64.decode(encoded.trim()) {
            Ok(decoded) => ct_eq(&decoded, self.credentials.as_bytes()),
            Err(_) => false,
        }
    }

    /// `Set-Cookie` for a request that just presented valid credentials.
    pub fn remember_cookie(&self) -> Cookie<'static> {
        Cookie::build((AUTH_COOKIE_NAME, self.cookie_token().to_owned()))
            .path("/")
            .http_only(true)
            .secure(true)
            .same_site(SameSite::Lax)
            .max_age(AUTH_COOKIE_MAX_AGE)
            .build()
    }
}

pub fn is_bypass_path(path: &str) -> bool {
    BYPASS_PATHS.contains(&path) || BYPASS_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Lowercase hex SHA-256 of `user:pass`.
pub fn credential_token(joined: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
}

/// `Authorization` header value for `user:pass`.
#[cfg(test)]
pub fn basic_header(user: &str, pass: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{user}:{pass}")))
}

fn ct_eq(provided: &[u8], expected: &[u8]) -> bool {
    provided.ct_eq(expected).into()
}

/// The `401` answer for a request without valid credentials.
pub fn challenge_response() -> Response {
    let mut response = (StatusCode::UNAUTHORIZED, CHALLENGE_BODY).into_response();
    response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(CHALLENGE));
    response
}

/// Axum middleware enforcing the gate when one is configured.
pub async fn require_credentials(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    let Some(gate) = state.gate.as_deref() else {
        return next.run(request).await;
    };

    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let cookie = jar.get(AUTH_COOKIE_NAME).map(Cookie::value);

    match gate.evaluate(request.uri().path(), authorization, cookie) {
        GateDecision::Allow => next.run(request).await,
        GateDecision::AllowAndRemember => {
            let response = next.run(request).await;
            (jar.add(gate.remember_cookie()), response).into_response()
        }
        GateDecision::Challenge => {
            tracing::debug!(path = %request.uri().path(), "credential gate: challenge");
            challenge_response()
        }
    }
}
