use std::path::PathBuf;
use std::sync::Arc;

use leptos::prelude::LeptosOptions;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use super::*;
use crate::config::{BasicAuthCredentials, SiteConfig};
use crate::gate::{AUTH_COOKIE_NAME, basic_header};

fn site_config(gated: bool) -> SiteConfig {
    SiteConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        production: gated,
        credentials: Some(BasicAuthCredentials { user: "etay".to_owned(), pass: "s3cret".to_owned() }),
        assets_dir: PathBuf::from("public"),
    }
}

fn state(gated: bool) -> AppState {
    let options = LeptosOptions::builder().output_name(Arc::<str>::from("portfolio")).build();
    AppState::new(options, site_config(gated))
}

/// Serve `/`, `/healthz`, and `/pkg/app.js` behind the site layers and
/// return the bound address.
async fn spawn(gated: bool) -> std::net::SocketAddr {
    let router = Router::new()
        .route("/", get(|| async { "home" }))
        .route("/healthz", get(healthz))
        .route("/pkg/app.js", get(|| async { "js" }));
    let app = with_site_layers(router, state(gated));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

struct RawResponse {
    status: u16,
    head: String,
}

impl RawResponse {
    fn header(&self, name: &str) -> Vec<String> {
        self.head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .filter(|(key, _)| key.trim().eq_ignore_ascii_case(name))
            .map(|(_, value)| value.trim().to_owned())
            .collect()
    }
}

async fn get_raw(addr: std::net::SocketAddr, path: &str, extra_headers: &[(&str, &str)]) -> RawResponse {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let mut request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n");
    for (name, value) in extra_headers {
        request.push_str(&format!("{name}: {value}\r\n"));
    }
    request.push_str("\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let text = String::from_utf8_lossy(&raw).into_owned();
    let head = text.split("\r\n\r\n").next().unwrap_or_default().to_owned();
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .unwrap();
    RawResponse { status, head }
}

#[tokio::test]
async fn open_site_serves_everything() {
    let addr = spawn(false).await;
    assert_eq!(get_raw(addr, "/", &[]).await.status, 200);
    assert_eq!(get_raw(addr, "/healthz", &[]).await.status, 200);
}

#[tokio::test]
async fn every_response_advertises_color_scheme_hint() {
    let addr = spawn(false).await;
    let response = get_raw(addr, "/", &[]).await;
    assert_eq!(response.header("accept-ch"), vec![COLOR_SCHEME_HINT.to_owned()]);
    assert!(response.header("vary").iter().any(|v| v.contains(COLOR_SCHEME_HINT)));
}

#[tokio::test]
async fn gated_site_challenges_anonymous_requests() {
    let addr = spawn(true).await;
    let response = get_raw(addr, "/", &[]).await;
    assert_eq!(response.status, 401);
    assert_eq!(response.header("www-authenticate"), vec!["Basic realm=\"Private\"".to_owned()]);
}

#[tokio::test]
async fn gated_site_bypasses_bundle_and_health() {
    let addr = spawn(true).await;
    assert_eq!(get_raw(addr, "/healthz", &[]).await.status, 200);
    assert_eq!(get_raw(addr, "/pkg/app.js", &[]).await.status, 200);
}

#[tokio::test]
async fn valid_header_sets_auth_cookie_that_later_passes() {
    let addr = spawn(true).await;
    let authorization = basic_header("etay", "s3cret");
    let response = get_raw(addr, "/", &[("Authorization", &authorization)]).await;
    assert_eq!(response.status, 200);

    let set_cookie = response.header("set-cookie");
    let cookie = set_cookie
        .iter()
        .find(|value| value.starts_with(&format!("{AUTH_COOKIE_NAME}=")))
        .unwrap();
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=3600"));

    let pair = cookie.split(';').next().unwrap().to_owned();
    let again = get_raw(addr, "/", &[("Cookie", &pair)]).await;
    assert_eq!(again.status, 200);
    assert!(again.header("set-cookie").is_empty());
}

#[tokio::test]
async fn wrong_header_is_challenged() {
    let addr = spawn(true).await;
    let authorization = basic_header("etay", "nope");
    assert_eq!(get_raw(addr, "/", &[("Authorization", &authorization)]).await.status, 401);
}
