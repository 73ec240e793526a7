use super::*;

fn gate() -> CredentialGate {
    CredentialGate::new(&BasicAuthCredentials { user: "etay".to_owned(), pass: "s3cret".to_owned() })
}

#[test]
fn correct_header_passes_and_remembers() {
    let header = basic_header("etay", "s3cret");
    assert_eq!(gate().evaluate("/", Some(&header), None), GateDecision::AllowAndRemember);
}

#[test]
fn scheme_is_case_insensitive() {
    let header = basic_header("etay", "s3cret").replacen("Basic", "basic", 1);
    assert_eq!(gate().evaluate("/new", Some(&header), None), GateDecision::AllowAndRemember);
}

#[test]
fn wrong_password_is_challenged() {
    let header = basic_header("etay", "guess");
    assert_eq!(gate().evaluate("/", Some(&header), None), GateDecision::Challenge);
}

#[test]
fn malformed_headers_are_challenged() {
    let gate = gate();
    for header in ["Basic", "Basic !!!not-base64!!!", "Bearer abc", "", "ZXRheTpzM2NyZXQ="] {
        assert_eq!(gate.evaluate("/", Some(header), None), GateDecision::Challenge, "{header:?}");
    }
}

#[test]
fn matching_cookie_passes_without_remembering_again() {
    let gate = gate();
    let token = gate.cookie_token().to_owned();
    assert_eq!(gate.evaluate("/", None, Some(&token)), GateDecision::Allow);
}

#[test]
fn forged_cookie_is_challenged() {
    let gate = gate();
    assert_eq!(gate.evaluate("/", None, Some("1")), GateDecision::Challenge);
    assert_eq!(gate.evaluate("/", None, Some("")), GateDecision::Challenge);
}

#[test]
fn no_credentials_is_challenged() {
    assert_eq!(gate().evaluate("/", None, None), GateDecision::Challenge);
}

#[test]
fn bypass_paths_skip_the_gate() {
    let gate = gate();
    for path in ["/pkg/portfolio.wasm", "/pkg/portfolio.css", "/favicon.ico", "/favicon.svg", "/healthz"] {
        assert_eq!(gate.evaluate(path, None, None), GateDecision::Allow, "{path}");
    }
}

#[test]
fn bypass_is_exact_for_single_files() {
    assert!(!is_bypass_path("/healthz/extra"));
    assert!(!is_bypass_path("/favicon.svg.bak"));
    assert!(!is_bypass_path("/pkg"));
    assert!(!is_bypass_path("/new"));
}

#[test]
fn cookie_token_is_sha256_hex_of_credentials() {
    let token = gate().cookie_token().to_owned();
    assert_eq!(token, credential_token("etay:s3cret"));
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn credential_token_known_vector() {
    assert_eq!(credential_token(""), "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
}

#[test]
fn rotated_credentials_invalidate_old_cookie() {
    let old = gate().cookie_token().to_owned();
    let rotated = CredentialGate::new(&BasicAuthCredentials { user: "etay".to_owned(), pass: "n3w".to_owned() });
    assert_eq!(rotated.evaluate("/", None, Some(&old)), GateDecision::Challenge);
}

#[test]
fn remember_cookie_attributes() {
    let cookie = gate().remember_cookie();
    assert_eq!(cookie.name(), AUTH_COOKIE_NAME);
    assert_eq!(cookie.value(), gate().cookie_token());
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
}

#[test]
fn challenge_response_carries_realm() {
    let response = challenge_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).and_then(|v| v.to_str().ok()),
        Some("Basic realm=\"Private\"")
    );
}

#[test]
fn debug_does_not_leak_credentials() {
    let rendered = format!("{:?}", gate());
    assert!(!rendered.contains("s3cret"));
    assert!(!rendered.contains(gate().cookie_token()));
}
