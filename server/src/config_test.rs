use std::collections::HashMap;

use super::*;

fn config(vars: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    SiteConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = config(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert!(!cfg.production);
    assert!(cfg.credentials.is_none());
    assert_eq!(cfg.assets_dir, PathBuf::from("public"));
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_port_host_and_assets_dir() {
    let cfg = config(&[("PORT", "8080"), ("HOST", "127.0.0.1"), ("SITE_ASSETS_DIR", "/srv/site")]).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/site"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config(&[("PORT", "  "), ("SITE_ASSETS_DIR", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
}

#[test]
fn rejects_bad_port() {
    let err = config(&[("PORT", "http")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { key: "PORT", value: "http".to_owned() });
    assert!(config(&[("PORT", "70000")]).is_err());
}

#[test]
fn rejects_bad_host() {
    assert!(matches!(config(&[("HOST", "localhost")]), Err(ConfigError::InvalidHost { .. })));
}

#[test]
fn production_from_app_env_or_node_env() {
    assert!(config(&[("APP_ENV", "production")]).unwrap().production);
    assert!(config(&[("NODE_ENV", "Production")]).unwrap().production);
    assert!(!config(&[("NODE_ENV", "development")]).unwrap().production);
}

#[test]
fn site_production_overrides_env_name() {
    assert!(!config(&[("NODE_ENV", "production"), ("SITE_PRODUCTION", "off")]).unwrap().production);
    assert!(config(&[("NODE_ENV", "development"), ("SITE_PRODUCTION", "yes")]).unwrap().production);
    assert!(matches!(
        config(&[("SITE_PRODUCTION", "maybe")]),
        Err(ConfigError::InvalidBool { key: "SITE_PRODUCTION", .. })
    ));
}

#[test]
fn credentials_need_both_user_and_pass() {
    assert!(config(&[("BASIC_AUTH_USER", "etay")]).unwrap().credentials.is_none());
    assert!(config(&[("BASIC_AUTH_USER", "etay"), ("BASIC_AUTH_PASS", "")]).unwrap().credentials.is_none());

    let cfg = config(&[("BASIC_AUTH_USER", "etay"), ("BASIC_AUTH_PASS", "s3cret")]).unwrap();
    assert_eq!(cfg.credentials, Some(BasicAuthCredentials { user: "etay".to_owned(), pass: "s3cret".to_owned() }));
}

#[test]
fn gate_only_enforced_in_production() {
    let creds = [("BASIC_AUTH_USER", "etay"), ("BASIC_AUTH_PASS", "s3cret")];
    assert!(config(&creds).unwrap().gate_credentials().is_none());

    let mut prod = creds.to_vec();
    prod.push(("NODE_ENV", "production"));
    assert!(config(&prod).unwrap().gate_credentials().is_some());
}

#[test]
fn parse_bool_accepts_common_spellings() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "{raw}");
    }
    for raw in ["0", "False", "no", "OFF"] {
        assert_eq!(parse_bool(raw), Some(false), "{raw}");
    }
    assert_eq!(parse_bool("2"), None);
}

#[test]
fn debug_redacts_password() {
    let creds = BasicAuthCredentials { user: "etay".to_owned(), pass: "s3cret".to_owned() };
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("etay"));
    assert!(!rendered.contains("s3cret"));
}
