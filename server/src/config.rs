//! Site configuration parsed from environment variables.
//!
//! `from_lookup` takes the variable source as a closure so tests can feed a
//! map instead of mutating the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_ASSETS_DIR: &str = "public";

/// Username and password the credential gate checks against.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuthCredentials {
    pub user: String,
    pub pass: String,
}

impl std::fmt::Debug for BasicAuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthCredentials")
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: IpAddr,
    pub port: u16,
    pub production: bool,
    pub credentials: Option<BasicAuthCredentials>,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Build typed site config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `HOST`: default `0.0.0.0`
    /// - `APP_ENV` / `NODE_ENV`: `production` turns on production mode
    /// - `SITE_PRODUCTION`: boolean override for production mode
    /// - `BASIC_AUTH_USER`, `BASIC_AUTH_PASS`: gate credentials, both needed
    /// - `SITE_ASSETS_DIR`: public assets directory, default `public`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let host = match non_empty(lookup("HOST")) {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost { key: "HOST", value: raw })?,
            None => DEFAULT_HOST,
        };

        let production = match non_empty(lookup("SITE_PRODUCTION")) {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool { key: "SITE_PRODUCTION", value: raw })?,
            None => ["APP_ENV", "NODE_ENV"]
                .iter()
                .filter_map(|key| lookup(*key))
                .any(|env| env.trim().eq_ignore_ascii_case("production")),
        };

        let credentials = match (non_empty(lookup("BASIC_AUTH_USER")), non_empty(lookup("BASIC_AUTH_PASS"))) {
            (Some(user), Some(pass)) => Some(BasicAuthCredentials { user, pass }),
            _ => None,
        };

        let assets_dir = non_empty(lookup("SITE_ASSETS_DIR")).unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_owned());

        Ok(Self { host, port, production, credentials, assets_dir: PathBuf::from(assets_dir) })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Credentials the gate enforces; `None` outside production.
    pub fn gate_credentials(&self) -> Option<&BasicAuthCredentials> {
        self.credentials.as_ref().filter(|_| self.production)
    }
}

/// Accepts `1/true/yes/on` and `0/false/no/off`, case-insensitively.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
