//! Server-level error types.

use thiserror::Error;

/// Invalid site configuration from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} is not a port number")]
    InvalidPort { key: &'static str, value: String },

    #[error("invalid {key}: {value:?} is not a boolean (use 1/0, true/false, yes/no, on/off)")]
    InvalidBool { key: &'static str, value: String },

    #[error("invalid {key}: {value:?} is not an IP address")]
    InvalidHost { key: &'static str, value: String },
}

/// Anything that stops the server from starting or keeps it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
