//! Error types for hash table retrieval and version resolution.

use thiserror::Error;

/// Errors surfaced by the hashing, storage and fetch layers.
///
/// The resolver is the sole recovery boundary: none of these escape
/// `VersionResolver::resolve_version`.
#[derive(Debug, Error)]
pub enum HashMapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot hash an empty file set")]
    EmptyFileSet,
}

impl From<config::ConfigError> for HashMapError {
    fn from(err: config::ConfigError) -> Self {
        HashMapError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HashMapError>;
