//! Error types.
//!
//! Each boundary has its own error enum; `Error` wraps them for callers that
//! don't care which layer failed. Deck mutations never fail: invalid indices
//! and empty undo are no-ops, not errors.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any failure surfaced by the deck builder.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    DeckFile(#[from] DeckFileError),
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[source] toml::de::Error),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Catalog request failures. None of these are retried.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("failed to build catalog client: {0}")]
    Client(String),
}

/// Deck import/export failures. The deck is never modified on error.
#[derive(Debug, Error)]
pub enum DeckFileError {
    #[error("failed to access deck file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid file format: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("invalid file format: expected a JSON array of cards")]
    NotAnArray,
    #[error("failed to encode deck: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("simple-format deck ({entries} image entries) cannot be turned back into cards")]
    SimpleFormatUnsupported { entries: usize },
}

impl CatalogError {
    /// Short user-facing notice for transient UI feedback.
    #[must_use]
    pub fn notice(&self) -> &'static str {
        match self {
            CatalogError::Transport(e) if e.is_timeout() => "Catalog request timed out",
            CatalogError::Transport(_) => "Catalog unreachable",
            CatalogError::Status { .. } => "Catalog returned an error",
            CatalogError::Client(_) => "Catalog client misconfigured",
        }
    }
}
