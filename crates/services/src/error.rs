//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use slides_core::DeckError;

/// Errors emitted while reading raw content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("content request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("content unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted by `DeckLoader`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckLoadError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Malformed(#[from] DeckError),
}
