// src/error.rs
// Error types shared across the gateway

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading a persona document from the config store.
///
/// A missing document is not an error; the store reports it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum PersonaError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration in {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
}

/// Failures talking to the completion API.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Convenience type alias for completion calls
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Failures loading or rendering page templates.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to read template {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template error: {0}")]
    Render(#[from] minijinja::Error),
}
