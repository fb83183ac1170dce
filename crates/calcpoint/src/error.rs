//! Error types for the calcpoint adapter

use thiserror::Error;

/// Failures at the request/response boundary.
///
/// These propagate to the host. Computational failures never do: they are
/// folded into the response envelope by `invoke`.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Unsupported content type: {0}. Only 'application/json' is supported.")]
    UnsupportedContentType(String),

    #[error("Unsupported accept type: {0}. Only 'application/json' is supported.")]
    UnsupportedAcceptType(String),

    #[error("Invalid JSON format: {0}")]
    InvalidPayload(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
