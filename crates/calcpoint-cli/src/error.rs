//! Error types for calcpoint-cli

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error(transparent)]
    Adapter(#[from] calcpoint::AdapterError),

    #[error(transparent)]
    Calculation(#[from] calcpoint::CalcError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
