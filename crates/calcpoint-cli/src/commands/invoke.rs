//! Invoke command handler
//!
//! Pushes a raw payload through the same decode, invoke and encode pipeline
//! the API server uses.

use crate::OutputFormat;
use crate::error::CliError;
use calcpoint::CalculatorEndpoint;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the request body comes from
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl PayloadSource {
    /// Resolve `--payload` / `--file` into a source; neither means stdin
    pub fn from_args(payload: Option<String>, file: Option<PathBuf>) -> Result<Self, CliError> {
        match (payload, file) {
            (Some(_), Some(_)) => Err(CliError::InvalidInput(
                "Use either --payload or --file, not both".to_string(),
            )),
            (Some(payload), None) => Ok(PayloadSource::Inline(payload)),
            (None, Some(path)) if path == Path::new("-") => Ok(PayloadSource::Stdin),
            (None, Some(path)) => Ok(PayloadSource::File(path)),
            (None, None) => Ok(PayloadSource::Stdin),
        }
    }

    pub fn read(&self) -> Result<Vec<u8>, CliError> {
        match self {
            PayloadSource::Inline(payload) => Ok(payload.as_bytes().to_vec()),
            PayloadSource::File(path) => std::fs::read(path).map_err(|e| {
                CliError::InvalidInput(format!("Failed to read {}: {}", path.display(), e))
            }),
            PayloadSource::Stdin => {
                let mut buffer = Vec::new();
                std::io::stdin().read_to_end(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

pub fn run_invoke(
    source: PayloadSource,
    content_type: &str,
    accept: &str,
    format: OutputFormat,
    model_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    let endpoint = CalculatorEndpoint::calculator(model_dir.as_deref())?;
    let body = source.read()?;

    let (response, response_type) = endpoint.handle(&body, content_type, accept)?;
    eprintln!("Content-Type: {}", response_type);
    println!("{}", render(&response, format)?);
    Ok(())
}

fn render(body: &[u8], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Raw => Ok(String::from_utf8_lossy(body).into_owned()),
        OutputFormat::Pretty => {
            let value: serde_json::Value = serde_json::from_slice(body)?;
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}
