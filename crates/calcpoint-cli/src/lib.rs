//! calcpoint CLI library

pub mod commands;
pub mod error;

/// How `invoke` prints the response body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Body exactly as encoded
    #[default]
    Raw,
    /// Indented JSON
    Pretty,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Raw => write!(f, "raw"),
            OutputFormat::Pretty => write!(f, "pretty"),
        }
    }
}
