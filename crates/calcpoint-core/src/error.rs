//! Error types for calcpoint-core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Unsupported operation: {operation}. Supported operations: [{}]", quoted(.supported))]
    UnsupportedOperation {
        operation: String,
        supported: Vec<&'static str>,
    },

    #[error("Calculation error in 'divide': Division by zero")]
    DivisionByZero,

    #[error("Calculation error in 'sqrt': Square root of negative number")]
    NegativeSquareRoot,

    #[error("Calculation error in 'log': Logarithm of non-positive number")]
    NonPositiveLogarithm,

    #[error("Calculation error in '{operation}': {message}")]
    CalculationFailed { operation: String, message: String },

    #[error("Missing required parameter: '{0}'")]
    MissingField(String),

    #[error("Invalid parameter '{field}': expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },

    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl CalcError {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::UnsupportedOperation { .. } => "UnsupportedOperation",
            CalcError::DivisionByZero => "DivisionByZero",
            CalcError::NegativeSquareRoot => "NegativeSquareRoot",
            CalcError::NonPositiveLogarithm => "NonPositiveLogarithm",
            CalcError::CalculationFailed { .. } => "CalculationFailed",
            CalcError::MissingField(_) => "MissingField",
            CalcError::InvalidField { .. } => "InvalidField",
            CalcError::MalformedRequest(_) => "MalformedRequest",
        }
    }
}

fn quoted(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, CalcError>;
