//! Response envelope produced by the invoke stage

use calcpoint_core::Operation;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Outcome marker carried in every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Exactly one of the two wire shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    Success(SuccessEnvelope),
    Error(ErrorEnvelope),
}

/// `{"operation", "input_a", "input_b", "result", "status": "success"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessEnvelope {
    pub operation: Operation,
    /// First operand as it appeared on the wire
    pub input_a: Number,
    /// Second operand as it appeared on the wire, `null` when absent.
    /// Unary operations echo whatever value was sent.
    pub input_b: Option<Value>,
    /// Always serialized as a float, so `15` is written `15.0`
    pub result: f64,
    pub status: Status,
}

/// `{"error", "status": "error"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub status: Status,
}

impl Envelope {
    pub fn success(
        operation: Operation,
        input_a: Number,
        input_b: Option<Value>,
        result: f64,
    ) -> Self {
        Envelope::Success(SuccessEnvelope {
            operation,
            input_a,
            input_b,
            result,
            status: Status::Success,
        })
    }

    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Error(ErrorEnvelope {
            error: message.into(),
            status: Status::Error,
        })
    }

    pub fn status(&self) -> Status {
        match self {
            Envelope::Success(_) => Status::Success,
            Envelope::Error(_) => Status::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == Status::Success
    }

    /// The computed value, if any
    pub fn result(&self) -> Option<f64> {
        match self {
            Envelope::Success(success) => Some(success.result),
            Envelope::Error(_) => None,
        }
    }

    /// The error message, if any
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Error(error) => Some(&error.error),
        }
    }
}
