//! Request shapes for the calculator

use crate::operation::{BinaryOp, Operation, UnaryOp};
use crate::{CalcError, Result};
use serde::{Deserialize, Serialize};

/// A calculation whose operand count matches its operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalculationRequest {
    Binary(BinaryRequest),
    Unary(UnaryRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryRequest {
    pub operation: BinaryOp,
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnaryRequest {
    pub operation: UnaryOp,
    pub a: f64,
}

impl CalculationRequest {
    /// Build a request, checking the operand count once.
    ///
    /// A binary operation without `b` fails with `MissingField("b")`.
    /// For a unary operation `b` is ignored.
    pub fn new(operation: Operation, a: f64, b: Option<f64>) -> Result<Self> {
        match operation {
            Operation::Binary(operation) => {
                let b = b.ok_or_else(|| CalcError::MissingField("b".to_string()))?;
                Ok(Self::binary(operation, a, b))
            }
            Operation::Unary(operation) => Ok(Self::unary(operation, a)),
        }
    }

    pub fn binary(operation: BinaryOp, a: f64, b: f64) -> Self {
        CalculationRequest::Binary(BinaryRequest { operation, a, b })
    }

    pub fn unary(operation: UnaryOp, a: f64) -> Self {
        CalculationRequest::Unary(UnaryRequest { operation, a })
    }

    pub fn operation(&self) -> Operation {
        match self {
            CalculationRequest::Binary(req) => Operation::Binary(req.operation),
            CalculationRequest::Unary(req) => Operation::Unary(req.operation),
        }
    }

    pub fn a(&self) -> f64 {
        match self {
            CalculationRequest::Binary(req) => req.a,
            CalculationRequest::Unary(req) => req.a,
        }
    }

    /// Second operand, present only for binary operations
    pub fn b(&self) -> Option<f64> {
        match self {
            CalculationRequest::Binary(req) => Some(req.b),
            CalculationRequest::Unary(_) => None,
        }
    }
}
