//! The closed set of calculator operations
//!
//! Operations are split by arity so that a request can never pair a binary
//! operation with a single operand (or the reverse) once it has been built.

use crate::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// Operations taking two operands
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// Operations taking a single operand
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UnaryOp {
    Sqrt,
    /// Sine of an angle in degrees
    Sin,
    /// Cosine of an angle in degrees
    Cos,
    /// Tangent of an angle in degrees
    Tan,
    /// Natural logarithm
    Log,
}

/// Number of operands an operation consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Unary => write!(f, "unary"),
            Arity::Binary => write!(f, "binary"),
        }
    }
}

/// Any supported operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operation {
    Binary(BinaryOp),
    Unary(UnaryOp),
}

impl Operation {
    /// All operations in table order: binary first, then unary
    pub fn all() -> Vec<Operation> {
        BinaryOp::iter()
            .map(Operation::Binary)
            .chain(UnaryOp::iter().map(Operation::Unary))
            .collect()
    }

    /// Names of all operations in table order
    pub fn names() -> Vec<&'static str> {
        Self::all().into_iter().map(Operation::name).collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Binary(op) => op.into(),
            Operation::Unary(op) => op.into(),
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operation::Binary(_) => Arity::Binary,
            Operation::Unary(_) => Arity::Unary,
        }
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(op) = BinaryOp::from_str(s) {
            return Ok(Operation::Binary(op));
        }
        if let Ok(op) = UnaryOp::from_str(s) {
            return Ok(Operation::Unary(op));
        }
        Err(CalcError::UnsupportedOperation {
            operation: s.to_string(),
            supported: Operation::names(),
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<BinaryOp> for Operation {
    fn from(op: BinaryOp) -> Self {
        Operation::Binary(op)
    }
}

impl From<UnaryOp> for Operation {
    fn from(op: UnaryOp) -> Self {
        Operation::Unary(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        assert_eq!(
            Operation::names(),
            vec![
                "add", "subtract", "multiply", "divide", "power", "sqrt", "sin", "cos", "tan",
                "log"
            ]
        );
    }

    #[test]
    fn test_parse_known_operations() {
        assert_eq!(
            "divide".parse::<Operation>().unwrap(),
            Operation::Binary(BinaryOp::Divide)
        );
        assert_eq!(
            "tan".parse::<Operation>().unwrap(),
            Operation::Unary(UnaryOp::Tan)
        );
        assert_eq!("power".parse::<Operation>().unwrap().arity(), Arity::Binary);
        assert_eq!("log".parse::<Operation>().unwrap().arity(), Arity::Unary);
    }

    #[test]
    fn test_parse_is_exact() {
        for name in ["Add", "ADD", " add", "addition", ""] {
            let err = name.parse::<Operation>().unwrap_err();
            assert!(matches!(
                err,
                CalcError::UnsupportedOperation { ref operation, .. } if operation == name
            ));
        }
    }

    #[test]
    fn test_display_round_trips_through_name() {
        for op in Operation::all() {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Operation::Unary(UnaryOp::Sqrt)).unwrap();
        assert_eq!(json, "\"sqrt\"");

        let op: Operation = serde_json::from_str("\"multiply\"").unwrap();
        assert_eq!(op, Operation::Binary(BinaryOp::Multiply));
    }
}
