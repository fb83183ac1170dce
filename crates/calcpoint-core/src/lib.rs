//! # calcpoint core
//!
//! The calculator behind the calcpoint inference endpoint: a closed set of
//! operations, arity-checked request shapes, and pure evaluation with typed
//! failures. Nothing in this crate performs I/O or logging.

pub mod calculator;
pub mod error;
pub mod operation;
pub mod request;

pub use calculator::Calculator;
pub use error::{CalcError, Result};
pub use operation::{Arity, BinaryOp, Operation, UnaryOp};
pub use request::{BinaryRequest, CalculationRequest, UnaryRequest};
