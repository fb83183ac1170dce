//! # calcpoint
//!
//! Inference adapter for the calcpoint calculator. A hosting runtime loads a
//! [`CalculatorEndpoint`] once and then pushes every request through
//! decode, invoke and encode.

pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod handler;
pub mod media;

// Re-export core types
pub use calcpoint_core::{
    Arity, BinaryOp, CalcError, CalculationRequest, Calculator, Operation, UnaryOp,
};

pub use endpoint::{CalculatorEndpoint, InferenceEndpoint};
pub use envelope::{Envelope, ErrorEnvelope, Status, SuccessEnvelope};
pub use error::{AdapterError, Result};
pub use handler::{CalculatorHandler, HandlerMetadata, InferenceHandler};
pub use media::APPLICATION_JSON;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::endpoint::CalculatorEndpoint;
    pub use crate::handler::InferenceHandler;
    pub use calcpoint_core::Calculator;
}
