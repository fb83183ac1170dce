//! Inference handler abstraction
//!
//! A hosting runtime drives a handler through four stages: `load` once per
//! process, then `decode`, `invoke` and `encode` for every request.

use crate::envelope::Envelope;
use crate::error::{AdapterError, Result};
use crate::media::{self, APPLICATION_JSON};
use calcpoint_core::{Arity, CalcError, CalculationRequest, Calculator, Operation};
use serde_json::{Number, Value};
use std::path::Path;

/// The four-stage contract between a hosting runtime and a model.
///
/// `invoke` has no error channel: whatever goes wrong while computing must be
/// reported inside `Output`. Only `load`, `decode` and `encode` may fail.
pub trait InferenceHandler: Send + Sync {
    /// Loaded model, shared read-only by every request
    type Model: Send + Sync;
    /// Decoded request body
    type Input;
    /// Response object before encoding
    type Output;

    fn load(&self, model_dir: Option<&Path>) -> Result<Self::Model>;

    fn decode(&self, body: &[u8], content_type: &str) -> Result<Self::Input>;

    fn invoke(&self, input: Self::Input, model: &Self::Model) -> Self::Output;

    /// Encode `output`, returning the body and its content type
    fn encode(&self, output: &Self::Output, accept: &str) -> Result<(Vec<u8>, String)>;

    fn metadata(&self) -> HandlerMetadata {
        HandlerMetadata::default()
    }
}

/// Metadata about a handler
#[derive(Debug, Clone, Default)]
pub struct HandlerMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    /// Media types accepted by `decode` and produced by `encode`
    pub content_types: Vec<String>,
    pub capabilities: Vec<String>,
}

/// Handler exposing [`Calculator`] over JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorHandler;

impl CalculatorHandler {
    pub fn new() -> Self {
        Self
    }
}

impl InferenceHandler for CalculatorHandler {
    type Model = Calculator;
    type Input = Value;
    type Output = Envelope;

    /// The calculator has no artifacts, so `model_dir` is ignored
    fn load(&self, _model_dir: Option<&Path>) -> Result<Calculator> {
        Ok(Calculator::new())
    }

    fn decode(&self, body: &[u8], content_type: &str) -> Result<Value> {
        if !media::is_json(content_type) {
            return Err(AdapterError::UnsupportedContentType(
                content_type.to_string(),
            ));
        }
        serde_json::from_slice(body).map_err(|e| AdapterError::InvalidPayload(e.to_string()))
    }

    fn invoke(&self, input: Value, model: &Calculator) -> Envelope {
        match calculate(&input, model) {
            Ok(envelope) => {
                tracing::debug!(result = ?envelope.result(), "calculation succeeded");
                envelope
            }
            Err(e) => {
                tracing::debug!(kind = e.kind(), error = %e, "calculation failed");
                Envelope::error(e.to_string())
            }
        }
    }

    fn encode(&self, output: &Envelope, accept: &str) -> Result<(Vec<u8>, String)> {
        if !media::is_json(accept) {
            return Err(AdapterError::UnsupportedAcceptType(accept.to_string()));
        }
        let body =
            serde_json::to_vec(output).map_err(|e| AdapterError::Serialization(e.to_string()))?;
        Ok((body, accept.to_string()))
    }

    fn metadata(&self) -> HandlerMetadata {
        HandlerMetadata {
            name: Some("CalculatorHandler".to_string()),
            description: Some("Arithmetic calculator over JSON".to_string()),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
            content_types: vec![APPLICATION_JSON.to_string()],
            capabilities: Operation::names().into_iter().map(String::from).collect(),
        }
    }
}

fn calculate(input: &Value, model: &Calculator) -> calcpoint_core::Result<Envelope> {
    let fields = input
        .as_object()
        .ok_or_else(|| CalcError::MalformedRequest("expected a JSON object".to_string()))?;
    // JSON null counts as absent
    let field = |name: &str| fields.get(name).filter(|value| !value.is_null());

    let operation =
        field("operation").ok_or_else(|| CalcError::MissingField("operation".to_string()))?;
    let a = field("a").ok_or_else(|| CalcError::MissingField("a".to_string()))?;

    let operation: Operation = operation
        .as_str()
        .ok_or_else(|| invalid("operation", "a string"))?
        .parse()?;
    let a = number(a).ok_or_else(|| invalid("a", "a number"))?;
    let raw_b = field("b");
    let b = match (operation.arity(), raw_b) {
        (Arity::Binary, Some(b)) => Some(number(b).ok_or_else(|| invalid("b", "a number"))?),
        // unary operations ignore b but still echo it
        (_, b) => b.and_then(number),
    };

    let request = CalculationRequest::new(
        operation,
        to_f64(a, "a")?,
        b.map(|b| to_f64(b, "b")).transpose()?,
    )?;
    let result = model.evaluate(&request)?;

    Ok(Envelope::success(operation, a.clone(), raw_b.cloned(), result))
}

fn number(value: &Value) -> Option<&Number> {
    match value {
        Value::Number(number) => Some(number),
        _ => None,
    }
}

fn to_f64(number: &Number, field: &str) -> calcpoint_core::Result<f64> {
    number.as_f64().ok_or_else(|| invalid(field, "a number"))
}

fn invalid(field: &str, expected: &'static str) -> CalcError {
    CalcError::InvalidField {
        field: field.to_string(),
        expected,
    }
}
