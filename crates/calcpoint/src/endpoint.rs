//! Endpoint layer
//!
//! Binds a handler to the model it loaded and runs the per-request pipeline.

use crate::envelope::Envelope;
use crate::error::Result;
use crate::handler::{CalculatorHandler, HandlerMetadata, InferenceHandler};
use std::path::Path;

/// A loaded handler, ready to serve requests
pub struct InferenceEndpoint<H: InferenceHandler> {
    handler: H,
    model: H::Model,
    metadata: HandlerMetadata,
}

/// The calculator endpoint served by calcpoint
pub type CalculatorEndpoint = InferenceEndpoint<CalculatorHandler>;

impl<H: InferenceHandler> InferenceEndpoint<H> {
    /// Load the model once; it is reused for every request
    pub fn load(handler: H, model_dir: Option<&Path>) -> Result<Self> {
        let model = handler.load(model_dir)?;
        let metadata = handler.metadata();
        tracing::info!(
            handler = metadata.name.as_deref().unwrap_or("unnamed"),
            model_dir = ?model_dir,
            "model loaded"
        );
        Ok(Self {
            handler,
            model,
            metadata,
        })
    }

    /// Run decode, invoke and encode for one request.
    ///
    /// Errors returned here are boundary errors only; computational failures
    /// are already part of the encoded body.
    pub fn handle(
        &self,
        body: &[u8],
        content_type: &str,
        accept: &str,
    ) -> Result<(Vec<u8>, String)> {
        let input = self.handler.decode(body, content_type).inspect_err(|e| {
            tracing::warn!(content_type, error = %e, "failed to decode request");
        })?;
        let output = self.handler.invoke(input, &self.model);
        self.handler.encode(&output, accept).inspect_err(|e| {
            tracing::warn!(accept, error = %e, "failed to encode response");
        })
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn model(&self) -> &H::Model {
        &self.model
    }

    pub fn metadata(&self) -> &HandlerMetadata {
        &self.metadata
    }
}

impl<H: InferenceHandler<Output = Envelope>> InferenceEndpoint<H> {
    /// Decode and invoke without encoding, for callers that want the envelope
    pub fn evaluate(&self, body: &[u8], content_type: &str) -> Result<Envelope> {
        let input = self.handler.decode(body, content_type)?;
        Ok(self.handler.invoke(input, &self.model))
    }
}

impl CalculatorEndpoint {
    /// Load the calculator endpoint
    pub fn calculator(model_dir: Option<&Path>) -> Result<Self> {
        Self::load(CalculatorHandler::new(), model_dir)
    }
}
