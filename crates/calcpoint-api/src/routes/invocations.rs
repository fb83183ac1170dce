use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use calcpoint::APPLICATION_JSON;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;

use crate::AppState;
use crate::error::{ApiError, ErrorResponse};

/// Header carrying the per-invocation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Calculation request body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvocationRequest {
    /// One of add, subtract, multiply, divide, power, sqrt, sin, cos, tan, log
    pub operation: String,
    pub a: f64,
    /// Required for binary operations, ignored for unary ones
    pub b: Option<f64>,
}

/// Body returned when the calculation succeeds
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvocationSuccess {
    pub operation: String,
    pub input_a: f64,
    /// Echoed as received, null when absent. Unary operations echo any value sent.
    pub input_b: Option<f64>,
    pub result: f64,
    /// Always "success"
    pub status: String,
}

/// Body returned when the calculation fails
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvocationFailure {
    pub error: String,
    /// Always "error"
    pub status: String,
}

/// Either body of a 200 response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum InvocationResponse {
    Success(InvocationSuccess),
    Failure(InvocationFailure),
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/invocations", post(invoke))
}

/// Run one calculation through the inference pipeline
#[utoipa::path(
    post,
    path = "/invocations",
    tag = "inference",
    request_body(content = InvocationRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Result or calculation error", body = InvocationResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 406, description = "Unsupported accept type", body = ErrorResponse),
        (status = 415, description = "Unsupported content type", body = ErrorResponse)
    )
)]
pub async fn invoke(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request_id = request_id(&headers);
    let span = tracing::info_span!("invocation", request_id = %request_id);

    span.in_scope(|| -> Result<Response, ApiError> {
        let content_type = header_str(&headers, header::CONTENT_TYPE);
        let content_type = content_type.as_deref().unwrap_or(APPLICATION_JSON);
        let accept = header_str(&headers, header::ACCEPT);
        let accept = negotiate_accept(accept.as_deref());
        tracing::debug!(content_type, accept, bytes = body.len(), "invocation received");

        let (payload, content_type) = state.endpoint.handle(&body, content_type, accept)?;

        let mut response = (StatusCode::OK, payload).into_response();
        let response_headers = response.headers_mut();
        if let Ok(value) = HeaderValue::from_str(&content_type) {
            response_headers.insert(header::CONTENT_TYPE, value);
        }
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response_headers.insert(REQUEST_ID_HEADER, value);
        }
        Ok(response)
    })
}

/// Header value as text. Only an absent header is `None`; unreadable bytes are
/// kept (lossily) so the adapter rejects them instead of assuming JSON.
fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<Cow<'_, str>> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
}

fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Pick the media type to hand to the encoder.
///
/// A missing header or a wildcard means JSON. If none of the listed types is
/// acceptable the raw header is passed on so the encoder can reject it.
fn negotiate_accept(accept: Option<&str>) -> &str {
    let Some(accept) = accept else {
        return APPLICATION_JSON;
    };
    let acceptable = accept.split(',').any(|entry| {
        let media_type = entry.split(';').next().unwrap_or_default().trim();
        media_type == "*/*"
            || media_type.eq_ignore_ascii_case("application/*")
            || calcpoint::media::is_json(media_type)
    });
    if acceptable || accept.trim().is_empty() {
        APPLICATION_JSON
    } else {
        accept
    }
}
