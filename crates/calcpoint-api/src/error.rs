//! Mapping of boundary errors to HTTP responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calcpoint::AdapterError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Body returned for protocol-level failures
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Adapter(AdapterError::UnsupportedContentType(_)) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            ApiError::Adapter(AdapterError::UnsupportedAcceptType(_)) => StatusCode::NOT_ACCEPTABLE,
            ApiError::Adapter(AdapterError::InvalidPayload(_)) => StatusCode::BAD_REQUEST,
            ApiError::Adapter(AdapterError::Serialization(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
