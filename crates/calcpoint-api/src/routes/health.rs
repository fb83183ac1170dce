use crate::AppState;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
    pub handler: Option<String>,
    pub description: Option<String>,
    pub operations: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ping", get(ping))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let metadata = state.endpoint.metadata();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: "calcpoint-api".to_string(),
        handler: metadata.name.clone(),
        description: metadata.description.clone(),
        operations: metadata.capabilities.clone(),
    })
}

/// Liveness probe used by the hosting platform.
///
/// The model is loaded before the server starts listening, so answering at
/// all means the endpoint is ready.
#[utoipa::path(
    get,
    path = "/ping",
    tag = "inference",
    responses(
        (status = 200, description = "Model is loaded and ready")
    )
)]
pub async fn ping() -> StatusCode {
    StatusCode::OK
}
