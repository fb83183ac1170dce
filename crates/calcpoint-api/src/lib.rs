use axum::Router;
use axum::http::HeaderValue;
use calcpoint::CalculatorEndpoint;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ApiConfig, ConfigOverrides, CorsConfig};
pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup and shared by every request
    pub endpoint: Arc<CalculatorEndpoint>,
}

impl AppState {
    pub fn new(endpoint: Arc<CalculatorEndpoint>) -> Self {
        Self { endpoint }
    }

    /// Load the calculator endpoint and wrap it in state
    pub fn load(model_dir: Option<&Path>) -> calcpoint::Result<Self> {
        let endpoint = CalculatorEndpoint::calculator(model_dir)?;
        Ok(Self::new(Arc::new(endpoint)))
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health_check,
        crate::routes::health::ping,
        crate::routes::invocations::invoke,
    ),
    components(
        schemas(
            crate::routes::health::HealthResponse,
            crate::routes::invocations::InvocationRequest,
            crate::routes::invocations::InvocationSuccess,
            crate::routes::invocations::InvocationFailure,
            crate::routes::invocations::InvocationResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "inference", description = "Inference endpoints")
    )
)]
pub struct ApiDoc;

/// Build API application with the default configuration
pub fn build_app(state: AppState) -> Router {
    build_app_with_config(state, &ApiConfig::default())
}

/// Build API application
pub fn build_app_with_config(state: AppState, config: &ApiConfig) -> Router {
    let mut router = Router::new().merge(routes::routes());
    if config.enable_swagger {
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }
    router
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.allow_any_origin || cors.allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect();
    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}
