use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use calcpoint_api::{ApiConfig, AppState, build_app, build_app_with_config};
use serde_json::Value;
use tower::util::ServiceExt;

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_ping() {
    let app = build_app(AppState::load(None).unwrap());
    let (status, body) = get(app, "/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_health_lists_operations() {
    let app = build_app(AppState::load(None).unwrap());
    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "calcpoint-api");
    assert_eq!(body["handler"], "CalculatorHandler");
    assert_eq!(body["description"], "Arithmetic calculator over JSON");
    assert_eq!(body["operations"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_openapi_document() {
    let app = build_app(AppState::load(None).unwrap());
    let (status, body) = get(app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let doc: Value = serde_json::from_slice(&body).unwrap();
    assert!(doc["paths"]["/invocations"].is_object());
    assert!(doc["paths"]["/ping"].is_object());
}

#[tokio::test]
async fn test_openapi_documents_both_invocation_bodies() {
    let app = build_app(AppState::load(None).unwrap());
    let (_, body) = get(app, "/api-docs/openapi.json").await;
    let doc: Value = serde_json::from_slice(&body).unwrap();

    let ok = &doc["paths"]["/invocations"]["post"]["responses"]["200"];
    let schema_ref = ok["content"]["application/json"]["schema"]["$ref"]
        .as_str()
        .unwrap();
    assert!(schema_ref.ends_with("/InvocationResponse"));

    let variants = doc["components"]["schemas"]["InvocationResponse"]["oneOf"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|variant| variant["$ref"].as_str())
        .collect::<Vec<_>>();
    assert!(variants.iter().any(|r| r.ends_with("/InvocationSuccess")));
    assert!(variants.iter().any(|r| r.ends_with("/InvocationFailure")));
}

#[tokio::test]
async fn test_swagger_can_be_disabled() {
    let config = ApiConfig {
        enable_swagger: false,
        ..Default::default()
    };
    let app = build_app_with_config(AppState::load(None).unwrap(), &config);
    let (status, _) = get(app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
