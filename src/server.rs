//! HTTP surface: `POST /api/generate` and `GET /health`.
//!
//! Generation always answers `200 OK` with plain text; failures on the
//! delegated path arrive as diagnostic comments in the body.

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::entity::GenerationRequest;
use crate::strategy::EntityGenerator;

#[derive(Clone)]
pub struct AppState {
    pub generator: EntityGenerator,
}

impl AppState {
    pub fn new(generator: EntityGenerator) -> Self {
        Self { generator }
    }
}

/// Prefix of the payload returned for a request object that cannot be read
pub const INVALID_REQUEST_PREFIX: &str = "// CHYBA: Neplatný požadavek: ";

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("invalid request object: {0}")]
    InvalidObject(#[from] serde_json::Error),
}

impl RequestError {
    /// Render the error as the in-band text returned to the caller
    pub fn to_diagnostic(&self) -> String {
        match self {
            RequestError::InvalidObject(e) => format!("{}{}", INVALID_REQUEST_PREFIX, e),
        }
    }
}

/// Interpret a request body.
///
/// A JSON object must be a valid request; wrongly typed flags are an error
/// rather than being dropped. A JSON string, or a body that is not a JSON
/// object at all, is a bare prompt: heuristic path without accessors.
pub fn parse_request_body(body: &str) -> Result<GenerationRequest, RequestError> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(prompt)) => Ok(GenerationRequest::heuristic(prompt)),
        Ok(object @ Value::Object(_)) => Ok(serde_json::from_value(object)?),
        Ok(_) | Err(_) => Ok(GenerationRequest::heuristic(body)),
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/generate", post(generate_code))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Generate entity source from a prompt.
///
/// The body is read as raw bytes so that invalid UTF-8 is replaced rather
/// than rejected.
async fn generate_code(State(state): State<Arc<AppState>>, body: Bytes) -> String {
    let body = String::from_utf8_lossy(&body);
    match parse_request_body(&body) {
        Ok(request) => state.generator.generate(&request).await,
        Err(e) => {
            tracing::warn!("Rejected request body: {}", e);
            e.to_diagnostic()
        }
    }
}

/// Health check endpoint (liveness)
async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "entitygen",
        "version": env!("CARGO_PKG_VERSION"),
        "ai_configured": state.generator.ai_configured(),
    }))
}
