//! HTTP routes.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use questsmith_domain::{DesignBrief, Quest, RegenerateSectionRequest};

use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/quests/generate", post(generate_quest))
        .route("/api/quests/regenerate", post(regenerate_section))
}

#[derive(serde::Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn generate_quest(
    State(app): State<Arc<App>>,
    Json(brief): Json<DesignBrief>,
) -> Result<Json<Quest>, ApiError> {
    brief
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let quest = app
        .use_cases
        .quests
        .generate_quest(&brief)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(quest))
}

async fn regenerate_section(
    State(app): State<Arc<App>>,
    Json(request): Json<RegenerateSectionRequest>,
) -> Result<Json<Quest>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let quest = app
        .use_cases
        .quests
        .regenerate_section(&request)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(quest))
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

/// Error responses carry the failure message as `{"detail": "..."}` so
/// clients can surface it without parsing free-form text.
#[derive(serde::Serialize)]
struct ErrorBody {
    detail: String,
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            ApiError::BadRequest(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
