//! HTTP layer with Axum routes and middleware.
//!
//! This crate provides:
//! - The POS routes (`/`, `/auth`, `/pos`, `/save_venta`, `/exportar`,
//!   `/caja`, `/logout`)
//! - Session-loading middleware and identity extractors
//! - The minimal HTML page glue

pub mod middleware;
pub mod routes;
mod views;

use axum::{Json, Router, http::StatusCode, response::IntoResponse, response::Response};
use chrono::Duration;
use sea_orm::DatabaseConnection;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use memocont_shared::AppError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// How long a login session stays valid.
    pub session_ttl: Duration,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Renders an [`AppError`] as the structured JSON error body.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "status": "error",
            "error": err.error_code(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}
