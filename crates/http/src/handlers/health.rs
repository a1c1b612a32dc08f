use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use crate::AppState;
use crate::response_types::HealthResponse;

pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    match state.set_service.health().await {
        Ok(timestamp) => (StatusCode::OK, Json(HealthResponse::healthy(timestamp))),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(HealthResponse::unhealthy()))
        },
    }
}
