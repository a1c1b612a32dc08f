//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into HTTP responses with a `{"error": message}` body.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use stronghold_core::CoreError;
use stronghold_service::ServiceError;

pub const SET_NOT_FOUND: &str = "Set not found";
pub const CARD_NOT_FOUND: &str = "Card not found in this set";
pub const DUPLICATE_CARD_NUMBER: &str = "Duplicate card number in set";
pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// `Internal` logs the real error server-side and returns a fixed message.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_duplicate() {
            return Self::BadRequest(DUPLICATE_CARD_NUMBER.to_owned());
        }
        match err.not_found_entity() {
            Some("set") => return Self::NotFound(SET_NOT_FOUND.to_owned()),
            Some("card") => return Self::NotFound(CARD_NOT_FOUND.to_owned()),
            _ => {},
        }
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            other => Self::Internal(other.into()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
