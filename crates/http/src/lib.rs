//! HTTP API server for stronghold.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

pub mod api_error;
mod handlers;
mod print_view;
mod query_types;
mod response_types;

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use stronghold_service::SetService;
use stronghold_storage::StorageBackend;

use crate::api_error::{ApiError, ROUTE_NOT_FOUND};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub set_service: Arc<SetService>,
}

impl AppState {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { set_service: Arc::new(SetService::new(storage)) }
    }
}

/// Routes shared by the root and the `/api` prefix.
fn set_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/sets", get(handlers::sets::list_sets).post(handlers::sets::create_set))
        .route(
            "/sets/{id}",
            get(handlers::sets::get_set)
                .put(handlers::sets::update_set)
                .delete(handlers::sets::delete_set),
        )
        .route(
            "/sets/{id}/cards/{card_id}",
            put(handlers::cards::update_card).delete(handlers::cards::delete_card),
        )
        .route("/sets/{id}/print", get(handlers::print::print_plan))
        .route("/sets/{id}/print/html", get(handlers::print::print_html))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let routes = set_routes();
    Router::new()
        .merge(routes.clone())
        .nest("/api", routes)
        .fallback(route_not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound(ROUTE_NOT_FOUND.to_owned())
}
