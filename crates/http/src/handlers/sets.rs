use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::QueryRejection},
    http::StatusCode,
};
use std::sync::Arc;

use stronghold_core::{SetSummary, SetWithCards};
use stronghold_service::SetDraft;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::SetsQuery;
use crate::response_types::DeleteSetResponse;

pub async fn list_sets(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SetsQuery>, QueryRejection>,
) -> Result<Json<Vec<SetSummary>>, ApiError> {
    let Query(query) = query?;
    let game = query.game_filter()?;
    Ok(Json(state.set_service.list_sets(game).await?))
}

pub async fn get_set(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SetWithCards>, ApiError> {
    Ok(Json(state.set_service.get_set(&id).await?))
}

pub async fn create_set(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SetDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<SetWithCards>), ApiError> {
    let Json(draft) = body?;
    let created = state.set_service.create_set(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_set(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<SetDraft>, JsonRejection>,
) -> Result<Json<SetWithCards>, ApiError> {
    let Json(draft) = body?;
    Ok(Json(state.set_service.update_set(&id, draft).await?))
}

pub async fn delete_set(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteSetResponse>, ApiError> {
    let deleted_set = state.set_service.delete_set(&id).await?;
    Ok(Json(DeleteSetResponse { message: "Set deleted successfully", deleted_set }))
}
