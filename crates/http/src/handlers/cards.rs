use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use std::sync::Arc;

use stronghold_core::Card;
use stronghold_service::CardDraft;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::DeleteCardResponse;

pub async fn update_card(
    State(state): State<Arc<AppState>>,
    Path((set_id, card_id)): Path<(String, String)>,
    body: Result<Json<CardDraft>, JsonRejection>,
) -> Result<Json<Card>, ApiError> {
    let Json(draft) = body?;
    Ok(Json(state.set_service.update_card(&set_id, &card_id, draft).await?))
}

pub async fn delete_card(
    State(state): State<Arc<AppState>>,
    Path((set_id, card_id)): Path<(String, String)>,
) -> Result<Json<DeleteCardResponse>, ApiError> {
    let deleted_card = state.set_service.delete_card(&set_id, &card_id).await?;
    Ok(Json(DeleteCardResponse { message: "Card deleted successfully", deleted_card }))
}
