use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;

use stronghold_core::PrintPlan;

use crate::AppState;
use crate::api_error::ApiError;
use crate::print_view;

pub async fn print_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PrintPlan>, ApiError> {
    Ok(Json(state.set_service.print_plan(&id).await?))
}

pub async fn print_html(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let plan = state.set_service.print_plan(&id).await?;
    Ok(Html(print_view::render(&plan)))
}
