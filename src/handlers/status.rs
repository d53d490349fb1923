use crate::{models::predict::StatusResponse, state::AppState};
use axum::{Json, extract::State};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service status and provider configuration", body = StatusResponse),
    ),
    tag = "Status"
)]
pub async fn root(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(state.gateway.status())
}
