use crate::{
    errors::GatewayError,
    models::predict::{AnswerResponse, ErrorResponse, PredictRequest},
    state::AppState,
};
use axum::{Json, extract::State};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/predict",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Answer from the completion provider", body = AnswerResponse),
        (status = 422, description = "Payload is missing a string `text` field"),
        (status = 500, description = "Provider not configured or provider request failed", body = ErrorResponse),
    ),
    tag = "Predict"
)]
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PredictRequest>,
) -> Result<Json<AnswerResponse>, GatewayError> {
    let answer = state.gateway.complete(&payload.text).await?;
    Ok(Json(answer))
}

#[utoipa::path(
    post,
    path = "/predict_mock",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Echo of the input, no provider call", body = AnswerResponse),
        (status = 422, description = "Payload is missing a string `text` field"),
    ),
    tag = "Predict"
)]
pub async fn predict_mock(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PredictRequest>,
) -> Json<AnswerResponse> {
    Json(state.gateway.complete_mock(&payload.text))
}
