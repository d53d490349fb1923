use crate::config::constants::{DOCS_PATH, OPENAPI_JSON_PATH};
use crate::openapi::get_openapi_spec;
use crate::{handlers, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::status::root))
        .route("/predict", post(handlers::predict::predict))
        .route("/predict_mock", post(handlers::predict::predict_mock))
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, get_openapi_spec()))
        .with_state(state)
}
