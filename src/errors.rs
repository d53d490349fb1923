use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::predict::ErrorResponse;
use crate::providers::ProviderError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("provider not configured")]
    NotConfigured,

    #[error("provider request failed")]
    ProviderRequestFailed(#[source] ProviderError),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn to_body(&self) -> ErrorResponse {
        let detail = match self {
            GatewayError::NotConfigured => None,
            GatewayError::ProviderRequestFailed(source) => Some(source.to_string()),
        };
        ErrorResponse {
            error: self.to_string(),
            detail,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_body())).into_response()
    }
}
