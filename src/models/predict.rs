use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MOCK_ANSWER_PREFIX: &str = "[MOCK RESPONSE] You said: ";

#[derive(Deserialize, Serialize, Clone, Debug, ToSchema)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub openai_configured: bool,
    pub model: String,
    pub docs: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
