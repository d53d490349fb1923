//! The completion gateway: status reporting, provider-backed completion and
//! the provider-free mock echo.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::config::constants::{
    COMPLETION_MAX_TOKENS, COMPLETION_TEMPERATURE, DOCS_PATH, SYSTEM_PROMPT,
};
use crate::config::models::GatewayConfig;
use crate::errors::GatewayError;
use crate::models::chat::{ChatCompletionMessage, ChatCompletionRequest};
use crate::models::predict::{AnswerResponse, MOCK_ANSWER_PREFIX, StatusResponse};
use crate::providers::{CompletionProvider, ProviderError};

pub struct CompletionGateway {
    model: String,
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl CompletionGateway {
    /// `provider` is `None` when no API key was configured at startup; the
    /// gateway then answers `/predict` with an error without any network call.
    pub fn new(config: &GatewayConfig, provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self {
            model: config.openai_model.clone(),
            provider,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn status(&self) -> StatusResponse {
        StatusResponse {
            status: "ok".to_string(),
            openai_configured: self.provider_configured(),
            model: self.model().to_string(),
            docs: DOCS_PATH.to_string(),
        }
    }

    pub fn build_request(&self, text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model().to_string(),
            messages: vec![
                ChatCompletionMessage::system(SYSTEM_PROMPT),
                ChatCompletionMessage::user(text),
            ],
            temperature: Some(COMPLETION_TEMPERATURE),
            max_tokens: Some(COMPLETION_MAX_TOKENS),
        }
    }

    /// Makes exactly one provider call; failures are not retried.
    pub async fn complete(&self, text: &str) -> Result<AnswerResponse, GatewayError> {
        let provider = self.provider.as_ref().ok_or(GatewayError::NotConfigured)?;

        debug!(provider = %provider.r#type(), model = %self.model(), "Forwarding completion request");
        let answer = provider
            .chat_completions(self.build_request(text))
            .await
            .and_then(|completion| completion.first_answer().ok_or(ProviderError::EmptyChoices))
            .map_err(|e| {
                error!(error = ?e, model = %self.model(), "Provider request failed: {}", e);
                GatewayError::ProviderRequestFailed(e)
            })?;

        info!(model = %self.model(), "Completion succeeded");
        Ok(AnswerResponse { answer })
    }

    pub fn complete_mock(&self, text: &str) -> AnswerResponse {
        mock_answer(text)
    }
}

pub fn mock_answer(text: &str) -> AnswerResponse {
    AnswerResponse {
        answer: format!("{MOCK_ANSWER_PREFIX}{text}"),
    }
}
