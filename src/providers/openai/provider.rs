use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::models::GatewayConfig;
use crate::models::chat::{ChatCompletion, ChatCompletionRequest};
use crate::providers::provider::{CompletionProvider, ProviderError};

pub struct OpenAIProvider {
    api_key: String,
    api_base: String,
    http_client: Client,
}

impl OpenAIProvider {
    /// Returns `None` when no API key is configured.
    pub fn from_config(config: &GatewayConfig) -> Result<Option<Self>, ProviderError> {
        let Some(api_key) = config.openai_api_key.clone() else {
            return Ok(None);
        };

        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Some(Self {
            api_key,
            api_base: config.openai_api_base.trim_end_matches('/').to_string(),
            http_client,
        }))
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    fn r#type(&self) -> String {
        "openai".to_string()
    }

    async fn chat_completions(
        &self,
        payload: ChatCompletionRequest,
    ) -> Result<ChatCompletion, ProviderError> {
        let response = self
            .http_client
            .post(self.chat_completions_url())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), "OpenAI responded");

        if !status.is_success() {
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<ChatCompletion>(&body)
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))
    }
}
