use async_trait::async_trait;
use thiserror::Error;

use crate::models::chat::{ChatCompletion, ChatCompletionRequest};

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("Provider unreachable: {0}")]
    Transport(String),

    #[error("Provider timed out: {0}")]
    Timeout(String),

    #[error("Provider returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Provider response contained no choices with text content")]
    EmptyChoices,
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout(e.to_string())
        } else if e.is_decode() {
            ProviderError::MalformedResponse(e.to_string())
        } else {
            ProviderError::Transport(e.to_string())
        }
    }
}

/// A chat-completion backend the gateway forwards text to.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn r#type(&self) -> String;

    async fn chat_completions(
        &self,
        payload: ChatCompletionRequest,
    ) -> Result<ChatCompletion, ProviderError>;
}
