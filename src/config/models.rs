use std::time::Duration;

use super::constants::{DEFAULT_OPENAI_API_BASE, DEFAULT_OPENAI_MODEL, DEFAULT_TIMEOUT_SECONDS};

/// Process-wide settings, read once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_api_base: String,
    pub request_timeout: Duration,
}

impl GatewayConfig {
    pub fn provider_configured(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_api_base: DEFAULT_OPENAI_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}
