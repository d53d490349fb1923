use crate::config::models::GatewayConfig;
use crate::gateway::CompletionGateway;
use crate::providers::{CompletionProvider, OpenAIProvider};
use anyhow::{Result, bail};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<CompletionGateway>,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let provider = OpenAIProvider::from_config(&config)?
            .map(|provider| Arc::new(provider) as Arc<dyn CompletionProvider>);
        Self::with_provider(config, provider)
    }

    /// Builds state around an already constructed provider, or none.
    ///
    /// A provider must be supplied exactly when the configuration carries an
    /// API key, so `openai_configured` always matches the startup flag.
    pub fn with_provider(
        config: GatewayConfig,
        provider: Option<Arc<dyn CompletionProvider>>,
    ) -> Result<Self> {
        match (config.provider_configured(), provider.is_some()) {
            (true, false) => bail!("OPENAI_API_KEY is set but no provider was supplied"),
            (false, true) => bail!("a provider was supplied but OPENAI_API_KEY is not set"),
            _ => {}
        }

        Ok(Self {
            gateway: Arc::new(CompletionGateway::new(&config, provider)),
        })
    }
}
