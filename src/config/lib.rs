use std::env;

use super::constants::{DEFAULT_OPENAI_API_BASE, DEFAULT_OPENAI_MODEL, request_timeout};
use super::models::GatewayConfig;

/// Builds the gateway configuration from the process environment.
///
/// An unset or empty `OPENAI_API_KEY` leaves the provider unconfigured; the
/// gateway still starts and only `/predict` is disabled.
pub fn load_config() -> GatewayConfig {
    let openai_api_key = env::var("OPENAI_API_KEY")
        .ok()
        .filter(|key| !key.is_empty());
    let openai_model = env::var("OPENAI_MODEL")
        .ok()
        .filter(|model| !model.is_empty())
        .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());
    let openai_api_base = env::var("OPENAI_API_BASE")
        .ok()
        .filter(|base| !base.is_empty())
        .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string());

    GatewayConfig {
        openai_api_key,
        openai_model,
        openai_api_base,
        request_timeout: request_timeout(),
    }
}
