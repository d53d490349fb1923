use std::env;
use std::time::Duration;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub const SYSTEM_PROMPT: &str = "You are a concise public-health assistant.";
pub const COMPLETION_TEMPERATURE: f32 = 0.2;
pub const COMPLETION_MAX_TOKENS: u32 = 300;

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

pub fn request_timeout() -> Duration {
    let seconds = env::var("OPENAI_TIMEOUT_SECONDS")
        .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECONDS.to_string())
        .parse()
        .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
    Duration::from_secs(seconds)
}

pub fn port() -> u16 {
    env::var("PORT")
        .unwrap_or_else(|_| DEFAULT_PORT.to_string())
        .parse()
        .unwrap_or(DEFAULT_PORT)
}
