use healthbot_lib::{config, routes, state::AppState};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{Level, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    if let Err(e) = dotenv::dotenv() {
        info!("No .env file loaded: {}", e);
    }

    info!("Starting HealthBot gateway...");

    let gateway_config = config::load_config();
    if gateway_config.provider_configured() {
        info!(
            "OpenAI provider configured with model {} at {}",
            gateway_config.openai_model, gateway_config.openai_api_base
        );
    } else {
        warn!("OPENAI_API_KEY not set; /predict will answer with an error until restarted with a key");
    }

    let app_state = Arc::new(
        AppState::new(gateway_config)
            .map_err(|e| anyhow::anyhow!("Failed to create app state: {}", e))?,
    );

    let app = routes::create_router(app_state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(()),
    );

    let port = config::constants::port();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", port, e))?;

    info!("Server is running on port {}", port);
    axum::serve(listener, app.into_make_service())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
