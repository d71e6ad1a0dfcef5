// PromptForge V1 Backend Entry Point
// Serves the rule-based prompt optimization engine over HTTP.

use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use promptforge_core::ai::{OpenRouterClient, PromptRewriter};
use promptforge_core::config::Settings;
use promptforge_core::engine::PromptEnhancer;
use promptforge_core::server::{self, AppState};

fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let formatting_layer =
        BunyanFormattingLayer::new(env!("CARGO_PKG_NAME").to_string(), std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_telemetry();

    let settings = Settings::from_env().context("failed to load settings")?;

    let rewriter: Option<Arc<dyn PromptRewriter>> = if settings.ai_available() {
        info!(model = %settings.ai.model, "external AI enhancement enabled");
        Some(Arc::new(OpenRouterClient::from_settings(&settings.ai)?))
    } else {
        None
    };

    let state = Arc::new(AppState {
        enhancer: PromptEnhancer::new(),
        settings: settings.clone(),
        rewriter,
    });

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    info!(addr = %settings.bind_addr, "promptforge listening");

    axum::serve(listener, server::router(state))
        .await
        .context("server error")?;

    Ok(())
}
