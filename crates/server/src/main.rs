//! Support Agent Server Entry Point

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use support_agent_agent::SupportAgent;
use support_agent_config::{load_settings, Settings};
use support_agent_core::ChatBackend;
use support_agent_llm::{LlmConfig, OpenAiBackend};
use support_agent_server::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Priority: env vars > config/default.toml > defaults
    let config = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing();

    tracing::info!("Starting Support Agent Server v{}", env!("CARGO_PKG_VERSION"));

    let backend = build_backend(&config);
    if backend.is_none() {
        tracing::warn!("No API key configured, responses will use templates only");
    }

    let state = AppState::new(SupportAgent::new(backend));
    let router = create_router(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind server address")?;
    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}

fn build_backend(config: &Settings) -> Option<Arc<dyn ChatBackend>> {
    if !config.llm_enabled() {
        return None;
    }

    let llm_config = LlmConfig {
        model: config.llm.model.clone(),
        endpoint: config.llm.endpoint.clone(),
        api_key: Some(config.llm.api_key.clone()),
        max_tokens: config.llm.max_tokens,
        temperature: config.llm.temperature,
        timeout: Duration::from_secs(config.llm.timeout_secs),
    };

    match OpenAiBackend::new(llm_config) {
        Ok(backend) => {
            tracing::info!(model = %config.llm.model, "Language model backend configured");
            Some(Arc::new(backend))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to configure language model backend");
            None
        }
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
