use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use backend_service::config::ServiceConfig;
use backend_service::handlers::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env();

    // RUST_LOG takes precedence over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    info!(
        inference_service_url = config.inference_service_url,
        timeout_seconds = config.request_timeout_seconds,
        "Backend gateway starting"
    );

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config).context("failed to build inference client")?);
    let app = backend_service::app(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    info!(bind_addr = bind_addr, "Backend gateway listening");

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
