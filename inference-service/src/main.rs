use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use inference_service::handlers::ScorerState;
use inference_service::model::LinearModel;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .init();

    let model_path = PathBuf::from(
        std::env::var("MODEL_PATH").unwrap_or_else(|_| "models/model.json".to_string()),
    );
    let bind_addr =
        std::env::var("INFERENCE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    let model = LinearModel::load_or_train(&model_path);
    if model.is_none() {
        warn!("starting without a model; predict calls will return an error body");
    }

    let state = Arc::new(ScorerState { model });
    let app = inference_service::app(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    info!(bind_addr = bind_addr, "Inference service listening");

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
