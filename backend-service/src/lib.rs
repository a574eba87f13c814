//! Backend gateway for the prediction system.
//!
//! Accepts user feature vectors, delegates scoring to the inference
//! service, and shapes the response. See `services::inference_client` for
//! the upstream call contract.

pub mod config;
pub mod handlers;
pub mod services;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use handlers::AppState;

/// Builds the gateway router. Shared between `main` and the integration
/// tests.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::health_handler))
        .route("/process-prediction", post(handlers::process_prediction_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
