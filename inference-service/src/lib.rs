//! Inference service: holds the fitted regression model and scores
//! feature vectors for the backend gateway.

pub mod handlers;
pub mod model;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use handlers::ScorerState;

/// Builds the scorer router. Shared between `main` and the integration
/// tests.
pub fn app(state: Arc<ScorerState>) -> Router {
    Router::new()
        .route("/", get(handlers::health_handler))
        .route("/predict", post(handlers::predict_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
