//! HTTP handlers for the scorer.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::{debug, warn};

use prediction_proto::{PredictResponse, ScorerHealth, UserInput};

use crate::model::LinearModel;

/// Server state: the model handle, loaded once at startup. `None` means
/// the service runs degraded and answers predict calls with an error body.
pub struct ScorerState {
    pub model: Option<LinearModel>,
}

/// `GET /` - liveness plus whether a model is available.
pub async fn health_handler(State(state): State<Arc<ScorerState>>) -> Json<ScorerHealth> {
    Json(ScorerHealth {
        status: "ok".to_string(),
        model_loaded: state.model.is_some(),
    })
}

/// `POST /predict` - score one feature vector.
///
/// Without a model this deliberately keeps the original contract: HTTP 200
/// with an error body, not an error status. Callers are expected to treat
/// a missing `prediction` field as a failure.
pub async fn predict_handler(
    State(state): State<Arc<ScorerState>>,
    Json(input): Json<UserInput>,
) -> Json<PredictResponse> {
    match &state.model {
        Some(model) => {
            let prediction = model.predict(&input);
            debug!(payload = ?input, prediction, "scored request");
            Json(PredictResponse::ok(prediction))
        }
        None => {
            warn!("predict called while no model is loaded");
            Json(PredictResponse::error("Model not loaded"))
        }
    }
}
