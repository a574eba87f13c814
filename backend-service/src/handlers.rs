//! HTTP handlers for the gateway.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::info;

use prediction_proto::{GatewayHealth, PredictionResult, UserInput};

use crate::config::ServiceConfig;
use crate::services::{InferenceClient, InferenceClientError};

/// Shared application state: immutable config plus the reusable upstream
/// client. Built once in `main`.
pub struct AppState {
    pub config: ServiceConfig,
    pub client: InferenceClient,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Result<Self, InferenceClientError> {
        let client = InferenceClient::from_config(&config)?;
        Ok(Self { config, client })
    }
}

/// `GET /` - liveness plus the scorer URL this instance is wired to.
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<GatewayHealth> {
    Json(GatewayHealth {
        status: "ok".to_string(),
        inference_service_url: state.config.inference_service_url.clone(),
    })
}

/// `POST /process-prediction` - validate, delegate to the scorer, shape the
/// response. Malformed bodies never reach this point; the `Json` extractor
/// rejects them first.
pub async fn process_prediction_handler(
    State(state): State<Arc<AppState>>,
    Json(input): Json<UserInput>,
) -> Result<Json<PredictionResult>, InferenceClientError> {
    let prediction = state.client.predict(&input).await?;
    info!(prediction, "prediction completed");

    Ok(Json(PredictionResult::completed(
        input_summary(&input),
        prediction,
    )))
}

/// Textual echo of the input. feature3 is intentionally not part of the
/// summary; that asymmetry is the documented contract.
fn input_summary(input: &UserInput) -> String {
    // Debug formatting keeps the trailing .0 on whole floats ("2.0", not "2").
    format!("F1: {:?}, F2: {:?}", input.feature1, input.feature2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_first_two_features_only() {
        let input = UserInput {
            feature1: 2.0,
            feature2: 2.0,
            feature3: 99.0,
        };
        assert_eq!(input_summary(&input), "F1: 2.0, F2: 2.0");
    }

    #[test]
    fn summary_keeps_fractional_values_verbatim() {
        let input = UserInput {
            feature1: 1.25,
            feature2: -0.5,
            feature3: 0.0,
        };
        assert_eq!(input_summary(&input), "F1: 1.25, F2: -0.5");
    }
}
