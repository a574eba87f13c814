//! Wire types shared between the backend gateway and the inference service.
//!
//! Both HTTP surfaces speak these structs, so the field contract lives in
//! one place instead of being duplicated as ad-hoc JSON maps in each
//! service.

use serde::{Deserialize, Serialize};

/// One prediction request: a three-float feature vector.
///
/// No bounds checking beyond the types; the scorer owns any further
/// validation. Created per request and discarded after the response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    pub feature1: f64,
    pub feature2: f64,
    pub feature3: f64,
}

/// Gateway response for a completed prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Human-readable echo of the input (feature1/feature2 only).
    pub input_summary: String,
    /// The scalar returned by the inference service, untouched.
    pub prediction_raw: f64,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "completed".to_string()
}

impl PredictionResult {
    /// Builds a result for a successful upstream call.
    pub fn completed(input_summary: String, prediction_raw: f64) -> Self {
        Self {
            input_summary,
            prediction_raw,
            status: default_status(),
        }
    }
}

/// Scorer response to `POST /predict`.
///
/// The scorer's degraded path answers 200 with an `error` field and no
/// `prediction`, so both fields are optional and callers must check which
/// one is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictResponse {
    pub fn ok(prediction: f64) -> Self {
        Self {
            prediction: Some(prediction),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            prediction: None,
            error: Some(message.into()),
        }
    }
}

/// Gateway health payload (`GET /` on the backend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayHealth {
    pub status: String,
    pub inference_service_url: String,
}

/// Scorer health payload (`GET /` on the inference service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerHealth {
    pub status: String,
    pub model_loaded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_input_deserializes_floats() {
        let input: UserInput =
            serde_json::from_str(r#"{"feature1": 1.5, "feature2": -2.0, "feature3": 0.0}"#)
                .unwrap();
        assert_eq!(input.feature1, 1.5);
        assert_eq!(input.feature2, -2.0);
        assert_eq!(input.feature3, 0.0);
    }

    #[test]
    fn user_input_rejects_missing_feature() {
        let result =
            serde_json::from_str::<UserInput>(r#"{"feature1": 1.0, "feature2": 2.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn user_input_rejects_non_numeric_feature() {
        let result = serde_json::from_str::<UserInput>(
            r#"{"feature1": "abc", "feature2": 2.0, "feature3": 3.0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn prediction_result_defaults_to_completed() {
        let result = PredictionResult::completed("F1: 1.0, F2: 2.0".to_string(), 3.5);
        assert_eq!(result.status, "completed");

        // Missing status on the wire falls back to the default as well.
        let parsed: PredictionResult =
            serde_json::from_str(r#"{"input_summary": "x", "prediction_raw": 1.0}"#).unwrap();
        assert_eq!(parsed.status, "completed");
    }

    #[test]
    fn predict_response_omits_absent_fields() {
        let ok = serde_json::to_value(PredictResponse::ok(4.0)).unwrap();
        assert_eq!(ok, serde_json::json!({ "prediction": 4.0 }));

        let degraded = serde_json::to_value(PredictResponse::error("Model not loaded")).unwrap();
        assert_eq!(degraded, serde_json::json!({ "error": "Model not loaded" }));
    }

    #[test]
    fn predict_response_tolerates_unknown_shape() {
        // A body with neither field still parses; the caller decides what
        // a missing prediction means.
        let parsed: PredictResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.prediction.is_none());
        assert!(parsed.error.is_none());
    }
}
