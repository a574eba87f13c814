//! Outbound client for the inference service.
//!
//! Encapsulates every call the gateway makes to the scorer: request
//! construction, the per-call timeout, and translation of transport or
//! status failures into [`InferenceClientError`]. Each call is independent;
//! there are no retries, no circuit breaking, and no caching.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use prediction_proto::{PredictResponse, UserInput};

use crate::config::ServiceConfig;

/// Failures surfaced by [`InferenceClient::predict`].
///
/// Every variant maps to exactly one client-visible HTTP status; nothing is
/// swallowed or retried.
#[derive(Error, Debug)]
pub enum InferenceClientError {
    /// The scorer answered with a non-200 status. Propagated to the client
    /// with the same status and the scorer's body as the message.
    #[error("inference service returned status {status}: {message}")]
    Upstream { status: StatusCode, message: String },

    /// The scorer was unreachable or did not answer within the configured
    /// timeout. Both cases surface as 503.
    #[error("could not reach the inference service: {0}")]
    ServiceUnavailable(String),

    /// Anything else, e.g. a 200 response whose body lacks a prediction.
    #[error("internal error: {0}")]
    Internal(String),
}

impl InferenceClientError {
    /// HTTP status this error surfaces as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for InferenceClientError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            Self::Upstream { message, .. } if !message.is_empty() => message,
            Self::Upstream { .. } => "inference service error".to_string(),
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Translates a reqwest transport failure into the error taxonomy.
///
/// A timeout surfaces as 503 no matter where it expires, whether on
/// connect, send, or while reading the response body.
fn classify_transport_error(e: reqwest::Error) -> InferenceClientError {
    if e.is_timeout() || e.is_connect() {
        InferenceClientError::ServiceUnavailable(e.to_string())
    } else {
        InferenceClientError::Internal(e.to_string())
    }
}

/// Client for the scorer's `POST /predict` endpoint.
///
/// Holds no mutable state; cloning shares the underlying connection pool,
/// so one instance serves all concurrent requests.
#[derive(Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    base_url: String,
}

impl InferenceClient {
    /// Builds a client for the given scorer base URL with a per-call
    /// timeout covering connect, send, and response read.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, InferenceClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InferenceClientError::Internal(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, InferenceClientError> {
        Self::new(
            config.inference_service_url.clone(),
            Duration::from_secs(config.request_timeout_seconds),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one feature vector to the scorer and returns its prediction.
    ///
    /// Error translation:
    /// - connect failure or timeout (anywhere in the call, including while
    ///   reading the body) -> [`InferenceClientError::ServiceUnavailable`]
    /// - non-200 status -> [`InferenceClientError::Upstream`] with the body forwarded
    /// - unparsable body or missing `prediction` field -> [`InferenceClientError::Internal`]
    pub async fn predict(&self, input: &UserInput) -> Result<f64, InferenceClientError> {
        let url = format!("{}/predict", self.base_url);
        debug!(url = %url, payload = ?input, "calling inference service");

        let response = self
            .http
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = %status, "inference service returned an error status");
            let message = response.text().await.map_err(classify_transport_error)?;
            return Err(InferenceClientError::Upstream { status, message });
        }

        let body: PredictResponse = response.json().await.map_err(|e| {
            match classify_transport_error(e) {
                InferenceClientError::Internal(detail) => {
                    InferenceClientError::Internal(format!("invalid scorer response body: {detail}"))
                }
                other => other,
            }
        })?;

        // A degraded scorer answers 200 with an error field instead of a
        // prediction; normalize that to an internal error.
        body.prediction.ok_or_else(|| {
            InferenceClientError::Internal(body.error.unwrap_or_else(|| {
                "scorer response missing the prediction field".to_string()
            }))
        })
    }
}
