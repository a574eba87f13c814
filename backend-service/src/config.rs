//! Environment-derived service configuration.
//!
//! Loaded once in `main` and shared through the axum state; immutable for
//! the lifetime of the process.

/// Default scorer location inside the compose network.
pub const DEFAULT_INFERENCE_SERVICE_URL: &str = "http://inference-service:8000";

/// Default upstream call timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 5;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the inference service.
    pub inference_service_url: String,
    /// Timeout applied to each upstream call.
    pub request_timeout_seconds: u64,
    /// Log level used when RUST_LOG is not set.
    pub log_level: String,
    /// Listener address for this service.
    pub bind_addr: String,
}

impl ServiceConfig {
    /// Reads configuration from the environment, falling back to defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        let inference_service_url = std::env::var("INFERENCE_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_INFERENCE_SERVICE_URL.to_string());

        let request_timeout_seconds = std::env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS);

        let log_level =
            std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let bind_addr =
            std::env::var("BACKEND_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Self {
            inference_service_url,
            request_timeout_seconds,
            log_level,
            bind_addr,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            inference_service_url: DEFAULT_INFERENCE_SERVICE_URL.to_string(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            log_level: "info".to_string(),
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_contract() {
        let config = ServiceConfig::default();
        assert_eq!(config.inference_service_url, "http://inference-service:8000");
        assert_eq!(config.request_timeout_seconds, 5);
        assert_eq!(config.log_level, "info");
    }
}
