//! Placeholder regression model.
//!
//! A real deployment would load serious model weights here; this service
//! ships a stand-in: a linear fit on three hand-picked points, persisted
//! as a small JSON weights file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use prediction_proto::UserInput;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("model file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fitted linear model: `prediction = intercept + weights . features`.
///
/// Owned by the server state and immutable after load; handlers borrow it,
/// nothing mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub weights: [f64; 3],
    pub intercept: f64,
}

/// Training points for the placeholder fit.
const DUMMY_SAMPLES: [([f64; 3], f64); 3] = [
    ([1.0, 1.0, 1.0], 2.0),
    ([2.0, 2.0, 2.0], 4.0),
    ([3.0, 3.0, 3.0], 6.0),
];

impl LinearModel {
    /// Fits the placeholder model on the dummy samples.
    ///
    /// The samples are rank-1 (all features move together), so ordinary
    /// least squares reduces to regressing the target on the feature sum;
    /// spreading that slope evenly across the three features gives the
    /// minimum-norm solution.
    pub fn train_dummy() -> Self {
        let mut num = 0.0;
        let mut den = 0.0;
        for (features, target) in DUMMY_SAMPLES {
            let sum: f64 = features.iter().sum();
            num += sum * target;
            den += sum * sum;
        }
        let slope = num / den;

        Self {
            weights: [slope; 3],
            intercept: 0.0,
        }
    }

    pub fn predict(&self, input: &UserInput) -> f64 {
        self.intercept
            + self.weights[0] * input.feature1
            + self.weights[1] * input.feature2
            + self.weights[2] * input.feature3
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Startup path: load the weights file if present, otherwise fall back
    /// to the placeholder fit. A present-but-unreadable file leaves the
    /// service degraded (no model) rather than silently retraining.
    pub fn load_or_train(path: &Path) -> Option<Self> {
        if path.exists() {
            match Self::load(path) {
                Ok(model) => {
                    info!(path = %path.display(), "model loaded from file");
                    Some(model)
                }
                Err(e) => {
                    error!(path = %path.display(), error = %e, "failed to load model");
                    None
                }
            }
        } else {
            info!(path = %path.display(), "model file not found, fitting placeholder model");
            Some(Self::train_dummy())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(f1: f64, f2: f64, f3: f64) -> UserInput {
        UserInput {
            feature1: f1,
            feature2: f2,
            feature3: f3,
        }
    }

    #[test]
    fn dummy_fit_reproduces_training_targets() {
        let model = LinearModel::train_dummy();
        for (features, target) in DUMMY_SAMPLES {
            let prediction = model.predict(&input(features[0], features[1], features[2]));
            assert!((prediction - target).abs() < 1e-9);
        }
    }

    #[test]
    fn dummy_fit_predicts_four_for_all_twos() {
        let model = LinearModel::train_dummy();
        let prediction = model.predict(&input(2.0, 2.0, 2.0));
        assert!((prediction - 4.0).abs() < 1e-9);
    }

    #[test]
    fn weights_are_spread_evenly() {
        let model = LinearModel::train_dummy();
        assert!((model.weights[0] - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(model.weights[0], model.weights[1]);
        assert_eq!(model.weights[1], model.weights[2]);
        assert_eq!(model.intercept, 0.0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        let model = LinearModel::train_dummy();
        model.save(&path).unwrap();

        let loaded = LinearModel::load(&path).unwrap();
        assert_eq!(loaded, model);
    }

    #[test]
    fn load_or_train_falls_back_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let model = LinearModel::load_or_train(&dir.path().join("missing.json"));
        assert_eq!(model, Some(LinearModel::train_dummy()));
    }

    #[test]
    fn load_or_train_degrades_on_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(LinearModel::load_or_train(&path), None);
    }
}
