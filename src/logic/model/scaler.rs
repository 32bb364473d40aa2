//! Feature Scaler
//!
//! Fitted standardization applied to a raw feature vector before inference.
//! The parameters come from the training pipeline as a JSON sidecar next to
//! each model: `{"mean": [...], "scale": [...]}`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::engine::InferenceError;
use super::AssetError;

/// Per-feature standardization parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl ScalerParams {
    /// Load and sanity-check scaler parameters from a JSON sidecar
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        if !path.exists() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let params: ScalerParams =
            serde_json::from_str(&raw).map_err(|e| AssetError::InvalidScaler {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        params.check().map_err(|reason| AssetError::InvalidScaler {
            path: path.display().to_string(),
            reason,
        })?;

        Ok(params)
    }

    fn check(&self) -> Result<(), String> {
        if self.mean.is_empty() {
            return Err("empty mean vector".to_string());
        }
        if self.mean.len() != self.scale.len() {
            return Err(format!(
                "mean has {} entries but scale has {}",
                self.mean.len(),
                self.scale.len()
            ));
        }
        if let Some(i) = self.scale.iter().position(|s| *s == 0.0 || !s.is_finite()) {
            return Err(format!("degenerate scale entry at position {}", i));
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err("non-finite mean entry".to_string());
        }
        Ok(())
    }

    /// Number of features the scaler was fitted for
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Standardize a raw vector: `(x - mean) / scale` per position
    pub fn transform(&self, values: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if values.len() != self.len() {
            return Err(InferenceError::ArityMismatch {
                expected: self.len(),
                actual: values.len(),
            });
        }

        Ok(values
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================
