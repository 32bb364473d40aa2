//! Model Module - opaque inference assets
//!
//! Each condition is served by an (ONNX estimator, fitted scaler) pair loaded
//! once at startup. The module is deliberately split so a model swap touches
//! nothing outside `engine`:
//! - `scaler` - fitted standardization parameters (JSON sidecar)
//! - `integrity` - SHA-256 sidecar verification of asset files
//! - `engine` - ONNX session wrapper exposing `predict_proba`
//! - `registry` - startup loading of both pairs + degraded state

pub mod engine;
pub mod integrity;
pub mod registry;
pub mod scaler;

use thiserror::Error;

// Re-export common types
pub use engine::{ConditionModel, InferenceError, ModelMetadata};
pub use registry::{ModelRegistry, ModelState};
pub use scaler::ScalerParams;

/// Errors raised while loading or verifying model assets
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("model asset not found: {0}")]
    NotFound(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scaler parameters in {path}: {reason}")]
    InvalidScaler { path: String, reason: String },

    #[error("{condition} scaler is fitted for {actual} features but the layout has {expected}")]
    ShapeMismatch {
        condition: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("checksum mismatch for {0}")]
    ChecksumMismatch(String),

    #[error("failed to load ONNX model {path}: {reason}")]
    Session { path: String, reason: String },
}
