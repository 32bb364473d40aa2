//! Inference Engine - ONNX Runtime Integration
//!
//! One `ConditionModel` per condition, holding the ONNX session and the
//! fitted scaler. `predict_proba` runs the full per-request pipeline:
//! layout check → scale → tensor → session → positive-class probability.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use ndarray::Array2;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;

use crate::logic::features::{FeatureLayout, FeatureVector, LayoutMismatchError};
use crate::logic::risk::Condition;

use super::integrity;
use super::scaler::ScalerParams;
use super::AssetError;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Errors raised while running a prediction
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error(transparent)]
    LayoutMismatch(#[from] LayoutMismatchError),

    #[error("feature arity mismatch: scaler fitted for {expected} features, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("inference failed: {0}")]
    Execution(String),

    #[error("model output has fewer than two class probabilities")]
    MissingProbabilities,
}

// ============================================================================
// METADATA
// ============================================================================

/// Metadata about a loaded (model, scaler) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub condition: Condition,
    pub model_path: String,
    pub scaler_path: String,
    pub layout_version: u8,
    pub layout_hash: u32,
    pub feature_count: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// CONDITION MODEL
// ============================================================================

/// A loaded (ONNX estimator, fitted scaler) pair for one condition.
///
/// Nothing is mutated after load except the session's run call, which `ort`
/// requires exclusive access for; the per-model mutex keeps the two
/// conditions independent of each other.
#[derive(Debug)]
pub struct ConditionModel {
    condition: Condition,
    layout: &'static FeatureLayout,
    session: Mutex<Session>,
    scaler: ScalerParams,
    metadata: ModelMetadata,

    /// Latency stats for the status surface
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
}

impl ConditionModel {
    /// Load one (model, scaler) pair from disk
    pub fn load(
        condition: Condition,
        layout: &'static FeatureLayout,
        model_path: &Path,
        scaler_path: &Path,
    ) -> Result<Self, AssetError> {
        tracing::info!("Loading {} model from {}", condition, model_path.display());

        if !model_path.exists() {
            return Err(AssetError::NotFound(model_path.display().to_string()));
        }

        integrity::verify_sidecar(model_path)?;

        let scaler = ScalerParams::load(scaler_path)?;
        if scaler.len() != layout.len() {
            return Err(AssetError::ShapeMismatch {
                condition: layout.condition,
                expected: layout.len(),
                actual: scaler.len(),
            });
        }

        let session = Session::builder()
            .map_err(|e| AssetError::Session {
                path: model_path.display().to_string(),
                reason: format!("failed to create session builder: {}", e),
            })?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| AssetError::Session {
                path: model_path.display().to_string(),
                reason: format!("failed to set optimization: {}", e),
            })?
            .commit_from_file(model_path)
            .map_err(|e| AssetError::Session {
                path: model_path.display().to_string(),
                reason: e.to_string(),
            })?;

        let metadata = ModelMetadata {
            condition,
            model_path: model_path.display().to_string(),
            scaler_path: scaler_path.display().to_string(),
            layout_version: layout.version,
            layout_hash: layout.hash(),
            feature_count: layout.len(),
            loaded_at: chrono::Utc::now(),
        };

        Ok(Self {
            condition,
            layout,
            session: Mutex::new(session),
            scaler,
            metadata,
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        })
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn layout(&self) -> &'static FeatureLayout {
        self.layout
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Positive-class probability for one assembled feature vector.
    ///
    /// Classifier graphs exported from common toolchains emit either a bare
    /// probability tensor or a (label, probabilities) pair; the probabilities
    /// are the last float output, row 0, class index 1.
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let start_time = std::time::Instant::now();

        features.validate(self.layout)?;
        let scaled = self.scaler.transform(features.as_slice())?;

        let row: Vec<f32> = scaled.iter().map(|v| *v as f32).collect();
        let input_array = Array2::<f32>::from_shape_vec((1, row.len()), row)
            .map_err(|e| InferenceError::Execution(format!("array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError::Execution(format!("tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let output_names: Vec<String> =
            session.outputs.iter().map(|o| o.name.clone()).collect();

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Execution(e.to_string()))?;

        let mut probabilities: Option<Vec<f32>> = None;
        for name in &output_names {
            if let Some(output) = outputs.get(name) {
                if let Ok(tensor) = output.try_extract_tensor::<f32>() {
                    probabilities = Some(tensor.1.to_vec());
                }
            }
        }

        let class_probs = probabilities.ok_or(InferenceError::MissingProbabilities)?;
        if class_probs.len() < 2 {
            return Err(InferenceError::MissingProbabilities);
        }
        let probability = f64::from(class_probs[1]);

        // Track metrics
        self.latency_sum_us
            .fetch_add(start_time.elapsed().as_micros() as u64, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);

        Ok(probability)
    }

    pub fn inference_count(&self) -> u64 {
        self.inference_count.load(Ordering::Relaxed)
    }

    pub fn avg_latency_ms(&self) -> f32 {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
