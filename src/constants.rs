//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change a default asset path or placeholder, only edit this file.

/// Default directory holding the model/scaler assets, relative to the
/// working directory the service is started from.
pub const DEFAULT_MODEL_DIR: &str = "model";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8080;

/// Heart-disease model asset file names
pub const HEART_MODEL_FILE: &str = "heart_model.onnx";
pub const HEART_SCALER_FILE: &str = "heart_scaler.json";

/// Diabetes model asset file names
pub const DIABETES_MODEL_FILE: &str = "diabetes_model.onnx";
pub const DIABETES_SCALER_FILE: &str = "diabetes_scaler.json";

/// Default stand-in for the heart model's max-heart-rate feature ("thalach").
/// The form never collects this value.
pub const DEFAULT_MAX_HEART_RATE: f64 = 150.0;

/// Default stand-in for the heart model's ST-depression feature ("oldpeak").
/// The form never collects this value either.
pub const DEFAULT_ST_DEPRESSION: f64 = 1.0;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "HealthAI Core";
