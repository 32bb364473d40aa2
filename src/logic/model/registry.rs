//! Model Registry - the startup-scoped asset resource
//!
//! Both (model, scaler) pairs are loaded exactly once, before the server
//! accepts requests, and the outcome is an explicit value the entry point
//! must check. There is no global lookup; the registry travels by handle
//! through application state and is read-only for the process lifetime.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::constants;
use crate::logic::features::{DIABETES_LAYOUT, HEART_LAYOUT};
use crate::logic::risk::Condition;

use super::engine::ConditionModel;
use super::AssetError;

/// Both condition models, loaded and ready
#[derive(Debug)]
pub struct ModelRegistry {
    pub heart: ConditionModel,
    pub diabetes: ConditionModel,
    loaded_at: DateTime<Utc>,
}

impl ModelRegistry {
    /// Load both (model, scaler) pairs from the configured asset directory
    pub fn load(config: &Config) -> Result<Self, AssetError> {
        let dir = &config.model_dir;
        if !dir.is_dir() {
            return Err(AssetError::NotFound(dir.display().to_string()));
        }

        let heart = ConditionModel::load(
            Condition::HeartDisease,
            &HEART_LAYOUT,
            &dir.join(constants::HEART_MODEL_FILE),
            &dir.join(constants::HEART_SCALER_FILE),
        )?;

        let diabetes = ConditionModel::load(
            Condition::Diabetes,
            &DIABETES_LAYOUT,
            &dir.join(constants::DIABETES_MODEL_FILE),
            &dir.join(constants::DIABETES_SCALER_FILE),
        )?;

        Ok(Self {
            heart,
            diabetes,
            loaded_at: Utc::now(),
        })
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn model(&self, condition: Condition) -> &ConditionModel {
        match condition {
            Condition::HeartDisease => &self.heart,
            Condition::Diabetes => &self.diabetes,
        }
    }
}

// ============================================================================
// MODEL STATE
// ============================================================================

/// Outcome of startup asset loading, carried in application state.
///
/// `Unavailable` is the degraded mode: the service stays up, reports the
/// retained failure reason, and refuses assessments until restart.
#[derive(Clone)]
pub enum ModelState {
    Ready(Arc<ModelRegistry>),
    Unavailable { reason: String },
}

impl ModelState {
    pub fn ready(registry: ModelRegistry) -> Self {
        ModelState::Ready(Arc::new(registry))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        ModelState::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready(_))
    }

    pub fn registry(&self) -> Option<&Arc<ModelRegistry>> {
        match self {
            ModelState::Ready(registry) => Some(registry),
            ModelState::Unavailable { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            ModelState::Ready(_) => None,
            ModelState::Unavailable { reason } => Some(reason),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_missing_directory() {
        let config = Config {
            model_dir: PathBuf::from("no/such/directory"),
            ..Config::default()
        };
        let err = ModelRegistry::load(&config).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn test_load_missing_model_in_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            model_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let err = ModelRegistry::load(&config).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn test_unavailable_state_retains_reason() {
        let state = ModelState::unavailable("model assets not found");
        assert!(!state.is_ready());
        assert!(state.registry().is_none());
        assert_eq!(state.failure_reason(), Some("model assets not found"));
    }
}
