//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::constants;
use crate::logic::features::PlaceholderDefaults;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the model/scaler asset pairs
    pub model_dir: PathBuf,

    /// Server port
    pub port: u16,

    /// Stand-in values for heart features the form does not collect
    pub placeholders: PlaceholderDefaults,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            model_dir: env::var("MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(constants::DEFAULT_MODEL_DIR)),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(constants::DEFAULT_PORT),

            placeholders: PlaceholderDefaults {
                max_heart_rate: env::var("HEART_MAX_HEART_RATE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(constants::DEFAULT_MAX_HEART_RATE),

                st_depression: env::var("HEART_ST_DEPRESSION")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(constants::DEFAULT_ST_DEPRESSION),
            },

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from(constants::DEFAULT_MODEL_DIR),
            port: constants::DEFAULT_PORT,
            placeholders: PlaceholderDefaults::default(),
            environment: "development".to_string(),
        }
    }
}
