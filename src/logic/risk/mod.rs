//! Risk Module - probability to risk-tier stratification
//!
//! - `types` - RiskTier, RiskAssessment, Condition
//! - `classifier` - the deterministic tier mapping

pub mod classifier;
pub mod types;

// Re-export common types
pub use classifier::classify;
pub use types::{Condition, RiskAssessment, RiskError, RiskTier};
