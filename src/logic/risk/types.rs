//! Risk Types
//!
//! Data structures for risk stratification. No logic here, only types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// RISK TIER
// ============================================================================

/// Discrete risk bands derived from a continuous probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    /// Below 40% - routine screening cadence
    Low,
    /// 40% to below 70% - follow-up recommended
    Medium,
    /// 70% and above - consultation advised
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    /// Display label as rendered on the result card
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskTier::Low => 0,
            RiskTier::Medium => 1,
            RiskTier::High => 2,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::Low => "#10b981",    // Green
            RiskTier::Medium => "#f59e0b", // Yellow
            RiskTier::High => "#ef4444",   // Red
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CONDITION
// ============================================================================

/// The two conditions the service assesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    HeartDisease,
    Diabetes,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::HeartDisease => "heart_disease",
            Condition::Diabetes => "diabetes",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK ASSESSMENT
// ============================================================================

/// Result of classifying one model probability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Raw positive-class probability (0.0 - 1.0), unrounded
    pub probability: f64,

    /// Risk band the probability falls in
    pub tier: RiskTier,

    /// Display label ("Low Risk" / "Medium Risk" / "High Risk")
    pub label: String,

    /// probability × 100, rounded to one decimal. Display only; the tier is
    /// always derived from the unrounded probability.
    pub display_percent: f64,
}

// ============================================================================
// ERRORS
// ============================================================================

/// Caller errors the classifier refuses instead of mis-tiering
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    #[error("probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),

    #[error("probability is not a number")]
    ProbabilityNotANumber,
}
