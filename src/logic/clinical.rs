//! Clinical input types
//!
//! The eight fields collected by the submission form, bounds-checked at the
//! service boundary rather than trusted from form widgets. Everything here
//! is transient; an input lives for one assessment and is discarded.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// CATEGORICAL FIELDS
// ============================================================================

/// Patient gender. Collected by the form, not used by either model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Smoking status. Collected by the form, not used by either model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingStatus {
    Never,
    Former,
    Current,
}

/// Alcohol intake. Collected by the form, not used by either model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlcoholIntake {
    None,
    Occasional,
    Frequent,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl SmokingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SmokingStatus::Never => "Never",
            SmokingStatus::Former => "Former",
            SmokingStatus::Current => "Current",
        }
    }
}

impl AlcoholIntake {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlcoholIntake::None => "None",
            AlcoholIntake::Occasional => "Occasional",
            AlcoholIntake::Frequent => "Frequent",
        }
    }
}

// ============================================================================
// CLINICAL INPUT
// ============================================================================

/// One submission of patient vitals.
///
/// Bounds mirror the form widgets; `validate()` must pass before the input
/// reaches the feature assembler.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClinicalInput {
    /// Age in years
    #[validate(range(min = 1, max = 120))]
    pub age: u32,

    pub gender: Gender,

    /// Body mass index (kg/m²)
    #[validate(range(min = 10.0, max = 60.0))]
    pub bmi: f64,

    /// Blood glucose (mg/dL)
    #[validate(range(min = 50, max = 400))]
    pub glucose: u32,

    /// Systolic blood pressure (mmHg)
    #[validate(range(min = 80, max = 250))]
    pub systolic_bp: u32,

    /// Diastolic blood pressure (mmHg). Collected, not used in inference.
    #[validate(range(min = 40, max = 150))]
    pub diastolic_bp: u32,

    /// Serum cholesterol (mg/dL)
    #[validate(range(min = 100, max = 500))]
    pub cholesterol: u32,

    pub smoking_status: SmokingStatus,

    pub alcohol_intake: AlcoholIntake,
}

impl Default for ClinicalInput {
    /// The form's pre-filled values.
    fn default() -> Self {
        Self {
            age: 45,
            gender: Gender::Male,
            bmi: 25.5,
            glucose: 100,
            systolic_bp: 120,
            diastolic_bp: 80,
            cholesterol: 190,
            smoking_status: SmokingStatus::Never,
            alcohol_intake: AlcoholIntake::None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
