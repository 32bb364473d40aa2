//! Feature Assembler
//!
//! Pure construction of the two fixed-order model inputs from validated
//! clinical input. No validation happens here; callers bound the input first.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::logic::clinical::ClinicalInput;
use super::layout::{DIABETES_LAYOUT, HEART_LAYOUT};
use super::vector::FeatureVector;

/// Stand-in values for the heart features the form does not collect.
///
/// The heart model expects a max heart rate ("thalach") and an ST depression
/// ("oldpeak"); neither is derived from the patient, so both are kept as
/// configurable defaults rather than buried constants. The defaults carry no
/// clinical meaning for the individual being assessed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlaceholderDefaults {
    pub max_heart_rate: f64,
    pub st_depression: f64,
}

impl Default for PlaceholderDefaults {
    fn default() -> Self {
        Self {
            max_heart_rate: constants::DEFAULT_MAX_HEART_RATE,
            st_depression: constants::DEFAULT_ST_DEPRESSION,
        }
    }
}

/// Assemble the heart-disease input: `[age, resting_bp, cholesterol,
/// max_heart_rate, st_depression]` with the last two from placeholders.
pub fn assemble_heart(input: &ClinicalInput, placeholders: &PlaceholderDefaults) -> FeatureVector {
    FeatureVector::for_layout(
        &HEART_LAYOUT,
        vec![
            f64::from(input.age),
            f64::from(input.systolic_bp),
            f64::from(input.cholesterol),
            placeholders.max_heart_rate,
            placeholders.st_depression,
        ],
    )
}

/// Assemble the diabetes input: `[age, glucose, bmi]`.
pub fn assemble_diabetes(input: &ClinicalInput) -> FeatureVector {
    FeatureVector::for_layout(
        &DIABETES_LAYOUT,
        vec![f64::from(input.age), f64::from(input.glucose), input.bmi],
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::clinical::ClinicalInput;

    fn sample_input() -> ClinicalInput {
        ClinicalInput {
            age: 45,
            bmi: 25.5,
            glucose: 100,
            systolic_bp: 120,
            diastolic_bp: 80,
            cholesterol: 190,
            ..ClinicalInput::default()
        }
    }

    #[test]
    fn test_heart_vector_order_and_placeholders() {
        let vector = assemble_heart(&sample_input(), &PlaceholderDefaults::default());
        assert_eq!(vector.as_slice(), &[45.0, 120.0, 190.0, 150.0, 1.0]);
    }

    #[test]
    fn test_diabetes_vector_order() {
        let vector = assemble_diabetes(&sample_input());
        assert_eq!(vector.as_slice(), &[45.0, 100.0, 25.5]);
    }

    #[test]
    fn test_custom_placeholders_land_in_tail_positions() {
        let placeholders = PlaceholderDefaults {
            max_heart_rate: 162.0,
            st_depression: 0.4,
        };
        let vector = assemble_heart(&sample_input(), &placeholders);
        assert_eq!(vector.as_slice()[3], 162.0);
        assert_eq!(vector.as_slice()[4], 0.4);
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let input = sample_input();
        let placeholders = PlaceholderDefaults::default();

        let first = assemble_heart(&input, &placeholders);
        let second = assemble_heart(&input, &placeholders);
        assert_eq!(first, second);

        let first = assemble_diabetes(&input);
        let second = assemble_diabetes(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unused_fields_do_not_influence_vectors() {
        let mut a = sample_input();
        let mut b = sample_input();
        a.diastolic_bp = 60;
        b.diastolic_bp = 140;

        let placeholders = PlaceholderDefaults::default();
        assert_eq!(
            assemble_heart(&a, &placeholders),
            assemble_heart(&b, &placeholders)
        );
        assert_eq!(assemble_diabetes(&a), assemble_diabetes(&b));
    }
}
