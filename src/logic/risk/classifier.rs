//! Risk Classifier
//!
//! Only the classify logic - no types, no transport.
//! Input: positive-class probability in [0, 1]
//! Output: RiskAssessment
//!
//! Stateless, deterministic, idempotent for a given input.

use super::types::{RiskAssessment, RiskError, RiskTier};

/// Tier boundary: at or above this percentage is High
const HIGH_BOUNDARY_PCT: f64 = 70.0;

/// Tier boundary: at or above this percentage (and below High) is Medium
const MEDIUM_BOUNDARY_PCT: f64 = 40.0;

/// Map a probability to its risk tier with a display percentage.
///
/// Boundaries are closed on the upper tier: exactly 40% is Medium, exactly
/// 70% is High. A probability outside [0, 1] (or NaN) is a caller error and
/// is refused rather than silently mis-tiered.
pub fn classify(probability: f64) -> Result<RiskAssessment, RiskError> {
    if probability.is_nan() {
        return Err(RiskError::ProbabilityNotANumber);
    }
    if !(0.0..=1.0).contains(&probability) {
        return Err(RiskError::ProbabilityOutOfRange(probability));
    }

    // Tiering uses the unrounded percentage
    let percent = probability * 100.0;

    let tier = if percent >= HIGH_BOUNDARY_PCT {
        RiskTier::High
    } else if percent >= MEDIUM_BOUNDARY_PCT {
        RiskTier::Medium
    } else {
        RiskTier::Low
    };

    Ok(RiskAssessment {
        probability,
        tier,
        label: tier.label().to_string(),
        display_percent: (percent * 10.0).round() / 10.0,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tier_of(p: f64) -> RiskTier {
        classify(p).unwrap().tier
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_of(0.70), RiskTier::High);
        assert_eq!(tier_of(0.6999), RiskTier::Medium);
        assert_eq!(tier_of(0.40), RiskTier::Medium);
        assert_eq!(tier_of(0.3999), RiskTier::Low);
        assert_eq!(tier_of(0.0), RiskTier::Low);
        assert_eq!(tier_of(1.0), RiskTier::High);
    }

    #[test]
    fn test_tier_is_monotonic_in_probability() {
        let mut previous = RiskTier::Low;
        for step in 0..=1000 {
            let tier = tier_of(f64::from(step) / 1000.0);
            assert!(tier >= previous, "tier regressed at p={}", step);
            previous = tier;
        }
    }

    #[test]
    fn test_labels_match_tiers() {
        assert_eq!(classify(0.1).unwrap().label, "Low Risk");
        assert_eq!(classify(0.5).unwrap().label, "Medium Risk");
        assert_eq!(classify(0.9).unwrap().label, "High Risk");
    }

    #[test]
    fn test_display_percent_rounds_to_one_decimal() {
        assert_eq!(classify(0.12345).unwrap().display_percent, 12.3);
        assert_eq!(classify(0.12355).unwrap().display_percent, 12.4);
        assert_eq!(classify(1.0).unwrap().display_percent, 100.0);
    }

    #[test]
    fn test_tiering_uses_unrounded_value() {
        // 0.69999 displays as 70.0 but must stay Medium
        let assessment = classify(0.69999).unwrap();
        assert_eq!(assessment.display_percent, 70.0);
        assert_eq!(assessment.tier, RiskTier::Medium);
    }

    #[test]
    fn test_probability_is_preserved_unrounded() {
        let assessment = classify(0.69999).unwrap();
        assert_eq!(assessment.probability, 0.69999);
    }

    #[test]
    fn test_out_of_range_probability_refused() {
        assert_eq!(
            classify(-0.01),
            Err(RiskError::ProbabilityOutOfRange(-0.01))
        );
        assert_eq!(classify(1.01), Err(RiskError::ProbabilityOutOfRange(1.01)));
    }

    #[test]
    fn test_nan_probability_refused() {
        assert_eq!(classify(f64::NAN), Err(RiskError::ProbabilityNotANumber));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let first = classify(0.42).unwrap();
        let second = classify(0.42).unwrap();
        assert_eq!(first.tier, second.tier);
        assert_eq!(first.display_percent, second.display_percent);
        assert_eq!(first.probability, second.probability);
    }
}
