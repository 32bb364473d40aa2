//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: this file controls the input schema of both models**
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment the layout's version
//! 2. Change order → increment the layout's version
//! 3. Remove feature → increment the layout's version
//!
//! The serialized models were fitted against these exact orderings; a silent
//! reorder would produce plausible-looking but wrong probabilities.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// LAYOUT DEFINITIONS (Authoritative source)
// ============================================================================

/// A fixed-order feature schema for one condition model.
#[derive(Debug, Clone, Copy)]
pub struct FeatureLayout {
    /// Condition the layout belongs to ("heart_disease", "diabetes")
    pub condition: &'static str,
    /// Layout version, incremented on any schema change
    pub version: u8,
    /// Feature names in the exact order the model expects them
    pub features: &'static [&'static str],
}

/// Heart-disease model input, 5 features.
///
/// Positions 3 and 4 (`max_heart_rate`, `st_depression`) are not collected by
/// the form; the assembler fills them from configured stand-in defaults.
pub const HEART_LAYOUT: FeatureLayout = FeatureLayout {
    condition: "heart_disease",
    version: 1,
    features: &[
        "age",            // 0: Age in years
        "resting_bp",     // 1: Systolic blood pressure (mmHg)
        "cholesterol",    // 2: Serum cholesterol (mg/dL)
        "max_heart_rate", // 3: "thalach" stand-in, not form-derived
        "st_depression",  // 4: "oldpeak" stand-in, not form-derived
    ],
};

/// Diabetes model input, 3 features.
pub const DIABETES_LAYOUT: FeatureLayout = FeatureLayout {
    condition: "diabetes",
    version: 1,
    features: &[
        "age",     // 0: Age in years
        "glucose", // 1: Blood glucose (mg/dL)
        "bmi",     // 2: Body mass index (kg/m²)
    ],
};

impl FeatureLayout {
    /// Number of features in this layout
    pub const fn len(&self) -> usize {
        self.features.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Compute the CRC32 hash of the layout.
    /// Used to detect layout/model mismatches at runtime.
    pub fn hash(&self) -> u32 {
        let mut hasher = Hasher::new();

        hasher.update(&[self.version]);
        hasher.update(self.condition.as_bytes());
        hasher.update(&[0]);

        for name in self.features {
            hasher.update(name.as_bytes());
            hasher.update(&[0]); // Separator
        }

        hasher.finalize()
    }

    /// Get feature index by name (O(n) but layouts are tiny)
    pub fn feature_index(&self, name: &str) -> Option<usize> {
        self.features.iter().position(|&n| n == name)
    }

    /// Get feature name by index
    pub fn feature_name(&self, index: usize) -> Option<&'static str> {
        self.features.get(index).copied()
    }
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Layout information for the status surface and logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub condition: String,
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn of(layout: &FeatureLayout) -> Self {
        Self {
            condition: layout.condition.to_string(),
            version: layout.version,
            hash: layout.hash(),
            feature_count: layout.len(),
            feature_names: layout.features.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_counts() {
        assert_eq!(HEART_LAYOUT.len(), 5);
        assert_eq!(DIABETES_LAYOUT.len(), 3);
    }

    #[test]
    fn test_layout_hash_consistency() {
        // Hash should be consistent across calls
        assert_eq!(HEART_LAYOUT.hash(), HEART_LAYOUT.hash());
        assert_eq!(DIABETES_LAYOUT.hash(), DIABETES_LAYOUT.hash());
    }

    #[test]
    fn test_layout_hashes_are_distinct() {
        assert_ne!(HEART_LAYOUT.hash(), DIABETES_LAYOUT.hash());
    }

    #[test]
    fn test_layout_hash_non_zero() {
        assert_ne!(HEART_LAYOUT.hash(), 0);
        assert_ne!(DIABETES_LAYOUT.hash(), 0);
    }

    #[test]
    fn test_heart_feature_order() {
        assert_eq!(HEART_LAYOUT.feature_name(0), Some("age"));
        assert_eq!(HEART_LAYOUT.feature_name(1), Some("resting_bp"));
        assert_eq!(HEART_LAYOUT.feature_name(2), Some("cholesterol"));
        assert_eq!(HEART_LAYOUT.feature_name(3), Some("max_heart_rate"));
        assert_eq!(HEART_LAYOUT.feature_name(4), Some("st_depression"));
        assert_eq!(HEART_LAYOUT.feature_name(5), None);
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(DIABETES_LAYOUT.feature_index("age"), Some(0));
        assert_eq!(DIABETES_LAYOUT.feature_index("glucose"), Some(1));
        assert_eq!(DIABETES_LAYOUT.feature_index("bmi"), Some(2));
        assert_eq!(DIABETES_LAYOUT.feature_index("nonexistent"), None);
    }

    #[test]
    fn test_layout_info() {
        let info = LayoutInfo::of(&HEART_LAYOUT);
        assert_eq!(info.condition, "heart_disease");
        assert_eq!(info.version, 1);
        assert_eq!(info.feature_count, 5);
        assert_eq!(info.feature_names.len(), 5);
    }
}
