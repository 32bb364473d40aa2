//! Feature Vector - the unit handed to a condition model
//!
//! **Versioned feature vector with layout validation**
//!
//! Carries the layout version and hash alongside the values so an engine can
//! refuse input assembled against a different schema.

use serde::{Deserialize, Serialize};

use super::layout::FeatureLayout;

/// Error when a vector was assembled against a different layout
#[derive(Debug, Clone)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            self.expected_version, self.expected_hash, self.actual_version, self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Versioned feature vector
///
/// Always construct through [`FeatureVector::for_layout`] (or the assembler);
/// never hand a raw `Vec<f64>` to an engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Layout version the values were assembled against
    pub version: u8,
    /// CRC32 hash of the layout (for mismatch detection)
    pub layout_hash: u32,
    /// Feature values in layout order
    pub values: Vec<f64>,
}

impl FeatureVector {
    /// Create a vector for a specific layout.
    ///
    /// The value count must match the layout; assemblers produce the values
    /// positionally so a mismatch is a programming error.
    pub fn for_layout(layout: &FeatureLayout, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), layout.len());
        Self {
            version: layout.version,
            layout_hash: layout.hash(),
            values,
        }
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Validate that this vector matches the given layout
    pub fn validate(&self, layout: &FeatureLayout) -> Result<(), LayoutMismatchError> {
        let expected_hash = layout.hash();
        if self.version != layout.version || self.layout_hash != expected_hash {
            return Err(LayoutMismatchError {
                expected_version: layout.version,
                expected_hash,
                actual_version: self.version,
                actual_hash: self.layout_hash,
            });
        }
        Ok(())
    }

    /// Check compatibility without the error detail
    pub fn is_compatible(&self, layout: &FeatureLayout) -> bool {
        self.validate(layout).is_ok()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::layout::{DIABETES_LAYOUT, HEART_LAYOUT};

    #[test]
    fn test_vector_carries_layout_identity() {
        let vector = FeatureVector::for_layout(&HEART_LAYOUT, vec![45.0, 120.0, 190.0, 150.0, 1.0]);
        assert_eq!(vector.version, HEART_LAYOUT.version);
        assert_eq!(vector.layout_hash, HEART_LAYOUT.hash());
        assert_eq!(vector.len(), 5);
    }

    #[test]
    fn test_validate_against_own_layout() {
        let vector = FeatureVector::for_layout(&DIABETES_LAYOUT, vec![45.0, 100.0, 25.5]);
        assert!(vector.validate(&DIABETES_LAYOUT).is_ok());
        assert!(vector.is_compatible(&DIABETES_LAYOUT));
    }

    #[test]
    fn test_validate_rejects_foreign_layout() {
        let vector = FeatureVector::for_layout(&DIABETES_LAYOUT, vec![45.0, 100.0, 25.5]);
        let err = vector.validate(&HEART_LAYOUT).unwrap_err();
        assert_eq!(err.expected_hash, HEART_LAYOUT.hash());
        assert_eq!(err.actual_hash, DIABETES_LAYOUT.hash());
        assert!(!vector.is_compatible(&HEART_LAYOUT));
    }
}
