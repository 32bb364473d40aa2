//! Features Module - fixed model input schemas and their assembly
//!
//! - `layout` - versioned feature orderings for both condition models
//! - `vector` - layout-tagged feature vector
//! - `assemble` - pure construction from validated clinical input

pub mod assemble;
pub mod layout;
pub mod vector;

// Re-export common types
pub use assemble::{assemble_diabetes, assemble_heart, PlaceholderDefaults};
pub use layout::{FeatureLayout, LayoutInfo, DIABETES_LAYOUT, HEART_LAYOUT};
pub use vector::{FeatureVector, LayoutMismatchError};
