//! Logic Module - the assessment core
//!
//! - `clinical` - bounded patient input
//! - `features` - fixed model input schemas and their assembly
//! - `model` - scaler, ONNX engine, startup registry
//! - `risk` - probability to risk-tier mapping
//! - `status` - engine status collection

pub mod clinical;
pub mod features;
pub mod model;
pub mod risk;
pub mod status;
