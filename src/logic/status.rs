//! Engine status collection

use crate::api::engine_status::{ConditionModelStatus, EngineStatus};
use crate::logic::features::{FeatureLayout, LayoutInfo, DIABETES_LAYOUT, HEART_LAYOUT};
use crate::logic::model::{ConditionModel, ModelState};

pub fn collect(models: &ModelState) -> EngineStatus {
    match models {
        ModelState::Ready(registry) => EngineStatus {
            degraded: false,
            reason: None,
            heart: loaded_status(&registry.heart),
            diabetes: loaded_status(&registry.diabetes),
        },
        ModelState::Unavailable { reason } => EngineStatus {
            degraded: true,
            reason: Some(reason.clone()),
            heart: unloaded_status(&HEART_LAYOUT),
            diabetes: unloaded_status(&DIABETES_LAYOUT),
        },
    }
}

fn loaded_status(model: &ConditionModel) -> ConditionModelStatus {
    let metadata = model.metadata();
    ConditionModelStatus {
        condition: model.condition().to_string(),
        loaded: true,
        layout: LayoutInfo::of(model.layout()),
        model_path: Some(metadata.model_path.clone()),
        loaded_at: Some(metadata.loaded_at),
        inference_count: model.inference_count(),
        avg_latency_ms: model.avg_latency_ms(),
    }
}

fn unloaded_status(layout: &FeatureLayout) -> ConditionModelStatus {
    ConditionModelStatus {
        condition: layout.condition.to_string(),
        loaded: false,
        layout: LayoutInfo::of(layout),
        model_path: None,
        loaded_at: None,
        inference_count: 0,
        avg_latency_ms: 0.0,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_status_reports_reason_and_layouts() {
        let status = collect(&ModelState::unavailable("assets missing"));

        assert!(status.degraded);
        assert_eq!(status.reason.as_deref(), Some("assets missing"));
        assert!(!status.heart.loaded);
        assert!(!status.diabetes.loaded);
        assert_eq!(status.heart.layout.feature_count, 5);
        assert_eq!(status.diabetes.layout.feature_count, 3);
        assert_eq!(status.heart.condition, "heart_disease");
        assert_eq!(status.diabetes.condition, "diabetes");
    }
}
