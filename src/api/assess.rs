//! Assessment handler - the submission endpoint
//!
//! One request runs the full pipeline for both conditions: validate →
//! assemble → scale/infer → classify. Results are both-or-none; if either
//! model fails, the submission fails as a whole.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::logic::clinical::ClinicalInput;
use crate::logic::features::{assemble_diabetes, assemble_heart};
use crate::logic::risk::{classify, RiskAssessment};
use crate::AppState;

// ============================================================================
// RESPONSE TYPES
// ============================================================================

/// One bar of the clinical-values comparison chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartMetric {
    pub label: String,
    pub value: f64,
}

/// Result of one submission: both assessments plus the chart values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    /// Ephemeral evaluation id; nothing is persisted under it
    pub id: String,
    pub created_at: DateTime<Utc>,

    pub heart_disease: RiskAssessment,
    pub diabetes: RiskAssessment,

    pub chart: Vec<ChartMetric>,
}

// ============================================================================
// HANDLER
// ============================================================================

pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<ClinicalInput>,
) -> AppResult<Json<AssessmentResponse>> {
    input
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let registry = state.models.registry().ok_or_else(|| {
        AppError::ModelUnavailable(
            state
                .models
                .failure_reason()
                .unwrap_or("model assets not loaded")
                .to_string(),
        )
    })?;

    let heart_features = assemble_heart(&input, &state.config.placeholders);
    let heart_probability = registry.heart.predict_proba(&heart_features)?;
    let heart = classify(heart_probability)?;

    let diabetes_features = assemble_diabetes(&input);
    let diabetes_probability = registry.diabetes.predict_proba(&diabetes_features)?;
    let diabetes = classify(diabetes_probability)?;

    tracing::info!(
        heart_tier = %heart.tier,
        diabetes_tier = %diabetes.tier,
        "assessment complete"
    );

    Ok(Json(AssessmentResponse {
        id: uuid::Uuid::new_v4().to_string(),
        created_at: Utc::now(),
        chart: chart_metrics(&input),
        heart_disease: heart,
        diabetes,
    }))
}

/// The four raw values the result page charts. Glucose and cholesterol are
/// halved by display-scaling convention so the bars share one axis; this is
/// not a clinical transformation.
fn chart_metrics(input: &ClinicalInput) -> Vec<ChartMetric> {
    vec![
        ChartMetric {
            label: "BMI".to_string(),
            value: input.bmi,
        },
        ChartMetric {
            label: "Glucose".to_string(),
            value: f64::from(input.glucose) / 2.0,
        },
        ChartMetric {
            label: "Cholesterol".to_string(),
            value: f64::from(input.cholesterol) / 2.0,
        },
        ChartMetric {
            label: "Sys BP".to_string(),
            value: f64::from(input.systolic_bp),
        },
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logic::model::ModelState;

    #[test]
    fn test_chart_metrics_scaling() {
        let input = ClinicalInput {
            bmi: 25.5,
            glucose: 100,
            cholesterol: 190,
            systolic_bp: 120,
            ..ClinicalInput::default()
        };
        let chart = chart_metrics(&input);

        assert_eq!(chart.len(), 4);
        assert_eq!(chart[0].label, "BMI");
        assert_eq!(chart[0].value, 25.5);
        assert_eq!(chart[1].label, "Glucose");
        assert_eq!(chart[1].value, 50.0);
        assert_eq!(chart[2].label, "Cholesterol");
        assert_eq!(chart[2].value, 95.0);
        assert_eq!(chart[3].label, "Sys BP");
        assert_eq!(chart[3].value, 120.0);
    }

    #[test]
    fn test_submit_rejects_out_of_range_input() {
        let state = AppState {
            models: ModelState::unavailable("unused"),
            config: Config::default(),
        };
        let input = ClinicalInput {
            age: 150,
            ..ClinicalInput::default()
        };

        let result = tokio_test::block_on(submit(State(state), Json(input)));
        // Validation runs before the registry check, so the 400 wins even in
        // degraded mode.
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_submit_degraded_returns_unavailable_with_reason() {
        let state = AppState {
            models: ModelState::unavailable("model assets not found"),
            config: Config::default(),
        };

        let result = tokio_test::block_on(submit(State(state), Json(ClinicalInput::default())));
        match result {
            Err(AppError::ModelUnavailable(reason)) => {
                assert_eq!(reason, "model assets not found");
            }
            other => panic!("expected ModelUnavailable, got {:?}", other.map(|_| ())),
        }
    }
}
