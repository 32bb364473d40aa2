//! Engine status surface

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::features::LayoutInfo;
use crate::logic::status;
use crate::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub degraded: bool,
    /// Load-failure reason retained from startup, when degraded
    pub reason: Option<String>,

    pub heart: ConditionModelStatus,
    pub diabetes: ConditionModelStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionModelStatus {
    pub condition: String,
    pub loaded: bool,
    pub layout: LayoutInfo,
    pub model_path: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub inference_count: u64,
    pub avg_latency_ms: f32,
}

pub async fn get(State(state): State<AppState>) -> Json<EngineStatus> {
    Json(status::collect(&state.models))
}
