//! HealthAI Core - Early Disease Risk Assessment Service
//!
//! One submission of patient vitals in, two risk assessments out:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       HEALTHAI CORE                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌───────────┐   ┌──────────────────────────┐ │
//! │  │  API     │   │  Feature  │   │  Model Registry          │ │
//! │  │  (Axum)  │──▶│  Assembly │──▶│  (ONNX + scaler pairs,   │ │
//! │  │          │   │           │   │   loaded at startup)     │ │
//! │  └──────────┘   └───────────┘   └────────────┬─────────────┘ │
//! │                                              ▼               │
//! │                                      ┌──────────────┐        │
//! │                                      │ Risk Tiering │        │
//! │                                      └──────────────┘        │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod api;
mod config;
pub mod constants;
mod error;
mod logic;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::model::{ModelRegistry, ModelState};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "healthai_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("{} v{} starting...", constants::APP_NAME, constants::APP_VERSION);
    tracing::info!("Model directory: {}", config.model_dir.display());

    // Load both (model, scaler) pairs before serving. A failure is surfaced
    // and the service continues degraded: up, reporting the reason, refusing
    // assessments until the assets are fixed and the process restarted.
    let models = match ModelRegistry::load(&config) {
        Ok(registry) => {
            tracing::info!("Model assets loaded");
            ModelState::ready(registry)
        }
        Err(e) => {
            tracing::error!("Error loading models: {}", e);
            tracing::warn!("Continuing in degraded mode - assessments disabled");
            ModelState::unavailable(e.to_string())
        }
    };

    // Build application state
    let state = AppState {
        models,
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub models: ModelState,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::check))
        .route("/api/v1/assess", post(api::assess::submit))
        .route("/api/v1/engine/status", get(api::engine_status::get))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
