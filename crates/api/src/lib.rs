//! Insurance Charges Predictor API
//!
//! HTTP front-end over the charges prediction pipeline.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod error;
pub mod format;
mod routes;

pub use self::config::{load_config, AppConfig, ArtifactConfig, LoggingConfig, ServerConfig};
pub use self::error::ApiError;
pub use self::format::format_currency;

use inference_engine::PredictionPipeline;
use input_validator::Validator;

/// Application state shared across handlers.
///
/// Everything here is read-only after startup.
pub struct AppState {
    /// Loaded scaler and model
    pub pipeline: PredictionPipeline,
    /// Input range checks
    pub validator: Validator,
    /// Artifact locations, for reporting
    pub artifacts: ArtifactConfig,
    /// Prometheus exporter, when a recorder was installed
    pub metrics: Option<PrometheusHandle>,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(pipeline: PredictionPipeline, artifacts: ArtifactConfig) -> Self {
        Self {
            pipeline,
            validator: Validator::default(),
            artifacts,
            metrics: None,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Load artifacts from the configured paths
    pub fn load(artifacts: ArtifactConfig) -> Result<Self, inference_engine::InferenceError> {
        let pipeline = PredictionPipeline::load(&artifacts.model_path, &artifacts.scaler_path)?;
        Ok(Self::new(pipeline, artifacts))
    }

    /// Attach a Prometheus handle for `/metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub feature_count: usize,
    pub artifacts: ArtifactPaths,
}

/// Loaded artifact locations
#[derive(Debug, Serialize)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/schema", get(routes::schema::get_schema))
        .route("/api/v1/predict", post(routes::predict::predict))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        feature_count: state.pipeline.schema().len(),
        artifacts: ArtifactPaths {
            model: state.artifacts.model_path.clone(),
            scaler: state.artifacts.scaler_path.clone(),
        },
    })
}

/// Prometheus text exposition
async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}

/// Initialize logging
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

/// Install the global Prometheus recorder
pub fn init_metrics() -> Result<PrometheusHandle, metrics_exporter_prometheus::BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Run the server
pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let state = AppState::load(config.artifacts)?.with_metrics(init_metrics()?);
    let app = create_router(Arc::new(state));

    info!("Starting API server on {}", config.server.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
