//! Informational GET endpoints.
//!
//! - `/`        : welcome message + endpoint list
//! - `/version` : application version and build metadata
//! - `/health`  : liveness flag
//! - `/info`    : project description
//! - `/status`  : listener port and process stats
//!
//! Handlers are stateless: each response is composed from `AppState` (read
//! only) plus values sampled at request time.

use axum::{extract::State, http::Uri, Json};

use nexus_core::error::NexusError;
use nexus_core::payload::{
    HealthResponse, HomeResponse, InfoResponse, StatusResponse, VersionResponse,
};
use nexus_core::runtime;

use crate::{app_state::AppState, error::HttpError, router::ENDPOINTS};

const STATUS_RUNNING: &str = "running";
const HEALTH_UP: &str = "UP";
const UPTIME_NOTE: &str = "Application is running";

pub async fn home(State(state): State<AppState>) -> Json<HomeResponse> {
    tracing::debug!("home");
    Json(HomeResponse {
        message: format!("Welcome to {}!", state.cfg().app.name),
        status: STATUS_RUNNING.to_string(),
        timestamp: runtime::now_timestamp(),
        endpoints: ENDPOINTS.iter().map(|p| p.to_string()).collect(),
    })
}

pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    tracing::debug!("version");
    let app = &state.cfg().app;
    Json(VersionResponse {
        application: app.name.clone(),
        version: app.version.clone(),
        build_time: state.build_time().to_string(),
        runtime_version: state.runtime_version().to_string(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    tracing::debug!("health");
    Json(HealthResponse {
        status: HEALTH_UP.to_string(),
        application: state.cfg().app.name.clone(),
        timestamp: runtime::now_timestamp(),
        uptime: UPTIME_NOTE.to_string(),
    })
}

pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    tracing::debug!("info");
    let app = &state.cfg().app;
    Json(InfoResponse {
        project: app.project.clone(),
        description: app.description.clone(),
        framework: app.framework.clone(),
        packaging: app.packaging.clone(),
        features: app.features.clone(),
    })
}

pub async fn status(State(state): State<AppState>) -> Result<Json<StatusResponse>, HttpError> {
    // sysinfo reads /proc synchronously
    let memory_mb = tokio::task::spawn_blocking(runtime::process_memory_mb)
        .await
        .map_err(|e| NexusError::Internal(format!("memory probe task failed: {e}")))?
        .inspect_err(|e| tracing::warn!(error = %e, "process memory probe failed"))?;
    let processors = runtime::logical_processors();
    tracing::debug!(memory_mb, processors, "status");

    Ok(Json(StatusResponse {
        server: state.cfg().server.label.clone(),
        port: state.port(),
        status: STATUS_RUNNING.to_string(),
        memory: runtime::format_memory(memory_mb),
        processors,
    }))
}

/// Router fallback for unknown paths.
pub async fn not_found(uri: Uri) -> HttpError {
    tracing::debug!(path = %uri.path(), "no route");
    NexusError::NotFound(uri.path().to_string()).into()
}
