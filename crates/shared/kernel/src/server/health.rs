use super::state::ApiState;
use axum::extract::State;
use axum::http::header;
use axum::{Json, response::IntoResponse};
use lbites_domain::constants::SYSTEM_TAG;
use serde::Serialize;
use std::sync::LazyLock;
use std::time::Instant;
use utoipa::ToSchema;

/// Health check response
#[derive(Serialize, ToSchema)]
struct HealthResponse {
    success: bool,
    /// Status
    status: &'static str,
    /// Service name
    service: String,
    /// Version
    version: &'static str,
    /// Uptime in seconds
    uptime: u64,
}

/// Root welcome response
#[derive(Serialize, ToSchema)]
struct RootResponse {
    success: bool,
    message: String,
    version: &'static str,
    environment: &'static str,
    /// Where the interactive API docs live, when enabled
    docs: Option<&'static str>,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[utoipa::path(
    get,
    path = "/health",
    responses((status = OK, description = "Healthcheck endpoint", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let body = HealthResponse {
        success: true,
        status: "healthy",
        service: state.config.app.name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        uptime: START_TIME.elapsed().as_secs(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = OK, description = "Welcome endpoint", body = RootResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn root_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let app = &state.config.app;
    let body = RootResponse {
        success: true,
        message: format!("Welcome to {} API", app.name),
        version: env!("CARGO_PKG_VERSION"),
        environment: app.environment.as_str(),
        docs: app.debug.then_some("/api/docs"),
    };

    Json(body)
}
