//! Liveness endpoint.

use axum::{routing::get, Json, Router};
use core_config::AppInfo;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// Router exposing `GET /health`: process is up, with app name/version.
///
/// Readiness (store reachability) is intentionally not probed here; a
/// request that needs the store will surface its failure itself.
pub fn health_router(app: AppInfo) -> Router {
    Router::new().route(
        "/health",
        get(move || async move {
            Json(HealthResponse {
                status: "ok",
                name: app.name,
                version: app.version,
            })
        }),
    )
}
