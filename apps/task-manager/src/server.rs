//! HTTP server assembly for the `api` subcommand.

use axum::{extract::State, routing::get, Json, Router};
use axum_helpers::{create_app, create_router, health_router};
use domain_tasks::{handlers, ApiDoc, TaskRepository, TaskService};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::info;

use crate::config::Config;

#[derive(Serialize)]
struct ReadyResponse {
    ready: bool,
    database: bool,
}

/// Readiness probe: verifies the store answers a ping.
async fn ready(State(db): State<DatabaseConnection>) -> Json<ReadyResponse> {
    let database = database::sqlite::check_health(&db).await;
    Json(ReadyResponse {
        ready: database,
        database,
    })
}

fn ready_router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready)).with_state(db)
}

/// Assemble the router, serve until shutdown, then close the store.
pub async fn serve<R>(
    config: Config,
    service: TaskService<R>,
    db: DatabaseConnection,
) -> eyre::Result<()>
where
    R: TaskRepository + 'static,
{
    let api_routes = handlers::router(service);

    let router = create_router::<ApiDoc>(api_routes)
        .merge(health_router(config.app))
        .merge(ready_router(db.clone()));

    info!(
        name = config.app.name,
        version = config.app.version,
        "Starting API on {}",
        config.server.address()
    );

    create_app(router, &config.server).await?;

    info!("Shutting down: closing database connection");
    db.close().await?;
    info!("Database connection closed");

    Ok(())
}
