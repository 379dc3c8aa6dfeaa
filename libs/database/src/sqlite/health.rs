use sea_orm::DatabaseConnection;

/// Ping the database, returning whether it answered.
///
/// Used by readiness probes; failures are reported, not propagated.
pub async fn check_health(db: &DatabaseConnection) -> bool {
    match db.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("database health check failed: {}", e);
            false
        }
    }
}
