//! Test infrastructure
//!
//! Provides a `TestDatabase` helper backed by an in-memory SQLite database
//! with the workspace migrations applied, so integration tests exercise the
//! real schema without external services.

use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Test database wrapper
///
/// Each instance owns an isolated in-memory database that disappears when
/// the last connection is dropped.
pub struct TestDatabase {
    connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Pass db.connection() to your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        // A single pooled connection: SQLite's `:memory:` databases are
        // per-connection, so a larger pool would hand out empty databases.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let connection = Database::connect(options)
            .await
            .expect("Failed to connect to test database");

        Migrator::up(&connection, None)
            .await
            .expect("Failed to run migrations on test database");

        tracing::debug!("Test database ready (in-memory SQLite)");

        Self { connection }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
