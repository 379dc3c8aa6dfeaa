//! Database library providing the SQLite connector and shared utilities.
//!
//! Connection management, startup retry, migration running, and health
//! checks live here; entity definitions and queries belong to the domain
//! crates.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::sqlite::{self, SqliteConfig};
//!
//! let config = SqliteConfig::from_env()?;
//! let db = sqlite::connect_from_config_with_retry(config, None).await?;
//! sqlite::run_migrations::<migration::Migrator>(&db, "task-manager").await?;
//! ```

pub mod common;
pub mod sqlite;

pub use common::{retry, retry_with_backoff, RetryConfig};
