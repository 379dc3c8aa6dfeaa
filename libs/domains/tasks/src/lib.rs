//! Tasks Domain
//!
//! Complete domain implementation for tracking tasks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP surface (axum), response envelope
//! └──────┬──────┘
//!        │        ┌─────────────┐
//! ┌──────▼──────┐ │ Worker Pool │  ← drains pending task ids
//! │   Service   │◄┴─────────────┘
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← data access (trait + SQLite implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← entity, DTOs, status enum
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{SqliteTaskRepository, TaskService};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite://tasks.db?mode=rwc").await?;
//!
//! let repository = SqliteTaskRepository::new(db);
//! let service = TaskService::new(repository);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;
pub mod worker;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use handlers::ApiDoc;
pub use models::{CreateTask, Task, TaskStatus, UpdateTask};
pub use repository::TaskRepository;
pub use service::TaskService;
pub use sqlite::SqliteTaskRepository;
pub use worker::WorkerPool;
