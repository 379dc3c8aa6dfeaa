use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, TaskStatus, UpdateTask};

/// Repository trait for Task persistence
///
/// Defines the data access interface for tasks. Implementations can use
/// different storage backends (SQLite today).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// Get a task by ID
    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>>;

    /// List all tasks
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// List tasks with the given status
    async fn list_by_status(&self, status: TaskStatus) -> TaskResult<Vec<Task>>;

    /// Update an existing task
    async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task>;

    /// Delete a task by ID, returning whether a row was removed
    async fn delete(&self, id: Uuid) -> TaskResult<bool>;
}
