use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, TaskStatus, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task with validation
    #[instrument(skip(self, input), fields(task_name = %input.name))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// List all tasks
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: Uuid) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Update a task, merging only the provided fields
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update_task(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a task
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: Uuid) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }

    /// All tasks still awaiting processing
    pub async fn pending_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list_by_status(TaskStatus::Pending).await
    }

    /// Mark a task as completed; used by the worker pool
    pub async fn complete_task(&self, id: Uuid) -> TaskResult<Task> {
        self.repository
            .update(
                id,
                UpdateTask {
                    status: Some(TaskStatus::Completed),
                    ..Default::default()
                },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTaskRepository;

    fn sample_task(status: TaskStatus) -> Task {
        Task {
            id: Uuid::new_v4(),
            name: "deploy".to_string(),
            description: "ship the release".to_string(),
            status,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_task_rejects_empty_name_before_store() {
        let mut repo = MockTaskRepository::new();
        repo.expect_create().never();

        let service = TaskService::new(repo);
        let input = CreateTask {
            id: None,
            name: String::new(),
            description: String::new(),
            status: TaskStatus::Pending,
        };

        let err = service.create_task(input).await.unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_task_passes_input_through() {
        let mut repo = MockTaskRepository::new();
        repo.expect_create()
            .withf(|input| input.name == "deploy" && input.status == TaskStatus::Pending)
            .returning(|_| Ok(sample_task(TaskStatus::Pending)));

        let service = TaskService::new(repo);
        let input = CreateTask {
            id: None,
            name: "deploy".to_string(),
            description: String::new(),
            status: TaskStatus::Pending,
        };

        let task = service.create_task(input).await.unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn test_get_task_maps_missing_to_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = TaskService::new(repo);
        let id = Uuid::new_v4();

        let err = service.get_task(id).await.unwrap_err();
        assert!(matches!(err, TaskError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_update_task_rejects_empty_name_before_store() {
        let mut repo = MockTaskRepository::new();
        repo.expect_update().never();

        let service = TaskService::new(repo);
        let input = UpdateTask {
            name: Some(String::new()),
            ..Default::default()
        };

        let err = service.update_task(Uuid::new_v4(), input).await.unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_task_maps_missing_to_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = TaskService::new(repo);

        let err = service.delete_task(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, TaskError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_complete_task_sets_only_status() {
        let mut repo = MockTaskRepository::new();
        repo.expect_update()
            .withf(|_, input| {
                input.status == Some(TaskStatus::Completed)
                    && input.name.is_none()
                    && input.description.is_none()
            })
            .returning(|_, _| Ok(sample_task(TaskStatus::Completed)));

        let service = TaskService::new(repo);

        let task = service.complete_task(Uuid::new_v4()).await.unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[tokio::test]
    async fn test_pending_tasks_queries_pending_status() {
        let mut repo = MockTaskRepository::new();
        repo.expect_list_by_status()
            .withf(|status| *status == TaskStatus::Pending)
            .returning(|_| Ok(vec![sample_task(TaskStatus::Pending)]));

        let service = TaskService::new(repo);

        let tasks = service.pending_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
    }
}
