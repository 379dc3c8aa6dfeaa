//! HTTP surface for the tasks domain.
//!
//! Stateless translators between HTTP and the service layer. Every
//! response uses the `{status, data, error}` envelope.

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Router,
};
use axum_helpers::{ApiJson, ApiResponse, UuidPath};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, TaskStatus, UpdateTask};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, get_task, create_task, update_task, delete_task),
    components(schemas(Task, CreateTask, UpdateTask, TaskStatus)),
    tags(
        (name = "tasks", description = "Task tracking operations")
    )
)]
pub struct ApiDoc;

/// Create the tasks router with the service as shared state
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let service = Arc::new(service);

    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(service)
}

/// List all tasks
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "List of tasks", body = Vec<Task>),
        (status = 500, description = "Internal server error")
    )
)]
async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
) -> TaskResult<ApiResponse<Vec<Task>>> {
    let tasks = service.list_tasks().await?;
    Ok(ApiResponse::success(StatusCode::OK, tasks))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task ID (UUID)")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 400, description = "Invalid task ID"),
        (status = 404, description = "Task not found")
    )
)]
async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
) -> TaskResult<ApiResponse<Task>> {
    let task = service.get_task(id).await?;
    Ok(ApiResponse::success(StatusCode::OK, task))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "/tasks",
    tag = "tasks",
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created successfully", body = Task),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error")
    )
)]
async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    ApiJson(input): ApiJson<CreateTask>,
) -> TaskResult<ApiResponse<Task>> {
    let task = service.create_task(input).await?;
    Ok(ApiResponse::success(StatusCode::CREATED, task))
}

/// Update a task
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task ID (UUID)")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated successfully", body = Task),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn update_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
    ApiJson(input): ApiJson<UpdateTask>,
) -> TaskResult<ApiResponse<Task>> {
    let task = service.update_task(id, input).await?;
    Ok(ApiResponse::success(StatusCode::OK, task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task ID (UUID)")
    ),
    responses(
        (status = 200, description = "Task deleted successfully", body = String),
        (status = 400, description = "Invalid task ID"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
) -> TaskResult<ApiResponse<&'static str>> {
    service.delete_task(id).await?;
    Ok(ApiResponse::success(StatusCode::OK, "Deleted successfully"))
}
