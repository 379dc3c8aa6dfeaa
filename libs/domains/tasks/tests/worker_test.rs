//! Worker pool tests
//!
//! The pool uses a closeable queue with blocking receives, so every
//! identifier enqueued before `wait()` must be processed.

use domain_tasks::{
    CreateTask, SqliteTaskRepository, TaskService, TaskStatus, WorkerPool,
};
use test_utils::TestDatabase;
use uuid::Uuid;

fn create_input(name: &str) -> CreateTask {
    CreateTask {
        id: None,
        name: name.to_string(),
        description: String::new(),
        status: TaskStatus::Pending,
    }
}

async fn seed_pending(
    service: &TaskService<SqliteTaskRepository>,
    count: usize,
) -> Vec<Uuid> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let task = service
            .create_task(create_input(&format!("job-{}", i)))
            .await
            .unwrap();
        ids.push(task.id);
    }
    ids
}

#[tokio::test]
async fn test_pool_completes_all_enqueued_tasks() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(SqliteTaskRepository::new(db.connection()));

    let ids = seed_pending(&service, 5).await;

    let pool = WorkerPool::start(5, service.clone());
    for id in &ids {
        pool.enqueue(*id).await.unwrap();
    }
    pool.wait().await;

    for id in ids {
        let task = service.get_task(id).await.unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
    }
    assert!(service.pending_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_pool_with_fewer_workers_than_tasks() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(SqliteTaskRepository::new(db.connection()));

    let ids = seed_pending(&service, 8).await;

    let pool = WorkerPool::start(2, service.clone());
    for id in &ids {
        pool.enqueue(*id).await.unwrap();
    }
    pool.wait().await;

    assert!(service.pending_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_task_does_not_abort_the_pool() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(SqliteTaskRepository::new(db.connection()));

    let ids = seed_pending(&service, 2).await;

    let pool = WorkerPool::start(3, service.clone());
    pool.enqueue(ids[0]).await.unwrap();
    // An identifier with no backing row fails inside its executor
    pool.enqueue(Uuid::new_v4()).await.unwrap();
    pool.enqueue(ids[1]).await.unwrap();
    pool.wait().await;

    for id in ids {
        let task = service.get_task(id).await.unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
    }
}

#[tokio::test]
async fn test_pool_with_no_work_terminates() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(SqliteTaskRepository::new(db.connection()));

    let pool = WorkerPool::start(5, service);
    // No enqueues; wait must still unblock once the queue closes
    pool.wait().await;
}

#[tokio::test]
async fn test_drain_pending_like_the_cli_process_command() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(SqliteTaskRepository::new(db.connection()));

    seed_pending(&service, 5).await;
    // One task is already completed and must not be re-queued
    let done = service.create_task(create_input("already-done")).await.unwrap();
    service.complete_task(done.id).await.unwrap();

    let pending = service.pending_tasks().await.unwrap();
    assert_eq!(pending.len(), 5);

    let pool = WorkerPool::start(5, service.clone());
    for task in pending {
        pool.enqueue(task.id).await.unwrap();
    }
    pool.wait().await;

    assert!(service.pending_tasks().await.unwrap().is_empty());
    assert_eq!(service.list_tasks().await.unwrap().len(), 6);
}
