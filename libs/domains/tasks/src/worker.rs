//! Fixed-size worker pool draining task identifiers.
//!
//! Executors share one bounded handoff channel and block on it; they exit
//! only when the channel is closed and drained. Closing happens in
//! [`WorkerPool::wait`], after the producer has finished enqueueing, so
//! every identifier handed to the pool is processed before `wait` returns.
//! An earlier design had executors exit the moment the queue was
//! momentarily empty, which could strand identifiers enqueued after that
//! instant; the closeable queue removes that race.

use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{error, info};
use uuid::Uuid;

use crate::error::{TaskError, TaskResult};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// A bounded pool of executors marking tasks completed.
pub struct WorkerPool {
    sender: mpsc::Sender<Uuid>,
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Launch exactly `worker_count` executors.
    ///
    /// Each executor blocks on the shared queue, marks received tasks
    /// completed via the service, and terminates when the queue is closed.
    /// A failure on one identifier is logged and the executor moves on;
    /// it never aborts the pool.
    pub fn start<R>(worker_count: usize, service: TaskService<R>) -> Self
    where
        R: TaskRepository + 'static,
    {
        // Capacity 1 keeps this a handoff queue: enqueue blocks until an
        // executor is about to take the identifier.
        let (sender, receiver) = mpsc::channel::<Uuid>(1);
        let receiver = Arc::new(Mutex::new(receiver));

        let handles = (0..worker_count)
            .map(|worker| {
                let receiver = Arc::clone(&receiver);
                let service = service.clone();

                tokio::spawn(async move {
                    loop {
                        let received = { receiver.lock().await.recv().await };
                        let Some(task_id) = received else {
                            // Queue closed and drained
                            break;
                        };

                        info!(worker, task_id = %task_id, "Processing task");
                        match service.complete_task(task_id).await {
                            Ok(_) => {
                                info!(worker, task_id = %task_id, "Processed task");
                            }
                            Err(e) => {
                                error!(worker, task_id = %task_id, "Cannot process task: {}", e);
                            }
                        }
                    }
                })
            })
            .collect();

        Self { sender, handles }
    }

    /// Hand one identifier to the pool.
    ///
    /// Blocks while no executor is ready to receive. Fails only if every
    /// executor has died, which a healthy pool never does before
    /// [`WorkerPool::wait`].
    pub async fn enqueue(&self, task_id: Uuid) -> TaskResult<()> {
        self.sender.send(task_id).await.map_err(|_| {
            TaskError::Internal("worker pool is no longer accepting work".to_string())
        })
    }

    /// Close the queue and block until every executor has terminated.
    ///
    /// Call after the last [`WorkerPool::enqueue`]; all identifiers
    /// enqueued before this point are processed before it returns.
    pub async fn wait(self) {
        drop(self.sender);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("worker task failed to join: {}", e);
            }
        }
    }
}
