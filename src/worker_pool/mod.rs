//! Bounded fan-out for batches of independent external lookups.
//!
//! Workers pull the next unclaimed index from a shared cursor instead of
//! taking a fixed chunk, so one slow item never stalls an otherwise idle
//! worker. Each item races its own timeout; a failure or timeout fills that
//! item's slot and the worker moves on.

use futures::future::join_all;
use log::warn;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

/// Per-item failure captured as a value; `run` itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TaskError {
    #[error("Task failed: {0}")]
    Failed(String),
    #[error("Task timed out after {0:?}")]
    TimedOut(Duration),
}

pub type TaskResult<R> = std::result::Result<R, TaskError>;

pub struct WorkerPool {
    max_concurrency: usize,
    per_item_timeout: Duration,
}

impl WorkerPool {
    pub fn new(max_concurrency: usize, per_item_timeout: Duration) -> Self {
        WorkerPool {
            max_concurrency: max_concurrency.max(1),
            per_item_timeout,
        }
    }

    /// Runs `task` over every item with at most `max_concurrency` in flight.
    /// The returned vector is positionally aligned with `items`, regardless
    /// of completion order. A timed-out task is abandoned, not cancelled
    /// mid-flight; its slot reports the timeout and its worker moves on.
    pub async fn run<T, R, E, F, Fut>(&self, items: &[T], task: F) -> Vec<TaskResult<R>>
    where
        T: Clone,
        E: std::fmt::Display,
        F: Fn(T, usize) -> Fut,
        Fut: Future<Output = std::result::Result<R, E>>,
    {
        let cursor = AtomicUsize::new(0);
        let worker_count = self.max_concurrency.min(items.len());

        let workers = (0..worker_count).map(|_| {
            let cursor = &cursor;
            let task = &task;
            async move {
                let mut completed: Vec<(usize, TaskResult<R>)> = Vec::new();
                loop {
                    let index = cursor.fetch_add(1, Ordering::SeqCst);
                    if index >= items.len() {
                        break;
                    }

                    let result =
                        match timeout(self.per_item_timeout, task(items[index].clone(), index))
                            .await
                        {
                            Ok(Ok(value)) => Ok(value),
                            Ok(Err(e)) => Err(TaskError::Failed(e.to_string())),
                            Err(_) => Err(TaskError::TimedOut(self.per_item_timeout)),
                        };

                    if let Err(e) = &result {
                        warn!("Worker pool item {} failed: {}", index, e);
                    }

                    completed.push((index, result));
                }
                completed
            }
        });

        let mut slots: Vec<Option<TaskResult<R>>> = Vec::new();
        slots.resize_with(items.len(), || None);

        for completed in join_all(workers).await {
            for (index, result) in completed {
                slots[index] = Some(result);
            }
        }

        // Every index is claimed exactly once by the cursor.
        slots
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| Err(TaskError::Failed("task result missing".to_string())))
            })
            .collect()
    }
}
