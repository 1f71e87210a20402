pub mod db;

pub mod planner;
pub mod products;
pub mod shopping;
pub mod stock;
pub mod worker_pool;

pub mod errors;
pub mod schema;

pub use stock::*;
pub use worker_pool::{TaskError, TaskResult, WorkerPool};
