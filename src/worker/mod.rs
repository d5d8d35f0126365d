//! Background execution provisioning.
//!
//! A [`WorkerHost`] creates isolated [`Worker`]s that talk to their creator only through
//! messages: the markup goes in via [`Worker::post`], one [`WorkerEvent`] comes back.

use std::time::Duration;

use crate::foundation::core::PathEstimate;
use crate::foundation::error::{PathcostError, PathcostResult};

/// Thread-backed host.
pub mod thread;

/// Unit of work executed inside a worker. A plain function pointer, so it cannot close over
/// caller state.
pub type WorkerTask = fn(&str) -> PathcostResult<Vec<PathEstimate>>;

/// What a worker reports back to its creator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkerEvent {
    /// The task finished and produced estimates.
    Message(Vec<PathEstimate>),
    /// The task failed, panicked, or the worker went away without replying.
    Error(String),
}

/// Handle to one live worker.
///
/// Implementations must release the underlying execution context on [`Worker::terminate`] and
/// on drop. `terminate` is idempotent.
pub trait Worker: Send {
    /// Hand the worker its input.
    fn post(&mut self, markup: String) -> PathcostResult<()>;

    /// Wait for the next event. `None` means `timeout` elapsed first; `timeout: None` waits
    /// indefinitely.
    fn recv(&mut self, timeout: Option<Duration>) -> Option<WorkerEvent>;

    /// Release the worker. It must not be used afterwards.
    fn terminate(&mut self);
}

/// Environment capability to run [`WorkerTask`]s off the caller's thread.
pub trait WorkerHost: Send + Sync {
    /// Feature detection: whether this host can run workers at all.
    fn is_supported(&self) -> bool;

    /// Create a worker that will run `task` on the first posted markup.
    ///
    /// Errors here are provisioning failures; no worker exists afterwards.
    fn spawn(&self, task: WorkerTask) -> PathcostResult<Box<dyn Worker>>;
}

/// Host for environments without background execution.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoWorkerHost;

impl WorkerHost for NoWorkerHost {
    fn is_supported(&self) -> bool {
        false
    }

    fn spawn(&self, _task: WorkerTask) -> PathcostResult<Box<dyn Worker>> {
        Err(PathcostError::provision(
            "background execution is not supported by this host",
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/worker/mod.rs"]
mod tests;
