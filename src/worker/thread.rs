use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use super::{Worker, WorkerEvent, WorkerHost, WorkerTask};
use crate::foundation::error::{PathcostError, PathcostResult};

/// Runs each worker on its own OS thread.
///
/// One thread per worker, no pooling: workers are created at document-load granularity.
#[derive(Clone, Debug)]
pub struct ThreadHost {
    name: String,
    stack_size: Option<usize>,
}

impl ThreadHost {
    /// Host whose threads are called `name` and get `stack_size` bytes of stack (platform
    /// default when `None`).
    pub fn new(name: impl Into<String>, stack_size: Option<usize>) -> Self {
        Self {
            name: name.into(),
            stack_size,
        }
    }
}

impl Default for ThreadHost {
    fn default() -> Self {
        Self::new("pathcost-worker", None)
    }
}

impl WorkerHost for ThreadHost {
    fn is_supported(&self) -> bool {
        true
    }

    fn spawn(&self, task: WorkerTask) -> PathcostResult<Box<dyn Worker>> {
        let (req_tx, req_rx) = mpsc::channel::<String>();
        let (evt_tx, evt_rx) = mpsc::channel::<WorkerEvent>();

        let mut builder = std::thread::Builder::new().name(self.name.clone());
        if let Some(size) = self.stack_size {
            builder = builder.stack_size(size);
        }

        let handle = builder
            .spawn(move || {
                // Serve requests until the creator drops its sender.
                while let Ok(markup) = req_rx.recv() {
                    let event = match std::panic::catch_unwind(|| task(&markup)) {
                        Ok(Ok(estimates)) => WorkerEvent::Message(estimates),
                        Ok(Err(e)) => WorkerEvent::Error(e.to_string()),
                        Err(_) => WorkerEvent::Error("worker task panicked".to_string()),
                    };
                    if evt_tx.send(event).is_err() {
                        break;
                    }
                }
            })
            .map_err(|e| PathcostError::provision(format!("failed to spawn worker thread: {e}")))?;

        tracing::trace!(name = %self.name, "worker thread spawned");
        Ok(Box::new(ThreadWorker {
            requests: Some(req_tx),
            events: evt_rx,
            handle: Some(handle),
        }))
    }
}

struct ThreadWorker {
    requests: Option<mpsc::Sender<String>>,
    events: mpsc::Receiver<WorkerEvent>,
    handle: Option<JoinHandle<()>>,
}

impl Worker for ThreadWorker {
    fn post(&mut self, markup: String) -> PathcostResult<()> {
        let Some(tx) = self.requests.as_ref() else {
            return Err(PathcostError::worker("worker is already terminated"));
        };
        tx.send(markup)
            .map_err(|_| PathcostError::worker("worker is not accepting messages"))
    }

    fn recv(&mut self, timeout: Option<Duration>) -> Option<WorkerEvent> {
        let disconnected =
            || WorkerEvent::Error("worker exited without replying".to_string());
        match timeout {
            None => Some(self.events.recv().unwrap_or_else(|_| disconnected())),
            Some(t) => match self.events.recv_timeout(t) {
                Ok(ev) => Some(ev),
                Err(mpsc::RecvTimeoutError::Timeout) => None,
                Err(mpsc::RecvTimeoutError::Disconnected) => Some(disconnected()),
            },
        }
    }

    fn terminate(&mut self) {
        // Dropping the request sender ends the serve loop once any in-flight task returns.
        drop(self.requests.take());
        if let Some(handle) = self.handle.take() {
            if handle.is_finished() {
                if handle.join().is_err() {
                    tracing::warn!("worker thread panicked outside its task");
                }
            } else {
                tracing::trace!("worker thread still busy, detaching");
            }
        }
    }
}

impl Drop for ThreadWorker {
    fn drop(&mut self) {
        self.terminate();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/worker/thread.rs"]
mod tests;
