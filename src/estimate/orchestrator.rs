use std::time::Duration;

use crate::estimate::background::estimate_background;
use crate::estimate::inline::estimate_inline;
use crate::foundation::core::PathEstimate;
use crate::foundation::error::{PathcostError, PathcostResult};
use crate::worker::thread::ThreadHost;
use crate::worker::{Worker, WorkerEvent, WorkerHost};

/// Options controlling [`PathEstimator`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimatorOpts {
    /// Use a background worker when the host supports one. `false` always estimates inline.
    pub background: bool,
    /// Give up on a silent worker after this many milliseconds and fall back. `None` waits
    /// forever.
    pub timeout_ms: Option<u64>,
    /// Name given to worker threads.
    pub thread_name: String,
    /// Worker thread stack size in bytes. `None` uses the platform default.
    pub stack_size: Option<usize>,
}

impl Default for EstimatorOpts {
    fn default() -> Self {
        Self {
            background: true,
            timeout_ms: None,
            thread_name: "pathcost-worker".to_string(),
            stack_size: None,
        }
    }
}

impl EstimatorOpts {
    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> PathcostResult<Self> {
        let opts: Self = serde_json::from_str(s)
            .map_err(|e| PathcostError::serde(format!("invalid estimator options: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject option combinations that cannot work.
    pub fn validate(&self) -> PathcostResult<()> {
        if self.timeout_ms == Some(0) {
            return Err(PathcostError::validation(
                "'timeout_ms' must be >= 1 when set",
            ));
        }
        if self.stack_size == Some(0) {
            return Err(PathcostError::validation(
                "'stack_size' must be >= 1 when set",
            ));
        }
        if self.thread_name.trim().is_empty() {
            return Err(PathcostError::validation("'thread_name' must not be empty"));
        }
        Ok(())
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Which branch produced an estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The worker replied with census-based estimates.
    Background,
    /// Background execution was unavailable or disabled.
    FallbackUnsupported,
    /// Creating the worker failed.
    FallbackProvision,
    /// The worker failed after it was started.
    FallbackWorkerError,
    /// The worker stayed silent past the configured timeout.
    FallbackTimeout,
}

impl Resolution {
    /// `true` for every branch other than [`Resolution::Background`].
    pub fn is_fallback(self) -> bool {
        self != Self::Background
    }
}

/// Estimates SVG path lengths off the caller's thread when possible.
///
/// Never fails: every internal failure degrades to the inline estimate.
pub struct PathEstimator {
    opts: EstimatorOpts,
    host: Box<dyn WorkerHost>,
}

impl std::fmt::Debug for PathEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathEstimator")
            .field("opts", &self.opts)
            .field("host_supported", &self.host.is_supported())
            .finish()
    }
}

impl PathEstimator {
    /// Estimator backed by OS threads.
    pub fn new(opts: EstimatorOpts) -> PathcostResult<Self> {
        let host = ThreadHost::new(opts.thread_name.clone(), opts.stack_size);
        Self::with_host(opts, Box::new(host))
    }

    /// Estimator using a caller-provided host.
    pub fn with_host(opts: EstimatorOpts, host: Box<dyn WorkerHost>) -> PathcostResult<Self> {
        opts.validate()?;
        Ok(Self { opts, host })
    }

    /// Options in effect.
    pub fn opts(&self) -> &EstimatorOpts {
        &self.opts
    }

    /// Start estimating `markup`.
    ///
    /// Provisioning and dispatch happen here; when no worker can be used, the inline estimate
    /// is computed right away. Call [`PendingEstimate::wait`] for the result.
    #[tracing::instrument(level = "debug", skip_all, fields(markup_len = markup.len()))]
    pub fn estimate(&self, markup: &str) -> PendingEstimate {
        if !self.opts.background || !self.host.is_supported() {
            tracing::debug!("background execution unavailable, estimating inline");
            return PendingEstimate::settled(markup, Resolution::FallbackUnsupported);
        }

        let mut worker = match self.host.spawn(estimate_background) {
            Ok(w) => w,
            Err(e) => {
                tracing::warn!(error = %e, "worker provisioning failed, estimating inline");
                return PendingEstimate::settled(markup, Resolution::FallbackProvision);
            }
        };

        if let Err(e) = worker.post(markup.to_owned()) {
            tracing::warn!(error = %e, "worker rejected input, estimating inline");
            worker.terminate();
            return PendingEstimate::settled(markup, Resolution::FallbackWorkerError);
        }

        PendingEstimate {
            state: Pending::Running {
                worker,
                markup: markup.to_owned(),
                timeout: self.opts.timeout(),
            },
        }
    }

    /// [`PathEstimator::estimate`] followed by [`PendingEstimate::wait`].
    pub fn estimate_blocking(&self, markup: &str) -> Vec<PathEstimate> {
        self.estimate(markup).wait()
    }
}

/// An estimate that resolves exactly once, when [`PendingEstimate::wait`] consumes it.
pub struct PendingEstimate {
    state: Pending,
}

enum Pending {
    Settled {
        estimates: Vec<PathEstimate>,
        resolution: Resolution,
    },
    Running {
        worker: Box<dyn Worker>,
        markup: String,
        timeout: Option<Duration>,
    },
}

impl std::fmt::Debug for PendingEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            Pending::Settled { resolution, .. } => f
                .debug_struct("PendingEstimate")
                .field("settled", resolution)
                .finish(),
            Pending::Running { timeout, .. } => f
                .debug_struct("PendingEstimate")
                .field("running_timeout", timeout)
                .finish(),
        }
    }
}

impl PendingEstimate {
    fn settled(markup: &str, resolution: Resolution) -> Self {
        Self {
            state: Pending::Settled {
                estimates: inline_or_empty(markup),
                resolution,
            },
        }
    }

    /// Block until the estimate resolves.
    pub fn wait(self) -> Vec<PathEstimate> {
        self.wait_with_resolution().0
    }

    /// Block until the estimate resolves, also reporting which branch produced it.
    ///
    /// The worker, if any, is terminated before this returns, whatever the outcome.
    pub fn wait_with_resolution(self) -> (Vec<PathEstimate>, Resolution) {
        match self.state {
            Pending::Settled {
                estimates,
                resolution,
            } => (estimates, resolution),
            Pending::Running {
                mut worker,
                markup,
                timeout,
            } => {
                let event = worker.recv(timeout);
                worker.terminate();
                match event {
                    Some(WorkerEvent::Message(estimates)) => {
                        tracing::debug!(paths = estimates.len(), "worker replied");
                        (estimates, Resolution::Background)
                    }
                    Some(WorkerEvent::Error(msg)) => {
                        tracing::warn!(error = %msg, "worker failed, estimating inline");
                        (inline_or_empty(&markup), Resolution::FallbackWorkerError)
                    }
                    None => {
                        tracing::warn!(?timeout, "worker timed out, estimating inline");
                        (inline_or_empty(&markup), Resolution::FallbackTimeout)
                    }
                }
            }
        }
    }
}

// Markup that not even the inline path can parse counts as having no paths.
fn inline_or_empty(markup: &str) -> Vec<PathEstimate> {
    estimate_inline(markup).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "inline estimate failed, returning no paths");
        Vec::new()
    })
}

#[cfg(test)]
#[path = "../../tests/unit/estimate/orchestrator.rs"]
mod tests;
