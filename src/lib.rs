//! Pathcost estimates how long each `<path>` of an SVG document is, cheaply and without blocking
//! the caller.
//!
//! The estimate is a heuristic (`commands * 50 + 100`), not a geometric length. It is computed on
//! a background worker when one is available and degrades to a flat per-path constant otherwise:
//!
//! - Build a [`PathEstimator`] (optionally from [`EstimatorOpts`])
//! - Call [`PathEstimator::estimate`] and [`PendingEstimate::wait`] for one
//!   [`PathEstimate`] per path, in document order
//!
//! Estimation never fails outward.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod estimate;
/// SVG parsing and command census.
pub mod svg;
pub mod worker;

pub use crate::foundation::core::{BASE_LENGTH, FALLBACK_LENGTH, LENGTH_PER_COMMAND, PathEstimate};
pub use crate::foundation::error::{PathcostError, PathcostResult};

pub use crate::estimate::background::estimate_background;
pub use crate::estimate::inline::estimate_inline;
pub use crate::estimate::orchestrator::{EstimatorOpts, PathEstimator, PendingEstimate, Resolution};
pub use crate::svg::census::CommandCensus;
pub use crate::worker::thread::ThreadHost;
pub use crate::worker::{NoWorkerHost, Worker, WorkerEvent, WorkerHost, WorkerTask};
