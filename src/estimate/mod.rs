//! Estimation paths: the background task, the inline fallback, and the orchestrator that
//! arbitrates between them.

/// Census-based estimator run inside a worker.
pub mod background;
/// Constant-per-path estimator run on the caller's thread.
pub mod inline;
/// Caller-facing entry point.
pub mod orchestrator;
