/// Crate-wide result alias.
pub type PathcostResult<T> = Result<T, PathcostError>;

/// Errors raised while estimating path lengths.
///
/// None of these reach the caller of [`crate::PathEstimator`]; they are converted into degraded
/// output at the lowest level that can absorb them.
#[derive(thiserror::Error, Debug)]
pub enum PathcostError {
    /// The markup could not be parsed as an XML document.
    #[error("parse error: {0}")]
    Parse(String),

    /// A single path's drawing-command string is absent or malformed.
    #[error("path data error at index {index}: {reason}")]
    PathData {
        /// Document-order index of the offending path.
        index: usize,
        /// Human-readable cause.
        reason: String,
    },

    /// A background worker could not be created.
    #[error("provision error: {0}")]
    Provision(String),

    /// A background worker failed after it was started.
    #[error("worker error: {0}")]
    Worker(String),

    /// Options were rejected.
    #[error("validation error: {0}")]
    Validation(String),

    /// Options or output could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PathcostError {
    /// Build a [`PathcostError::Parse`].
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`PathcostError::PathData`].
    pub fn path_data(index: usize, reason: impl Into<String>) -> Self {
        Self::PathData {
            index,
            reason: reason.into(),
        }
    }

    /// Build a [`PathcostError::Provision`].
    pub fn provision(msg: impl Into<String>) -> Self {
        Self::Provision(msg.into())
    }

    /// Build a [`PathcostError::Worker`].
    pub fn worker(msg: impl Into<String>) -> Self {
        Self::Worker(msg.into())
    }

    /// Build a [`PathcostError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PathcostError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
