/// Fixed addend of the command-count heuristic, so trivial paths never estimate to zero.
pub const BASE_LENGTH: u32 = 100;

/// Estimated length contributed by each drawing command.
pub const LENGTH_PER_COMMAND: u32 = 50;

/// Estimate used whenever command analysis is skipped or fails for a path.
pub const FALLBACK_LENGTH: u32 = 500;

/// Length estimate for one `<path>` element.
///
/// `index` is the zero-based document-order position of the path within a single estimation
/// call. Indices are contiguous within a call and carry no meaning across calls.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PathEstimate {
    /// Document-order position of the path.
    pub index: usize,
    /// Non-negative length estimate in user units.
    pub length: u32,
}

impl PathEstimate {
    /// Estimate derived from a command count: `count * 50 + 100`, saturating.
    pub fn from_command_count(index: usize, count: usize) -> Self {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        Self {
            index,
            length: count
                .saturating_mul(LENGTH_PER_COMMAND)
                .saturating_add(BASE_LENGTH),
        }
    }

    /// The fixed fallback estimate for `index`.
    pub fn fallback(index: usize) -> Self {
        Self {
            index,
            length: FALLBACK_LENGTH,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
