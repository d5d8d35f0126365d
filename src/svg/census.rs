use crate::foundation::core::PathEstimate;
use crate::foundation::error::{PathcostError, PathcostResult};

/// Count of drawing-command letters in a path's `d` string.
///
/// Absolute and relative forms count equally. Implicit repeats (`L 1 1 2 2`) count once, so
/// this is a proxy for complexity, not a segment count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommandCensus {
    /// `M`/`m`.
    pub moves: usize,
    /// `L`, `H`, `V` in either case.
    pub lines: usize,
    /// `C`, `S`, `Q`, `T` in either case.
    pub curves: usize,
    /// `A`/`a`.
    pub arcs: usize,
    /// `Z`/`z`.
    pub closes: usize,
}

impl CommandCensus {
    /// Tally command letters without validating the string.
    pub fn count(d: &str) -> Self {
        let mut census = Self::default();
        for c in d.chars() {
            match c.to_ascii_uppercase() {
                'M' => census.moves += 1,
                'L' | 'H' | 'V' => census.lines += 1,
                'C' | 'S' | 'Q' | 'T' => census.curves += 1,
                'A' => census.arcs += 1,
                'Z' => census.closes += 1,
                _ => {}
            }
        }
        census
    }

    /// Validate `d` as SVG path data and tally it.
    ///
    /// `None` (attribute absent) and unparseable data are both errors for `index`.
    pub fn of_path(index: usize, d: Option<&str>) -> PathcostResult<Self> {
        let d = d.ok_or_else(|| PathcostError::path_data(index, "missing d attribute"))?;
        let d = d.trim();
        kurbo::BezPath::from_svg(d)
            .map_err(|e| PathcostError::path_data(index, format!("invalid path data: {e}")))?;
        Ok(Self::count(d))
    }

    /// Total number of drawing commands.
    pub fn total(&self) -> usize {
        self.moves + self.lines + self.curves + self.arcs + self.closes
    }

    /// Length estimate for the path at `index`.
    pub fn estimate(&self, index: usize) -> PathEstimate {
        PathEstimate::from_command_count(index, self.total())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/svg/census.rs"]
mod tests;
