use crate::foundation::core::PathEstimate;
use crate::foundation::error::PathcostResult;
use crate::svg::document::SvgDocument;

/// Assign [`crate::FALLBACK_LENGTH`] to every path in `markup`, in document order.
///
/// Runs on the caller's thread and skips command analysis. A parse failure propagates: there
/// is no cheaper estimator below this one.
pub fn estimate_inline(markup: &str) -> PathcostResult<Vec<PathEstimate>> {
    let doc = SvgDocument::parse(markup)?;
    Ok(doc.paths().map(|p| PathEstimate::fallback(p.index)).collect())
}

#[cfg(test)]
#[path = "../../tests/unit/estimate/inline.rs"]
mod tests;
