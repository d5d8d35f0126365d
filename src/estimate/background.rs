use crate::foundation::core::PathEstimate;
use crate::foundation::error::PathcostResult;
use crate::svg::census::CommandCensus;
use crate::svg::document::SvgDocument;

/// Estimate every path in `markup` from its command census.
///
/// This is the unit of work shipped to a worker. It is a plain `fn` over the markup so that it
/// captures nothing from the caller.
///
/// Only a document-level parse failure is returned as an error. A path whose `d` is absent or
/// malformed gets [`crate::FALLBACK_LENGTH`] and the batch continues.
#[tracing::instrument(level = "debug", skip(markup), fields(markup_len = markup.len()))]
pub fn estimate_background(markup: &str) -> PathcostResult<Vec<PathEstimate>> {
    let doc = SvgDocument::parse(markup)?;
    let estimates: Vec<PathEstimate> = doc
        .paths()
        .map(|p| match CommandCensus::of_path(p.index, p.d) {
            Ok(census) => census.estimate(p.index),
            Err(e) => {
                tracing::debug!(index = p.index, error = %e, "path census failed, using fallback");
                PathEstimate::fallback(p.index)
            }
        })
        .collect();
    tracing::debug!(paths = estimates.len(), "background estimate done");
    Ok(estimates)
}

#[cfg(test)]
#[path = "../../tests/unit/estimate/background.rs"]
mod tests;
