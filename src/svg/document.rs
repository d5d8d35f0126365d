use crate::foundation::error::{PathcostError, PathcostResult};

/// A parsed SVG fragment, borrowed from the caller's markup for the duration of one call.
///
/// Empty (or whitespace-only) markup parses to a document with no paths.
#[derive(Debug)]
pub struct SvgDocument<'input> {
    doc: Option<roxmltree::Document<'input>>,
}

/// A `<path>` element as seen during enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathElement<'a> {
    /// Zero-based document-order position among all paths.
    pub index: usize,
    /// Raw `d` attribute, if present.
    pub d: Option<&'a str>,
}

impl<'input> SvgDocument<'input> {
    /// Parse `markup` as XML.
    ///
    /// Fails only when the markup is not well-formed. A well-formed document without any
    /// `<path>` (or with an unexpected root) is not an error.
    pub fn parse(markup: &'input str) -> PathcostResult<Self> {
        if markup.trim().is_empty() {
            return Ok(Self { doc: None });
        }

        // SVG files routinely carry a DOCTYPE.
        let opts = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(markup, opts)
            .map_err(|e| PathcostError::parse(format!("failed to parse svg xml: {e}")))?;
        Ok(Self { doc: Some(doc) })
    }

    /// All `<path>` elements (any namespace) in document order.
    pub fn paths(&self) -> impl Iterator<Item = PathElement<'_>> + '_ {
        self.doc
            .iter()
            .flat_map(|doc| doc.descendants())
            .filter(|n| n.is_element() && n.tag_name().name() == "path")
            .enumerate()
            .map(|(index, n)| PathElement {
                index,
                d: n.attribute("d"),
            })
    }

    /// Number of `<path>` elements.
    pub fn path_count(&self) -> usize {
        self.paths().count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/svg/document.rs"]
mod tests;
