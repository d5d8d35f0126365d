/// Drawing-command census of a path's `d` attribute.
pub mod census;
/// Markup parsing and `<path>` enumeration.
pub mod document;
