//! Hand-written parsers for the reference syntaxes found in documentation.

pub mod citation;
pub mod link;

pub use citation::{parse_citation, parse_line_spec, Citation, CitationError};
pub use link::{classify, scan_links, Link, LinkTarget};
