//! HIT: hierarchical input text for simulation input decks.
//!
//! Parses HIT documents into an ordered tree of sections and fields, resolves
//! `/`-separated paths, coerces field values on demand, merges documents and
//! renders trees back to canonical text.
//!
//! # Example
//!
//! ```
//! let source = "
//! [Mesh]
//!   dim = 2
//!   nx = 10
//! []
//! ";
//!
//! let mut doc = hit_lib::parse("input.i", source).expect("valid input");
//! let patch = hit_lib::parse("cli", "[Mesh]\n nx = 20\n[]\n").expect("valid input");
//! hit_lib::merge(&mut doc, &patch);
//!
//! assert_eq!(doc.get::<i64>("Mesh/nx"), Ok(Some(20)));
//! assert!(doc.find("Mesh/ny").is_none());
//! println!("{}", hit_lib::render(&doc));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod merge;
pub mod parser;
pub mod render;
pub mod tree;

mod literal;

#[cfg(test)]
mod merge_tests;
#[cfg(test)]
mod properties_tests;
#[cfg(test)]
mod render_tests;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticPrinter, Position, Stage};
pub use literal::is_number;
pub use merge::MergeStats;
pub use parser::{ParseOptions, Parser, parse, parse_with_options};
pub use render::Renderer;
pub use tree::{
    Document, EditError, FromValue, NodeId, NodeKind, NodeRef, Origin, SourceLocation,
    TreePrinter, TypeError, ValueKind, ValueType,
};

/// Fatal failure of a parse. Either variant carries the located diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed token.
    #[error("{0}")]
    Lex(Diagnostic),

    /// Grammar violation.
    #[error("{0}")]
    Parse(Diagnostic),
}

impl Error {
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            Error::Lex(diagnostic) | Error::Parse(diagnostic) => diagnostic,
        }
    }
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Canonical text of the whole document with default layout.
pub fn render(doc: &Document) -> String {
    Renderer::new(doc).render()
}

/// Node at `path` from the root, if any.
pub fn find<'d>(doc: &'d Document, path: &str) -> Option<NodeRef<'d>> {
    doc.find(path)
}

/// Merge `patch` into `base` in place. See [`merge::merge`].
pub fn merge(base: &mut Document, patch: &Document) -> MergeStats {
    merge::merge(base, patch)
}
