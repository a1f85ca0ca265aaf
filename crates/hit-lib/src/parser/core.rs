//! Parser state and low-level operations.

use crate::Error;
use crate::diagnostics::{Diagnostic, DiagnosticKind, Position};
use crate::tree::{Document, NodeId};

use super::lexer::{Lexer, Token};

/// Default limit on nested section levels.
pub const DEFAULT_DEPTH_LIMIT: u32 = 256;

/// Limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest allowed section level (top-level sections are level 1). `None` disables the check.
    pub depth_limit: Option<u32>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            depth_limit: Some(DEFAULT_DEPTH_LIMIT),
        }
    }
}

/// A header that is still waiting for its `[]`.
#[derive(Debug, Clone, Copy)]
pub(super) struct OpenSection {
    /// Innermost section the header opened.
    pub node: NodeId,
    pub header: Position,
}

/// Single-use parser over one source.
///
/// All parse state (open scopes, pending comments) lives here, so independent
/// parses never share anything.
pub struct Parser<'src> {
    pub(super) lexer: Lexer<'src>,
    pub(super) doc: Document,
    pub(super) scopes: Vec<OpenSection>,
    /// Comment lines waiting for the next node (or a scope close).
    pub(super) pending_comments: Vec<String>,
    /// Last node written and the line its statement ended on, for inline comments.
    pub(super) last_statement: Option<(NodeId, u32)>,
    depth_limit: Option<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(source_name: &'src str, source: &'src str) -> Self {
        Self::with_options(source_name, source, ParseOptions::default())
    }

    pub fn with_options(source_name: &'src str, source: &'src str, options: ParseOptions) -> Self {
        Self {
            lexer: Lexer::new(source_name, source),
            doc: Document::new(source_name),
            scopes: Vec::with_capacity(8),
            pending_comments: Vec::new(),
            last_statement: None,
            depth_limit: options.depth_limit,
        }
    }

    pub fn with_depth_limit(mut self, limit: Option<u32>) -> Self {
        self.depth_limit = limit;
        self
    }

    /// Parse the whole source. Either the complete tree or the first error.
    pub fn parse(mut self) -> Result<Document, Error> {
        self.parse_document()?;
        tracing::debug!(
            source = self.doc.source_name(),
            nodes = self.doc.node_count(),
            "parsed document"
        );
        Ok(self.doc)
    }

    pub(super) fn next_token(&mut self) -> Result<Token<'src>, Error> {
        match self.lexer.next() {
            Some(token) => token,
            None => Ok(self.lexer.eof()),
        }
    }

    /// Section that new statements go into.
    pub(super) fn current_scope(&self) -> NodeId {
        self.scopes
            .last()
            .map_or(self.doc.root(), |scope| scope.node)
    }

    pub(super) fn depth_limit(&self) -> Option<u32> {
        self.depth_limit
    }

    pub(super) fn diagnostic(&self, kind: DiagnosticKind, position: Position) -> Diagnostic {
        Diagnostic::new(kind, self.lexer.source_name(), position)
    }

    /// Shorthand for a parse error with a detailed message.
    pub(super) fn error(&self, kind: DiagnosticKind, position: Position, detail: impl AsRef<str>) -> Error {
        Error::Parse(self.diagnostic(kind, position).with_detail(detail))
    }
}
