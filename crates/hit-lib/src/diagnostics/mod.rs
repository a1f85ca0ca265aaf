//! Source positions and the diagnostics carried by lex and parse failures.

mod message;
mod printer;


use text_size::TextRange;

pub use message::{DiagnosticKind, Stage};
pub use printer::DiagnosticPrinter;

/// A location in source text: 1-based line and column (in characters) plus the byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub range: TextRange,
}

impl Position {
    pub fn new(line: u32, column: u32, range: TextRange) -> Self {
        Self {
            line,
            column,
            range,
        }
    }

    /// Position covering from the start of `self` to the end of `other`.
    pub fn cover(self, other: Position) -> Self {
        Self {
            range: self.range.cover(other.range),
            ..self
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub position: Position,
    pub message: String,
}

/// A single fatal lex or parse problem, located in its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    source_name: String,
    position: Position,
    message: String,
    related: Vec<RelatedInfo>,
}

impl Diagnostic {
    /// Create a diagnostic with the kind's default message.
    pub fn new(kind: DiagnosticKind, source_name: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            source_name: source_name.into(),
            position,
            message: kind.fallback_message().to_string(),
            related: Vec::new(),
        }
    }

    /// Replace the default message with the kind's template filled with `detail`.
    pub fn with_detail(mut self, detail: impl AsRef<str>) -> Self {
        self.message = self.kind.message(Some(detail.as_ref()));
        self
    }

    pub fn related_to(mut self, message: impl Into<String>, position: Position) -> Self {
        self.related.push(RelatedInfo {
            position,
            message: message.into(),
        });
        self
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn stage(&self) -> Stage {
        self.kind.stage()
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn range(&self) -> TextRange {
        self.position.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    pub fn hint(&self) -> Option<&'static str> {
        self.kind.default_hint()
    }

    pub fn printer(&self) -> DiagnosticPrinter<'_, '_> {
        DiagnosticPrinter::new(self)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: error: {}",
            self.source_name, self.position, self.message
        )
    }
}
