//! Builder-pattern printer for rendering a diagnostic against its source.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use text_size::TextRange;

use super::Diagnostic;

/// Renders a [`Diagnostic`] as an annotated snippet, or as a single line without source.
pub struct DiagnosticPrinter<'d, 's> {
    diagnostic: &'d Diagnostic,
    source: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticPrinter<'d, 's> {
    pub fn new(diagnostic: &'d Diagnostic) -> Self {
        Self {
            diagnostic,
            source: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return write!(w, "{}", self.diagnostic);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let diag = self.diagnostic;
        let mut snippet = Snippet::source(source)
            .line_start(1)
            .path(diag.source_name())
            .annotation(
                AnnotationKind::Primary
                    .span(adjust_range(diag.range(), source.len()))
                    .label(diag.message()),
            );

        for related in diag.related() {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(adjust_range(related.position.range, source.len()))
                    .label(&related.message),
            );
        }

        let mut report: Vec<Group> = vec![Level::ERROR.primary_title(diag.message()).element(snippet)];
        if let Some(hint) = diag.hint() {
            report.push(Group::with_title(Level::HELP.secondary_title(hint)));
        }

        write!(w, "{}", renderer.render(&report))
    }
}

/// Empty ranges (EOF) are widened to one character so the caret has something to point at.
fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
