//! Grammar productions for HIT documents.
//!
//! ```text
//! document  := statement*
//! statement := field | open | close | COMMENT
//! field     := PATH '=' (STRING | NUMBER | WORD)
//! open      := '[' PATH ']'
//! close     := '[' ']' | '[' '../' ']'
//! ```
//!
//! Section headers and field names are paths relative to the current scope.
//! Opening a path that already exists reopens it instead of adding a sibling.

use crate::Error;
use crate::diagnostics::{DiagnosticKind, Position};
use crate::literal::unquote;
use crate::tree::{NodeId, Origin, ValueKind};

use super::core::{OpenSection, Parser};
use super::lexer::{Token, TokenKind};

impl<'src> Parser<'src> {
    pub(super) fn parse_document(&mut self) -> Result<(), Error> {
        loop {
            let token = self.next_token()?;
            match token.kind {
                TokenKind::Eof => return self.finish_document(token),
                TokenKind::Comment => self.comment(token),
                TokenKind::BracketOpen => self.section_header(token)?,
                kind if kind.is_word() => self.field(token)?,
                _ => {
                    return Err(self.error(
                        DiagnosticKind::ExpectedStatement,
                        token.position(),
                        token.describe(),
                    ));
                }
            }
        }
    }

    fn field(&mut self, name: Token<'src>) -> Result<(), Error> {
        let equals = self.next_token()?;
        if equals.kind != TokenKind::Equals {
            return Err(self.error(DiagnosticKind::ExpectedEquals, equals.position(), name.text));
        }

        let value = self.next_token()?;
        let (raw, kind) = match value.kind {
            TokenKind::String => (unquote(value.text), ValueKind::Quoted),
            TokenKind::Number => (value.text.to_owned(), ValueKind::Number),
            TokenKind::Identifier | TokenKind::Path => (value.text.to_owned(), ValueKind::Bare),
            _ => {
                return Err(self.error(DiagnosticKind::ExpectedValue, value.position(), name.text));
            }
        };

        let segments = self.split_path(name, false)?;
        let (leaf, intermediate) = segments
            .split_last()
            .expect("split_path returns at least one segment");
        let scope = self.descend(self.current_scope(), intermediate, name.position())?;

        if let Some(existing) = self.doc.child(scope, leaf) {
            return Err(self.conflict(existing, leaf, name.position(), true));
        }

        let position = name.position().cover(value.position());
        let id = self
            .doc
            .insert_field(scope, leaf, raw, kind, Origin::Parsed(position));
        self.attach_comments(id);
        self.last_statement = Some((id, value.end_line()));
        Ok(())
    }

    /// `[path]`, `[]` or `[../]`. A header opens one scope however many segments
    /// it has, so the matching `[]` returns to the scope before `[a/b]`.
    fn section_header(&mut self, open: Token<'src>) -> Result<(), Error> {
        let path = self.next_token()?;
        match path.kind {
            TokenKind::BracketClose => {
                return self.close_section(open.position().cover(path.position()));
            }
            kind if kind.is_word() => {}
            _ => {
                return Err(self.error(
                    DiagnosticKind::ExpectedSectionPath,
                    path.position(),
                    path.describe(),
                ));
            }
        }

        let close = self.next_token()?;
        if close.kind != TokenKind::BracketClose {
            let diagnostic = self
                .diagnostic(DiagnosticKind::UnclosedHeader, close.position())
                .with_detail(path.text)
                .related_to("section header starts here", open.position());
            return Err(Error::Parse(diagnostic));
        }

        let header = open.position().cover(close.position());
        if matches!(path.text, ".." | "../") {
            return self.close_section(header);
        }

        let segments = self.split_path(path, true)?;
        let node = self.descend(self.current_scope(), &segments, header)?;
        self.scopes.push(OpenSection { node, header });
        self.attach_comments(node);
        self.last_statement = Some((node, close.line));
        Ok(())
    }

    /// Splits a header or field path into names, dropping `.` segments.
    ///
    /// Headers may end with `/` (legacy `[./name/]` form); field paths may not.
    fn split_path(&self, token: Token<'src>, header: bool) -> Result<Vec<&'src str>, Error> {
        let text = token.text;
        let body = match text.strip_suffix('/') {
            Some(body) if header => body,
            _ => text,
        };

        let mut segments = Vec::new();
        for segment in body.split('/') {
            match segment {
                "" => {
                    return Err(self.error(
                        DiagnosticKind::InvalidPath,
                        token.position(),
                        format!("empty segment in `{text}`"),
                    ));
                }
                "." => {}
                ".." => {
                    return Err(self.error(
                        DiagnosticKind::InvalidPath,
                        token.position(),
                        format!("`..` is only allowed as the whole header `[../]`, found `{text}`"),
                    ));
                }
                name => segments.push(name),
            }
        }

        if segments.is_empty() {
            return Err(self.error(
                DiagnosticKind::InvalidPath,
                token.position(),
                format!("`{text}` does not name a node"),
            ));
        }
        Ok(segments)
    }

    /// Walks `segments` down from `scope`, reopening existing sections and creating missing ones.
    fn descend(
        &mut self,
        mut scope: NodeId,
        segments: &[&str],
        position: Position,
    ) -> Result<NodeId, Error> {
        for &segment in segments {
            scope = match self.doc.child(scope, segment) {
                Some(existing) if self.doc.node(existing).is_section() => {
                    tracing::trace!(section = %self.doc.full_path(existing), "reopened section");
                    existing
                }
                Some(existing) => return Err(self.conflict(existing, segment, position, false)),
                None => {
                    let id = self
                        .doc
                        .insert_section(scope, segment, Origin::Parsed(position));
                    if let Some(limit) = self.depth_limit()
                        && self.doc.depth(id) > limit as usize
                    {
                        return Err(self.error(
                            DiagnosticKind::NestingTooDeep,
                            position,
                            limit.to_string(),
                        ));
                    }
                    id
                }
            };
        }
        Ok(scope)
    }

    /// Error for a name already taken in its section.
    fn conflict(&self, existing: NodeId, name: &str, position: Position, is_field: bool) -> Error {
        let node = self.doc.node(existing);
        let diagnostic = match (node.is_field(), is_field) {
            (true, true) => self
                .diagnostic(DiagnosticKind::DuplicateField, position)
                .with_detail(name),
            (true, false) => self
                .diagnostic(DiagnosticKind::NameConflict, position)
                .with_detail(format!("`{name}` is already defined as a field")),
            _ => self
                .diagnostic(DiagnosticKind::NameConflict, position)
                .with_detail(format!("`{name}` is already defined as a section")),
        };
        let diagnostic = match node.position() {
            Some(first) => diagnostic.related_to("first defined here", first),
            None => diagnostic,
        };
        Error::Parse(diagnostic)
    }

    fn close_section(&mut self, position: Position) -> Result<(), Error> {
        let Some(scope) = self.scopes.pop() else {
            return Err(Error::Parse(
                self.diagnostic(DiagnosticKind::UnmatchedClose, position),
            ));
        };
        let comments = std::mem::take(&mut self.pending_comments);
        self.doc.push_trailing_comments(scope.node, comments);
        self.last_statement = None;
        Ok(())
    }

    fn finish_document(&mut self, eof: Token<'src>) -> Result<(), Error> {
        if let Some(scope) = self.scopes.last() {
            let diagnostic = self
                .diagnostic(DiagnosticKind::UnclosedSection, scope.header)
                .with_detail(self.doc.full_path(scope.node))
                .related_to("input ends here", eof.position());
            return Err(Error::Parse(diagnostic));
        }
        let comments = std::mem::take(&mut self.pending_comments);
        let root = self.doc.root();
        self.doc.push_trailing_comments(root, comments);
        Ok(())
    }

    /// A comment on the line a statement ended on is that node's inline comment;
    /// anything else waits for the next node.
    fn comment(&mut self, token: Token<'src>) {
        let text = token.text.trim_end().to_owned();
        if let Some((node, line)) = self.last_statement
            && line == token.line
            && self.doc.node(node).inline_comment().is_none()
        {
            self.doc.data_mut(node).inline_comment = Some(text);
            return;
        }
        self.pending_comments.push(text);
    }

    fn attach_comments(&mut self, id: NodeId) {
        if self.pending_comments.is_empty() {
            return;
        }
        let comments = std::mem::take(&mut self.pending_comments);
        self.doc.data_mut(id).comments.extend(comments);
    }
}
