//! Canonical HIT text output.
//!
//! Sections are written as nested `[name]` ... `[]` blocks, one statement per
//! line, children indented one level deeper than their header. Parsing the output
//! yields a structurally equal tree.

use std::fmt::Write;

use crate::literal::quote;
use crate::tree::{Document, NodeId, NodeRef};

/// Renderer with configurable layout.
pub struct Renderer<'d> {
    doc: &'d Document,
    indent: usize,
    comments: bool,
}

impl<'d> Renderer<'d> {
    pub fn new(doc: &'d Document) -> Self {
        Self {
            doc,
            indent: 2,
            comments: true,
        }
    }

    /// Spaces per nesting level.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Whether attached comments are written.
    pub fn comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    /// The whole document.
    pub fn render(&self) -> String {
        self.render_node(self.doc.root())
    }

    /// A single node and its subtree, unindented. The root renders as the whole document.
    pub fn render_node(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.format(&mut out, id).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write, id: NodeId) -> std::fmt::Result {
        let node = self.doc.node(id);
        if node.is_root() {
            self.write_comments(w, node.comments(), 0)?;
            for child in node.children() {
                self.write_node(w, child, 0)?;
            }
            self.write_comments(w, node.trailing_comments(), 0)
        } else {
            self.write_node(w, node, 0)
        }
    }

    fn write_node(&self, w: &mut impl Write, node: NodeRef<'_>, depth: usize) -> std::fmt::Result {
        self.write_comments(w, node.comments(), depth)?;
        let prefix = self.prefix(depth);

        match node.raw() {
            Some(raw) => {
                write!(w, "{prefix}{} = {}", node.name(), quote(raw))?;
                self.write_inline(w, node)?;
            }
            None => {
                write!(w, "{prefix}[{}]", node.name())?;
                self.write_inline(w, node)?;
                for child in node.children() {
                    self.write_node(w, child, depth + 1)?;
                }
                self.write_comments(w, node.trailing_comments(), depth + 1)?;
                writeln!(w, "{prefix}[]")?;
            }
        }
        Ok(())
    }

    fn write_inline(&self, w: &mut impl Write, node: NodeRef<'_>) -> std::fmt::Result {
        match node.inline_comment() {
            Some(comment) if self.comments => writeln!(w, " {comment}"),
            _ => writeln!(w),
        }
    }

    fn write_comments(&self, w: &mut impl Write, comments: &[String], depth: usize) -> std::fmt::Result {
        if !self.comments {
            return Ok(());
        }
        let prefix = self.prefix(depth);
        for comment in comments {
            writeln!(w, "{prefix}{comment}")?;
        }
        Ok(())
    }

    fn prefix(&self, depth: usize) -> String {
        " ".repeat(self.indent * depth)
    }
}
