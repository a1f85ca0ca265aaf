//! Debug dump of a document tree, used by `hit ast` and snapshot tests.

use std::fmt::Write;

use super::{Document, NodeId, NodeRef, Origin};

/// Printer for a [`Document`] subtree with configurable annotations.
pub struct TreePrinter<'d> {
    doc: &'d Document,
    node: NodeId,
    positions: bool,
    comments: bool,
}

impl<'d> TreePrinter<'d> {
    pub fn new(doc: &'d Document) -> Self {
        Self {
            doc,
            node: doc.root(),
            positions: false,
            comments: false,
        }
    }

    /// Print the subtree rooted at `node` instead of the whole document.
    pub fn node(mut self, node: NodeId) -> Self {
        self.node = node;
        self
    }

    /// Annotate each node with `@line:col`, `@merged` or `@synthetic`.
    pub fn with_positions(mut self, positions: bool) -> Self {
        self.positions = positions;
        self
    }

    /// Include attached comments.
    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(w, self.doc.node(self.node), 0)
    }

    fn format_node(&self, w: &mut impl Write, node: NodeRef<'_>, indent: usize) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);

        if self.comments {
            for comment in node.comments() {
                writeln!(w, "{prefix}{comment}")?;
            }
        }

        if node.is_root() {
            write!(w, "{prefix}Root")?;
        } else if let Some(raw) = node.raw() {
            write!(w, "{prefix}Field {} = {raw:?}", node.name())?;
            if let Some(kind) = node.value_kind() {
                write!(w, " ({})", kind.as_str())?;
            }
        } else {
            write!(w, "{prefix}Section {}", node.name())?;
        }

        if self.positions {
            match node.origin() {
                Origin::Parsed(position) => write!(w, " @{position}")?,
                Origin::Merged(Some(location)) => {
                    write!(w, " @merged({}:{})", location.source_name, location.position)?
                }
                Origin::Merged(None) => write!(w, " @merged")?,
                Origin::Synthetic if node.is_root() => {}
                Origin::Synthetic => write!(w, " @synthetic")?,
            }
        }

        if self.comments
            && let Some(comment) = node.inline_comment()
        {
            write!(w, " {comment}")?;
        }
        writeln!(w)?;

        for child in node.children() {
            self.format_node(w, child, indent + 1)?;
        }

        if self.comments {
            let inner = "  ".repeat(indent + 1);
            for comment in node.trailing_comments() {
                writeln!(w, "{inner}{comment}")?;
            }
        }
        Ok(())
    }
}
