//! Borrowed node views and iteration.

use crate::diagnostics::Position;

use super::value::{FromValue, TypeError, ValueKind, ValueType};
use super::{Document, NodeId, NodeKind, Origin};

/// A node together with the document it belongs to.
///
/// Cheap to copy. Every accessor reads the current tree state, so views taken
/// after an edit see the edit.
#[derive(Clone, Copy)]
pub struct NodeRef<'d> {
    doc: &'d Document,
    id: NodeId,
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("path", &self.full_path())
            .field("kind", &self.kind())
            .finish()
    }
}

impl<'d> NodeRef<'d> {
    pub(super) fn new(doc: &'d Document, id: NodeId) -> Self {
        Self { doc, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn document(&self) -> &'d Document {
        self.doc
    }

    /// Own name (last path segment). Empty for the root.
    pub fn name(&self) -> &'d str {
        &self.doc.data(self.id).name
    }

    pub fn kind(&self) -> NodeKind {
        self.doc.data(self.id).kind()
    }

    pub fn is_section(&self) -> bool {
        self.doc.data(self.id).is_section()
    }

    pub fn is_field(&self) -> bool {
        self.doc.data(self.id).is_field()
    }

    pub fn is_root(&self) -> bool {
        self.id == self.doc.root()
    }

    pub fn is_attached(&self) -> bool {
        self.doc.is_attached(self.id)
    }

    pub fn parent(&self) -> Option<NodeRef<'d>> {
        self.doc.parent(self.id).map(|id| NodeRef::new(self.doc, id))
    }

    pub fn children(&self) -> Children<'d> {
        Children::new(self.doc, self.id)
    }

    pub fn child(&self, name: &str) -> Option<NodeRef<'d>> {
        self.doc
            .child(self.id, name)
            .map(|id| NodeRef::new(self.doc, id))
    }

    /// Resolve `path` relative to this node.
    pub fn find(&self, path: &str) -> Option<NodeRef<'d>> {
        self.doc.find_from(self.id, path)
    }

    pub fn descendants(&self) -> Descendants<'d> {
        Descendants::new(self.doc, self.id)
    }

    pub fn full_path(&self) -> String {
        self.doc.full_path(self.id)
    }

    pub fn depth(&self) -> usize {
        self.doc.depth(self.id)
    }

    pub fn origin(&self) -> &'d Origin {
        &self.doc.data(self.id).origin
    }

    /// Position in the document's own source; `None` for synthetic nodes.
    pub fn position(&self) -> Option<Position> {
        self.origin().position()
    }

    pub fn line(&self) -> Option<u32> {
        self.position().map(|p| p.line)
    }

    pub fn column(&self) -> Option<u32> {
        self.position().map(|p| p.column)
    }

    pub fn is_synthetic(&self) -> bool {
        self.origin().is_synthetic()
    }

    /// Comment lines written directly above this node, `#` included.
    pub fn comments(&self) -> &'d [String] {
        &self.doc.data(self.id).comments
    }

    /// Comment written on the same line as this node.
    pub fn inline_comment(&self) -> Option<&'d str> {
        self.doc.data(self.id).inline_comment.as_deref()
    }

    /// Comments after the last child of a section, before its close.
    pub fn trailing_comments(&self) -> &'d [String] {
        self.doc
            .data(self.id)
            .section()
            .map(|section| section.trailing_comments.as_slice())
            .unwrap_or_default()
    }

    /// Raw value text of a field.
    pub fn raw(&self) -> Option<&'d str> {
        self.doc.data(self.id).field().map(|field| field.raw.as_str())
    }

    /// How a field's value was written.
    pub fn value_kind(&self) -> Option<ValueKind> {
        self.doc.data(self.id).field().map(|field| field.kind)
    }

    /// Coerce the raw value. Runs on every call, so it always reflects the current value.
    pub fn value<T: FromValue>(&self) -> Result<T, TypeError> {
        let raw = self.raw().ok_or_else(|| TypeError {
            path: self.full_path(),
            expected: T::TYPE,
            reason: "it is a section, not a field".to_string(),
        })?;
        T::from_value(raw).map_err(|reason| TypeError {
            path: self.full_path(),
            expected: T::TYPE,
            reason,
        })
    }

    /// Raw value verbatim. Fails only for sections.
    pub fn as_str(&self) -> Result<&'d str, TypeError> {
        self.raw().ok_or_else(|| TypeError {
            path: self.full_path(),
            expected: ValueType::String,
            reason: "it is a section, not a field".to_string(),
        })
    }

    pub fn as_bool(&self) -> Result<bool, TypeError> {
        self.value()
    }

    pub fn as_int(&self) -> Result<i64, TypeError> {
        self.value()
    }

    pub fn as_float(&self) -> Result<f64, TypeError> {
        self.value()
    }

    pub fn as_str_vec(&self) -> Result<Vec<String>, TypeError> {
        self.value()
    }

    pub fn as_bool_vec(&self) -> Result<Vec<bool>, TypeError> {
        self.value()
    }

    pub fn as_int_vec(&self) -> Result<Vec<i64>, TypeError> {
        self.value()
    }

    pub fn as_float_vec(&self) -> Result<Vec<f64>, TypeError> {
        self.value()
    }

    pub(super) fn same_structure(&self, other: &NodeRef<'_>) -> bool {
        if self.name() != other.name() || self.kind() != other.kind() || self.raw() != other.raw() {
            return false;
        }
        let mut ours = self.children();
        let mut theirs = other.children();
        loop {
            match (ours.next(), theirs.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a.same_structure(&b) => {}
                _ => return false,
            }
        }
    }
}

/// Lazy iterator over a section's children in insertion order.
///
/// Each call to `children()` starts from the current child list.
pub struct Children<'d> {
    doc: &'d Document,
    ids: Option<indexmap::map::Values<'d, String, NodeId>>,
}

impl<'d> Children<'d> {
    pub(super) fn new(doc: &'d Document, id: NodeId) -> Self {
        let ids = doc.data(id).section().map(|section| section.children.values());
        Self { doc, ids }
    }
}

impl<'d> Iterator for Children<'d> {
    type Item = NodeRef<'d>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = *self.ids.as_mut()?.next()?;
        Some(NodeRef::new(self.doc, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.as_ref().map_or((0, Some(0)), |ids| ids.size_hint())
    }
}

impl ExactSizeIterator for Children<'_> {}

/// Pre-order walk of a subtree.
pub struct Descendants<'d> {
    doc: &'d Document,
    stack: Vec<NodeId>,
}

impl<'d> Descendants<'d> {
    pub(super) fn new(doc: &'d Document, id: NodeId) -> Self {
        Self {
            doc,
            stack: vec![id],
        }
    }
}

impl<'d> Iterator for Descendants<'d> {
    type Item = NodeRef<'d>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        if let Some(section) = self.doc.data(id).section() {
            self.stack.extend(section.children.values().rev().copied());
        }
        Some(NodeRef::new(self.doc, id))
    }
}
