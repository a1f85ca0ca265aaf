//! Document tree: sections and fields with their source origins.
//!
//! # Ownership
//!
//! Nodes live in a flat arena owned by [`Document`] and are referenced by [`NodeId`].
//! Each section owns the ordered name → id map of its children; the parent link is a
//! plain id used for upward navigation and path computation, never for lifetime.
//! Removing a node detaches its subtree; the arena slots stay allocated until the
//! document is dropped.
//!
//! Paths are not stored. [`Document::full_path`] walks parents on demand.

mod edit;
mod export;
mod node;
mod path;
mod printer;
mod value;


use indexmap::IndexMap;

use crate::diagnostics::Position;

pub use edit::EditError;
pub use export::{ExportedNode, export};
pub use node::{Children, Descendants, NodeRef};
pub use printer::TreePrinter;
pub use value::{FromValue, TypeError, ValueKind, ValueType};

/// Index of a node within its [`Document`].
///
/// Ids are only meaningful for the document that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Section,
    Field,
}

/// A position inside a named source, used for provenance that crosses documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub source_name: String,
    pub position: Position,
}

/// Where a node came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Origin {
    /// Written in this document's source at the given position.
    Parsed(Position),
    /// Inserted or overwritten by a merge. Carries the patch location when the
    /// patch node was itself parsed.
    Merged(Option<SourceLocation>),
    /// Created or changed through the editing API.
    #[default]
    Synthetic,
}

impl Origin {
    /// Position in this document's own source, if the node was parsed from it.
    pub fn position(&self) -> Option<Position> {
        match self {
            Origin::Parsed(position) => Some(*position),
            _ => None,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        !matches!(self, Origin::Parsed(_))
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SectionBody {
    pub(crate) children: IndexMap<String, NodeId>,
    pub(crate) trailing_comments: Vec<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct FieldBody {
    pub(crate) raw: String,
    pub(crate) kind: ValueKind,
}

#[derive(Debug, Clone)]
pub(crate) enum Body {
    Section(SectionBody),
    Field(FieldBody),
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) body: Body,
    pub(crate) origin: Origin,
    pub(crate) comments: Vec<String>,
    pub(crate) inline_comment: Option<String>,
    /// Set on the top node of a removed or replaced subtree. `parent` still
    /// points at its former parent.
    pub(crate) detached: bool,
}

impl NodeData {
    fn new(name: &str, parent: Option<NodeId>, body: Body, origin: Origin) -> Self {
        Self {
            name: name.to_owned(),
            parent,
            body,
            origin,
            comments: Vec::new(),
            inline_comment: None,
            detached: false,
        }
    }

    pub(crate) fn kind(&self) -> NodeKind {
        match self.body {
            Body::Section(_) => NodeKind::Section,
            Body::Field(_) => NodeKind::Field,
        }
    }

    pub(crate) fn is_section(&self) -> bool {
        matches!(self.body, Body::Section(_))
    }

    pub(crate) fn is_field(&self) -> bool {
        matches!(self.body, Body::Field(_))
    }

    pub(crate) fn section(&self) -> Option<&SectionBody> {
        match &self.body {
            Body::Section(section) => Some(section),
            Body::Field(_) => None,
        }
    }

    pub(crate) fn field(&self) -> Option<&FieldBody> {
        match &self.body {
            Body::Field(field) => Some(field),
            Body::Section(_) => None,
        }
    }
}

/// A parsed (or programmatically built) HIT document.
///
/// The root is an unnamed section standing for the top-level scope.
#[derive(Debug, Clone)]
pub struct Document {
    source_name: String,
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Document {
    /// Empty document: just the root section.
    pub fn new(source_name: impl Into<String>) -> Self {
        let root = NodeData::new(
            "",
            None,
            Body::Section(SectionBody::default()),
            Origin::Synthetic,
        );
        Self {
            source_name: source_name.into(),
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_node(&self) -> NodeRef<'_> {
        self.node(self.root)
    }

    /// View of a node.
    ///
    /// # Panics
    ///
    /// If `id` was issued by another document.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        assert!(id.index() < self.nodes.len(), "NodeId from another document");
        NodeRef::new(self, id)
    }

    /// `None` for the root and for the top node of a removed subtree.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let data = self.data(id);
        if data.detached { None } else { data.parent }
    }

    /// Whether `id` is still reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        std::iter::successors(Some(id), |&node| self.data(node).parent)
            .all(|node| !self.data(node).detached)
    }

    /// Immediate child of a section by exact name. Always `None` for fields.
    pub fn child(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.data(id)
            .section()
            .and_then(|section| section.children.get(name).copied())
    }

    /// Children in insertion order. Empty for fields.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children::new(self, id)
    }

    /// Pre-order walk of the subtree rooted at `id`, `id` included.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants::new(self, id)
    }

    /// `/`-joined names from below the root down to `id`. Empty for the root.
    ///
    /// A node inside a removed subtree reports the path it had when it was removed;
    /// check [`is_attached`](Self::is_attached) before resolving it again.
    pub fn full_path(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut current = id;
        while let Some(parent) = self.data(current).parent {
            names.push(self.data(current).name.as_str());
            current = parent;
        }
        names.reverse();
        names.join("/")
    }

    /// Number of ancestors below the root: 0 for the root, 1 for top-level nodes.
    /// Removed subtrees keep the depth they had when they were removed.
    pub fn depth(&self, id: NodeId) -> usize {
        std::iter::successors(self.data(id).parent, |&node| self.data(node).parent).count()
    }

    /// Nodes reachable from the root, the root itself excluded.
    pub fn node_count(&self) -> usize {
        self.descendants(self.root).count() - 1
    }

    /// Same names, kinds, child order and raw values. Positions, origins and
    /// comments are ignored.
    pub fn same_structure(&self, other: &Document) -> bool {
        self.node(self.root).same_structure(&other.node(other.root))
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    pub(crate) fn data_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.index()]
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(data);
        id
    }

    /// Appends a new node to `parent`'s children. The caller guarantees `parent` is a
    /// section and `name` is free.
    fn attach_new(&mut self, parent: NodeId, name: &str, body: Body, origin: Origin) -> NodeId {
        let id = self.alloc(NodeData::new(name, Some(parent), body, origin));
        if let Body::Section(section) = &mut self.data_mut(parent).body {
            section.children.insert(name.to_owned(), id);
        }
        id
    }

    pub(crate) fn insert_section(&mut self, parent: NodeId, name: &str, origin: Origin) -> NodeId {
        self.attach_new(parent, name, Body::Section(SectionBody::default()), origin)
    }

    pub(crate) fn insert_field(
        &mut self,
        parent: NodeId,
        name: &str,
        raw: String,
        kind: ValueKind,
        origin: Origin,
    ) -> NodeId {
        self.attach_new(parent, name, Body::Field(FieldBody { raw, kind }), origin)
    }

    pub(crate) fn push_trailing_comments(&mut self, section: NodeId, comments: Vec<String>) {
        if let Body::Section(body) = &mut self.data_mut(section).body {
            body.trailing_comments.extend(comments);
        }
    }
}
