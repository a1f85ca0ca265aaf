//! Serializable snapshot of a document tree.

use serde::Serialize;

use super::{Document, NodeRef, ValueKind};

/// Owned, serde-friendly copy of a node and its subtree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExportedNode {
    Section {
        name: String,
        path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        column: Option<u32>,
        children: Vec<ExportedNode>,
    },
    Field {
        name: String,
        path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        column: Option<u32>,
        value: String,
        value_kind: ValueKind,
    },
}

impl ExportedNode {
    pub fn name(&self) -> &str {
        match self {
            ExportedNode::Section { name, .. } | ExportedNode::Field { name, .. } => name,
        }
    }

    fn from_node(node: NodeRef<'_>) -> Self {
        let name = node.name().to_owned();
        let path = node.full_path();
        let (line, column) = (node.line(), node.column());
        match (node.raw(), node.value_kind()) {
            (Some(raw), Some(value_kind)) => ExportedNode::Field {
                name,
                path,
                line,
                column,
                value: raw.to_owned(),
                value_kind,
            },
            _ => ExportedNode::Section {
                name,
                path,
                line,
                column,
                children: node.children().map(ExportedNode::from_node).collect(),
            },
        }
    }
}

/// Export the whole document. The root becomes an unnamed section with an empty path.
pub fn export(doc: &Document) -> ExportedNode {
    ExportedNode::from_node(doc.root_node())
}
