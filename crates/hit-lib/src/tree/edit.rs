//! Programmatic edits. Every node created or changed here is marked synthetic.

use crate::literal::is_structural;

use super::value::ValueKind;
use super::{Body, Document, FieldBody, NodeData, NodeId, Origin, SectionBody};

/// Misuse of the editing API. The tree is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("`{0}` is not a section")]
    NotASection(String),

    #[error("`{0}` is not a field")]
    NotAField(String),

    #[error("`{name}` already exists in `{parent}`")]
    DuplicateName { parent: String, name: String },

    #[error("invalid node name `{0}`")]
    InvalidName(String),

    #[error("comments must fit on one line")]
    MultilineComment,

    #[error("the root section cannot be removed")]
    RemoveRoot,

    #[error("`{0}` is not attached to the document")]
    Detached(String),
}

/// A name that the parser would read back as the same single path segment.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name
            .chars()
            .any(|c| c == '/' || c.is_whitespace() || c.is_control() || is_structural(c))
}

impl Document {
    fn display_path(&self, id: NodeId) -> String {
        if id == self.root() {
            "<root>".to_string()
        } else {
            self.full_path(id)
        }
    }

    fn check_attached(&self, id: NodeId) -> Result<(), EditError> {
        if self.is_attached(id) {
            Ok(())
        } else {
            Err(EditError::Detached(self.full_path(id)))
        }
    }

    /// Validates that `name` can be added under `parent`.
    fn check_insert(&self, parent: NodeId, name: &str) -> Result<(), EditError> {
        self.check_attached(parent)?;
        if !self.data(parent).is_section() {
            return Err(EditError::NotASection(self.display_path(parent)));
        }
        if !is_valid_name(name) {
            return Err(EditError::InvalidName(name.to_owned()));
        }
        if self.child(parent, name).is_some() {
            return Err(EditError::DuplicateName {
                parent: self.display_path(parent),
                name: name.to_owned(),
            });
        }
        Ok(())
    }

    /// Append a new empty section to `parent`.
    pub fn add_section(&mut self, parent: NodeId, name: &str) -> Result<NodeId, EditError> {
        self.check_insert(parent, name)?;
        Ok(self.insert_section(parent, name, Origin::Synthetic))
    }

    /// Append a new field to `parent`.
    pub fn add_field(
        &mut self,
        parent: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<NodeId, EditError> {
        self.check_insert(parent, name)?;
        let raw = value.into();
        let kind = ValueKind::infer(&raw);
        Ok(self.insert_field(parent, name, raw, kind, Origin::Synthetic))
    }

    /// Section at `path` below `parent`, creating missing sections along the way.
    pub fn ensure_section(&mut self, parent: NodeId, path: &str) -> Result<NodeId, EditError> {
        self.check_attached(parent)?;
        let mut current = parent;
        for segment in path.split('/').filter(|s| !s.is_empty() && *s != ".") {
            current = match self.child(current, segment) {
                Some(existing) if self.data(existing).is_section() => existing,
                Some(existing) => return Err(EditError::NotASection(self.full_path(existing))),
                None => self.add_section(current, segment)?,
            };
        }
        Ok(current)
    }

    /// Replace a field's raw value. The field keeps its place among its siblings.
    pub fn set_value(&mut self, field: NodeId, value: impl Into<String>) -> Result<(), EditError> {
        self.check_attached(field)?;
        let path = self.display_path(field);
        let data = self.data_mut(field);
        let Body::Field(body) = &mut data.body else {
            return Err(EditError::NotAField(path));
        };
        let raw = value.into();
        body.kind = ValueKind::infer(&raw);
        body.raw = raw;
        data.origin = Origin::Synthetic;
        Ok(())
    }

    /// Detach a node (and its subtree) from its parent. Ids inside the subtree
    /// stay readable but every further edit through them fails with
    /// [`EditError::Detached`].
    pub fn remove(&mut self, id: NodeId) -> Result<(), EditError> {
        if id == self.root() {
            return Err(EditError::RemoveRoot);
        }
        self.check_attached(id)?;
        let Some(parent) = self.parent(id) else {
            return Err(EditError::Detached(self.full_path(id)));
        };
        let name = self.data(id).name.clone();
        if let Body::Section(section) = &mut self.data_mut(parent).body {
            section.children.shift_remove(&name);
        }
        self.data_mut(id).detached = true;
        Ok(())
    }

    /// Attach a comment line above `id`. A leading `# ` is added when missing.
    pub fn add_comment(&mut self, id: NodeId, text: &str) -> Result<(), EditError> {
        self.check_attached(id)?;
        if text.contains(['\n', '\r']) {
            return Err(EditError::MultilineComment);
        }
        let line = if text.starts_with('#') {
            text.to_owned()
        } else {
            format!("# {text}")
        };
        self.data_mut(id).comments.push(line);
        Ok(())
    }

    /// Copy the value of `other`'s field `source` over `field`. Position among
    /// siblings and attached comments are kept.
    pub(crate) fn overwrite_field(
        &mut self,
        field: NodeId,
        other: &Document,
        source: NodeId,
        origin: Origin,
    ) {
        let Some(value) = other.data(source).field() else {
            return;
        };
        let data = self.data_mut(field);
        if let Body::Field(body) = &mut data.body {
            body.raw.clone_from(&value.raw);
            body.kind = value.kind;
            data.origin = origin;
        }
    }

    /// Copy the subtree at `node` of `other` and append it under `parent` with
    /// `origin_of` deciding each copied node's origin. The caller guarantees the
    /// name is free.
    pub(crate) fn graft(
        &mut self,
        parent: NodeId,
        other: &Document,
        node: NodeId,
        origin_of: &impl Fn(&Origin) -> Origin,
    ) -> NodeId {
        let copy = self.copy_detached(other, node, origin_of);
        let name = self.data(copy).name.clone();
        self.data_mut(copy).parent = Some(parent);
        if let Body::Section(section) = &mut self.data_mut(parent).body {
            section.children.insert(name, copy);
        }
        copy
    }

    /// Like [`graft`](Self::graft), but the copy takes the place of `existing`
    /// (same name, same position among its siblings). `existing` is detached.
    pub(crate) fn replace_with_copy(
        &mut self,
        existing: NodeId,
        other: &Document,
        node: NodeId,
        origin_of: &impl Fn(&Origin) -> Origin,
    ) -> NodeId {
        let copy = self.copy_detached(other, node, origin_of);
        let parent = self.parent(existing);
        self.data_mut(copy).parent = parent;
        if let Some(parent) = parent {
            let name = self.data(existing).name.clone();
            if let Body::Section(section) = &mut self.data_mut(parent).body
                && let Some(slot) = section.children.get_mut(&name)
            {
                *slot = copy;
            }
        }
        self.data_mut(existing).detached = true;
        copy
    }

    fn copy_detached(
        &mut self,
        other: &Document,
        node: NodeId,
        origin_of: &impl Fn(&Origin) -> Origin,
    ) -> NodeId {
        let source = other.data(node);
        let body = match &source.body {
            Body::Field(field) => Body::Field(FieldBody {
                raw: field.raw.clone(),
                kind: field.kind,
            }),
            Body::Section(section) => Body::Section(SectionBody {
                children: Default::default(),
                trailing_comments: section.trailing_comments.clone(),
            }),
        };
        let mut data = NodeData::new(&source.name, None, body, origin_of(&source.origin));
        data.comments = source.comments.clone();
        data.inline_comment = source.inline_comment.clone();
        let copy = self.alloc(data);

        let children: Vec<NodeId> = other.children(node).map(|child| child.id()).collect();
        for child in children {
            self.graft(copy, other, child, origin_of);
        }
        copy
    }
}
