//! Path resolution and typed lookup.

use super::value::{FromValue, TypeError};
use super::{Document, NodeId, NodeRef};

impl Document {
    /// Resolve a `/`-separated path from the root.
    ///
    /// Fields and sections share one namespace per level, so a path names at most
    /// one node. A missing segment yields `None`; absence is not an error.
    pub fn find(&self, path: &str) -> Option<NodeRef<'_>> {
        self.find_from(self.root(), path)
    }

    /// Resolve `path` relative to `start`.
    ///
    /// Empty and `.` segments are skipped and `..` moves to the parent, so
    /// `"a//b"`, `"./a/b"` and `"a/c/../b"` all name `a/b`.
    /// Lookups are looser than source text: the parser rejects empty and `..`
    /// segments in headers and field names.
    pub fn find_from(&self, start: NodeId, path: &str) -> Option<NodeRef<'_>> {
        let mut current = start;
        for segment in path.split('/') {
            current = match segment {
                "" | "." => continue,
                ".." => self.parent(current)?,
                name => self.child(current, name)?,
            };
        }
        Some(self.node(current))
    }

    /// Typed value at `path`. `Ok(None)` when the path is absent.
    pub fn get<T: FromValue>(&self, path: &str) -> Result<Option<T>, TypeError> {
        self.find(path).map(|node| node.value::<T>()).transpose()
    }

    /// Typed value at `path`, or `default` when the path is absent. A present but
    /// malformed value is still an error.
    pub fn get_or<T: FromValue>(&self, path: &str, default: T) -> Result<T, TypeError> {
        Ok(self.get(path)?.unwrap_or(default))
    }
}
