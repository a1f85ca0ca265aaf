//! Destructive, last-writer-wins merge of one document into another.
//!
//! - A field in the patch overwrites the base field of the same path in place.
//! - A section in the patch is merged into the base section of the same path,
//!   never replaced wholesale.
//! - Names missing from the base are appended, in patch order, to the end of
//!   their section.
//! - When the base and patch disagree on whether a name is a field or a section,
//!   the patch node replaces the base node at the same position.
//!
//! Every inserted or overwritten node is marked [`Origin::Merged`] with the patch
//! location it came from. The patch is never modified.

use crate::tree::{Document, NodeId, Origin, SourceLocation};

/// What a merge changed in the base document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Subtrees appended because the base lacked their name.
    pub inserted: usize,
    /// Fields whose value was overwritten.
    pub overwritten: usize,
    /// Nodes replaced because the patch changed their kind.
    pub replaced: usize,
}

/// Apply `patch` on top of `base`.
pub fn merge(base: &mut Document, patch: &Document) -> MergeStats {
    let mut stats = MergeStats::default();
    let root = base.root();
    merge_section(base, root, patch, patch.root(), &mut stats);

    tracing::debug!(
        base = base.source_name(),
        patch = patch.source_name(),
        inserted = stats.inserted,
        overwritten = stats.overwritten,
        replaced = stats.replaced,
        "merged document"
    );
    stats
}

fn merge_section(
    base: &mut Document,
    target: NodeId,
    patch: &Document,
    source: NodeId,
    stats: &mut MergeStats,
) {
    let merged = |origin: &Origin| provenance(patch, origin);

    for child in patch.children(source) {
        let Some(existing) = base.child(target, child.name()) else {
            let id = base.graft(target, patch, child.id(), &merged);
            tracing::trace!(path = %base.full_path(id), "inserted");
            stats.inserted += 1;
            continue;
        };

        match (base.node(existing).is_section(), child.is_section()) {
            (true, true) => merge_section(base, existing, patch, child.id(), stats),
            (false, false) => {
                base.overwrite_field(existing, patch, child.id(), merged(child.origin()));
                tracing::trace!(path = %base.full_path(existing), "overwrote field");
                stats.overwritten += 1;
            }
            _ => {
                let id = base.replace_with_copy(existing, patch, child.id(), &merged);
                tracing::trace!(path = %base.full_path(id), "replaced node of different kind");
                stats.replaced += 1;
            }
        }
    }
}

/// Origin recorded on base nodes that take their content from the patch.
fn provenance(patch: &Document, origin: &Origin) -> Origin {
    let from = match origin {
        Origin::Parsed(position) => Some(SourceLocation {
            source_name: patch.source_name().to_owned(),
            position: *position,
        }),
        Origin::Merged(from) => from.clone(),
        Origin::Synthetic => None,
    };
    Origin::Merged(from)
}
