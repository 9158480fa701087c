//! Rename implementation.

use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::base::{Position, SeqExt, Span};
use crate::graph::{DocumentId, Graph};

use super::references::references_to;

/// Replace `range` with `new_text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Span,
    pub new_text: String,
}

/// Edits for several documents, applied together or not at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkspaceEdit {
    /// Per document, ordered by position and non-overlapping.
    pub changes: IndexMap<PathBuf, Vec<TextEdit>>,
}

impl WorkspaceEdit {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Total number of edits across all documents
    pub fn edit_count(&self) -> usize {
        self.changes.values().map(Vec::len).sum()
    }
}

/// Rename the symbol(s) at `position` to `new_name`.
///
/// Returns `None` when nothing resolvable is under the cursor, or when the
/// edits for some document would overlap.
pub fn rename(
    graph: &mut Graph,
    document: DocumentId,
    position: Position,
    new_name: &str,
) -> Option<WorkspaceEdit> {
    graph.ensure_all_resolved();
    let (_, symbols) = super::symbols_at(graph, document, position)?;
    if symbols.is_empty() {
        return None;
    }

    let grouped = references_to(graph, &symbols)
        .into_iter()
        .filter_map(|id| graph.reference(id))
        .filter_map(|r| Some((graph.document(r.document)?.path().to_path_buf(), r.range)))
        .group_by_key(|(path, _)| path.clone());

    let mut edit = WorkspaceEdit::default();
    for (path, ranges) in grouped {
        let mut ranges: Vec<Span> = ranges.into_iter().map(|(_, range)| range).collect();
        ranges.sort_by_key(|range| (range.start, range.end));
        ranges.dedup();

        if let Some(pair) = ranges.windows(2).find(|pair| pair[0].overlaps(&pair[1])) {
            warn!(
                "[RENAME] overlapping edits in {} at {:?} and {:?}, rename abandoned",
                path.display(),
                pair[0],
                pair[1]
            );
            return None;
        }

        let edits = ranges
            .into_iter()
            .map(|range| TextEdit {
                range,
                new_text: new_name.to_string(),
            })
            .collect();
        edit.changes.insert(path, edits);
    }

    debug!(
        "[RENAME] {} edit(s) across {} document(s)",
        edit.edit_count(),
        edit.changes.len()
    );
    Some(edit)
}
