//! Position lookup.
//!
//! A node's own references are checked before descending into child
//! definitions. Among overlapping candidates the innermost range wins,
//! then declaration order.

use std::cmp::Reverse;

use tracing::trace;

use crate::base::{Position, Span};

use super::{DefinitionId, Graph, Owner, ReferenceId};

/// Ordering key for "innermost first": latest start, then earliest end,
/// among spans that contain the same position.
fn narrowness(span: Span) -> (Reverse<Position>, Position) {
    (Reverse(span.start), span.end)
}

impl Graph {
    /// The reference at `position` under `owner`, if any.
    pub fn reference_at(&self, owner: Owner, position: Position) -> Option<ReferenceId> {
        let children = self.children(owner)?;

        let direct = children
            .references
            .iter()
            .filter_map(|&id| self.references.get(id).map(|r| (id, r.range)))
            .filter(|(_, range)| range.contains(position))
            .min_by_key(|(_, range)| narrowness(*range));
        if let Some((id, _)) = direct {
            trace!("[GRAPH] reference at {:?}: {:?}", position, id);
            return Some(id);
        }

        self.containing_definitions(owner, position)
            .into_iter()
            .find_map(|definition| self.reference_at(Owner::Definition(definition), position))
    }

    /// The innermost definition whose range contains `position`.
    pub fn definition_at(&self, owner: Owner, position: Position) -> Option<DefinitionId> {
        let mut found = None;
        let mut current = owner;
        while let Some(&next) = self.containing_definitions(current, position).first() {
            found = Some(next);
            current = Owner::Definition(next);
        }
        found
    }

    /// Child definitions of `owner` containing `position`, innermost first.
    fn containing_definitions(&self, owner: Owner, position: Position) -> Vec<DefinitionId> {
        let Some(children) = self.children(owner) else {
            return Vec::new();
        };
        let mut candidates: Vec<_> = children
            .definitions
            .iter()
            .filter_map(|&id| self.definitions.get(id).map(|d| (id, d.range)))
            .filter(|(_, range)| range.contains(position))
            .collect();
        candidates.sort_by_key(|(_, range)| narrowness(*range));
        candidates.into_iter().map(|(id, _)| id).collect()
    }
}
