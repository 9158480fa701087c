//! Find references and document highlight implementation.

use rustc_hash::FxHashSet;

use crate::base::{Position, SeqExt};
use crate::graph::{DocumentId, Graph, Owner, ReferenceId, SymbolId};

use super::Location;

/// Result of a find-references request.
#[derive(Clone, Debug, Default)]
pub struct ReferenceResult {
    /// All references found.
    pub references: Vec<ReferenceSite>,
    /// Whether declaring identifiers were included.
    pub include_declaration: bool,
}

impl ReferenceResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if any references were found.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Get the number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.references.iter().map(|r| &r.location)
    }
}

/// One usage of a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceSite {
    pub location: Location,
    /// The reference names a definition of the symbol.
    pub is_declaration: bool,
}

/// Every reference to the symbol(s) at `position`, across all documents.
///
/// Runs a full resolution pass first so that references in documents
/// loaded earlier than their target are counted.
pub fn find_references(
    graph: &mut Graph,
    document: DocumentId,
    position: Position,
    include_declaration: bool,
) -> ReferenceResult {
    graph.ensure_all_resolved();
    let Some((_, symbols)) = super::symbols_at(graph, document, position) else {
        return ReferenceResult::empty();
    };

    let declarations = declaring_references(graph, &symbols);
    let references = references_to(graph, &symbols)
        .into_iter()
        .filter(|id| include_declaration || !declarations.contains(id))
        .filter_map(|id| {
            let reference = graph.reference(id)?;
            Some(ReferenceSite {
                location: Location::in_document(graph, reference.document, reference.range)?,
                is_declaration: declarations.contains(&id),
            })
        })
        .collect();

    ReferenceResult {
        references,
        include_declaration,
    }
}

/// References inside `document` to the symbol(s) at `position`.
pub fn document_highlights(graph: &mut Graph, document: DocumentId, position: Position) -> Vec<Location> {
    graph.ensure_resolved(Owner::Document(document));
    let Some((_, symbols)) = super::symbols_at(graph, document, position) else {
        return Vec::new();
    };

    references_to(graph, &symbols)
        .into_iter()
        .filter_map(|id| graph.reference(id))
        .filter(|reference| reference.document == document)
        .filter_map(|reference| Location::in_document(graph, document, reference.range))
        .collect()
}

/// Backreferences of `symbols`, each reference once.
pub(super) fn references_to(graph: &Graph, symbols: &[SymbolId]) -> Vec<ReferenceId> {
    symbols
        .iter()
        .filter_map(|&id| graph.symbol(id))
        .flat_map(|symbol| symbol.references.iter().copied())
        .distinct()
        .collect()
}

/// Identifier references of the definitions of `symbols`
fn declaring_references(graph: &Graph, symbols: &[SymbolId]) -> FxHashSet<ReferenceId> {
    symbols
        .iter()
        .filter_map(|&id| graph.symbol(id))
        .flat_map(|symbol| symbol.definitions.iter())
        .filter_map(|&d| graph.definition(d)?.identifier)
        .collect()
}
