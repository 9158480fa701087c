//! Go-to-definition implementation.

use std::sync::Arc;

use crate::base::{Position, Span};
use crate::graph::{DefinitionId, DocumentId, Graph, SymbolType};

use super::Location;

/// Result of a go-to-definition request.
#[derive(Clone, Debug, Default)]
pub struct GotoResult {
    /// The targets to jump to.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a result with multiple targets.
    pub fn multiple(targets: Vec<GotoTarget>) -> Self {
        Self { targets }
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A definition site to jump to.
#[derive(Clone, Debug)]
pub struct GotoTarget {
    /// Document and full range of the definition.
    pub location: Location,
    /// Range of the declared name, or the full range when it has none.
    pub selection_range: Span,
    pub name: Arc<str>,
    pub symbol_type: SymbolType,
}

impl GotoTarget {
    fn from_definition(graph: &Graph, id: DefinitionId) -> Option<Self> {
        let definition = graph.definition(id)?;
        let symbol = graph.symbol(definition.symbol)?;
        Some(Self {
            location: Location::in_document(graph, definition.document, definition.range)?,
            selection_range: definition.selection_range(graph.identifier_range(id)),
            name: Arc::from(symbol.identifier.as_str()),
            symbol_type: symbol.symbol_type,
        })
    }
}

/// Every definition of the symbol(s) referenced at `position`.
pub fn goto_definition(graph: &mut Graph, document: DocumentId, position: Position) -> GotoResult {
    let Some((_, symbols)) = super::symbols_at(graph, document, position) else {
        return GotoResult::empty();
    };

    let targets = symbols
        .iter()
        .filter_map(|&id| graph.symbol(id))
        .flat_map(|symbol| symbol.definitions.iter().copied())
        .filter_map(|definition| GotoTarget::from_definition(graph, definition))
        .collect();
    GotoResult::multiple(targets)
}
