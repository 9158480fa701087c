//! Symbol listing for workspace and document views.

use std::sync::Arc;

use crate::base::Span;
use crate::graph::{DefinitionId, DocumentId, Graph, Owner, SymbolType};

use super::Location;

/// A node of the document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSymbol {
    /// Identifier of the defined symbol.
    pub name: Arc<str>,
    /// Machine name of the symbol type.
    pub kind: &'static str,
    /// Full range of the definition.
    pub range: Span,
    /// Range of the name, if it lies inside `range`.
    pub selection_range: Span,
    pub children: Vec<DocumentSymbol>,
}

/// A declared symbol for the workspace symbol list.
#[derive(Clone, Debug)]
pub struct SymbolInfo {
    pub name: Arc<str>,
    pub symbol_type: SymbolType,
    /// First definition site
    pub location: Location,
}

/// Outline of `document`, mirroring its definition tree.
pub fn document_symbols(graph: &Graph, document: DocumentId) -> Vec<DocumentSymbol> {
    outline(graph, Owner::Document(document))
}

fn outline(graph: &Graph, owner: Owner) -> Vec<DocumentSymbol> {
    let Some(children) = graph.children(owner) else {
        return Vec::new();
    };
    children
        .definitions
        .iter()
        .filter_map(|&id| outline_node(graph, id))
        .collect()
}

fn outline_node(graph: &Graph, id: DefinitionId) -> Option<DocumentSymbol> {
    let definition = graph.definition(id)?;
    let symbol = graph.symbol(definition.symbol)?;
    Some(DocumentSymbol {
        name: Arc::from(symbol.identifier.as_str()),
        kind: symbol.symbol_type.name(),
        range: definition.range,
        selection_range: definition.selection_range(graph.identifier_range(id)),
        children: outline(graph, Owner::Definition(id)),
    })
}

/// Get all declared symbols, optionally filtered by a query.
///
/// The query is a case-insensitive substring match on the identifier.
/// Results are sorted by name.
pub fn workspace_symbols(graph: &Graph, query: Option<&str>) -> Vec<SymbolInfo> {
    let query_lower = query.map(str::to_lowercase);

    let mut results: Vec<SymbolInfo> = graph
        .symbols()
        .filter(|(_, symbol)| symbol.is_declared())
        .filter(|(_, symbol)| match &query_lower {
            Some(q) => symbol.identifier.to_lowercase().contains(q.as_str()),
            None => true,
        })
        .filter_map(|(_, symbol)| {
            let first = symbol.definitions.first()?;
            let definition = graph.definition(*first)?;
            Some(SymbolInfo {
                name: Arc::from(symbol.identifier.as_str()),
                symbol_type: symbol.symbol_type,
                location: Location::in_document(graph, definition.document, definition.range)?,
            })
        })
        .collect();

    results.sort_by(|a, b| a.name.cmp(&b.name));
    results
}
