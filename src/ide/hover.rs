//! Hover information implementation.

use crate::base::{Position, Span};
use crate::graph::{DocumentId, Graph, Symbol, SymbolType};

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// One text block per definition of every hovered symbol.
    pub contents: Vec<String>,
    /// Range of the hovered reference.
    pub range: Span,
}

impl HoverResult {
    /// All blocks joined as one markdown string.
    pub fn to_markdown(&self) -> String {
        self.contents.join("\n\n")
    }
}

/// Describe the symbol(s) referenced at `position`.
///
/// Declared symbols produce one `[Label] identifier (path)` line per
/// definition. A symbol without definitions, or a reference that resolves
/// to nothing, gets a single `[Label] identifier` line.
pub fn hover(graph: &mut Graph, document: DocumentId, position: Position) -> Option<HoverResult> {
    let (reference, symbols) = super::symbols_at(graph, document, position)?;
    let reference = graph.reference(reference)?;

    let mut contents: Vec<String> = symbols
        .iter()
        .filter_map(|&id| graph.symbol(id))
        .flat_map(|symbol| describe(graph, symbol))
        .collect();

    if contents.is_empty() {
        let (symbol_type, identifier) = reference.resolution.expected()?;
        contents.push(generic(symbol_type, identifier));
    }

    Some(HoverResult {
        contents,
        range: reference.range,
    })
}

fn describe(graph: &Graph, symbol: &Symbol) -> Vec<String> {
    if !symbol.is_declared() {
        return vec![generic(symbol.symbol_type, &symbol.identifier)];
    }
    symbol
        .definitions
        .iter()
        .filter_map(|&d| graph.definition(d))
        .filter_map(|d| graph.document(d.document))
        .map(|doc| {
            format!(
                "[{}] {} ({})",
                symbol.symbol_type.label(),
                symbol.identifier,
                doc.path().display()
            )
        })
        .collect()
}

fn generic(symbol_type: SymbolType, identifier: &str) -> String {
    format!("[{}] {}", symbol_type.label(), identifier)
}
