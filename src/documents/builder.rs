use std::path::Path;

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::base::{LineIndex, Span};
use crate::graph::{DefinitionId, DocumentId, Graph, Owner, ReferenceId, Resolution, ScopeId, SymbolType};
use crate::parser::JsonNode;

/// Attaches definitions and references to one document while it is built.
///
/// Text ranges from the parsed tree are converted to line/column spans using
/// the document's own line index.
pub struct DocumentBuilder<'g> {
    graph: &'g mut Graph,
    document: DocumentId,
    index: LineIndex,
}

impl<'g> DocumentBuilder<'g> {
    pub fn new(graph: &'g mut Graph, document: DocumentId, text: &str) -> Self {
        Self {
            graph,
            document,
            index: LineIndex::new(text),
        }
    }

    pub fn graph(&mut self) -> &mut Graph {
        self.graph
    }

    pub fn document(&self) -> DocumentId {
        self.document
    }

    pub fn path(&self) -> Option<&Path> {
        self.graph.document(self.document).map(|d| d.path())
    }

    /// Scope the document's top-level definitions declare into
    pub fn document_scope(&self) -> ScopeId {
        self.graph
            .document(self.document)
            .map(|d| d.scope)
            .unwrap_or_else(|| self.graph.root_scope())
    }

    /// Nested scope of `definition`
    pub fn scope_of(&self, definition: DefinitionId) -> Option<ScopeId> {
        self.graph.definition(definition).map(|d| d.scope)
    }

    pub fn root_scope(&self) -> ScopeId {
        self.graph.root_scope()
    }

    pub fn span(&self, range: TextRange) -> Span {
        self.index.span(range)
    }

    /// Declare the property's key as a symbol of `symbol_type` in `scope`.
    ///
    /// The definition spans the whole property; its identifier covers the
    /// key without quotes.
    pub fn define(
        &mut self,
        owner: Owner,
        scope: ScopeId,
        symbol_type: SymbolType,
        property: &JsonNode,
    ) -> Option<DefinitionId> {
        let key = property.key()?;
        self.define_named(owner, scope, symbol_type, key, property.range)
    }

    /// Declare the string `name` as a symbol, with the definition covering `range`.
    pub fn define_named(
        &mut self,
        owner: Owner,
        scope: ScopeId,
        symbol_type: SymbolType,
        name: &JsonNode,
        range: TextRange,
    ) -> Option<DefinitionId> {
        let identifier = name.as_str()?;
        self.define_at(owner, scope, symbol_type, identifier, range, name.inner_range())
    }

    /// Declare `identifier` with explicit definition and identifier ranges.
    pub fn define_at(
        &mut self,
        owner: Owner,
        scope: ScopeId,
        symbol_type: SymbolType,
        identifier: &str,
        range: TextRange,
        identifier_range: TextRange,
    ) -> Option<DefinitionId> {
        let symbol = self.graph.get_or_create(scope, symbol_type, identifier)?;
        let span = self.span(range);
        let definition = self.graph.add_definition(owner, symbol, span)?;
        let identifier_span = self.span(identifier_range);
        self.graph.add_identifier(definition, identifier_span);
        Some(definition)
    }

    /// Declare a symbol that covers the whole document and has no identifier
    /// in the text.
    pub fn define_document(&mut self, symbol_type: SymbolType, identifier: &str) -> Option<DefinitionId> {
        let scope = self.document_scope();
        let symbol = self.graph.get_or_create(scope, symbol_type, identifier)?;
        let end = self.index.position(TextSize::new(u32::MAX));
        let span = Span::new(Default::default(), end);
        self.graph
            .add_definition(Owner::Document(self.document), symbol, span)
    }

    /// Reference from the string `node` (range without quotes).
    pub fn reference(
        &mut self,
        owner: Owner,
        node: &JsonNode,
        resolution: Resolution,
    ) -> Option<ReferenceId> {
        let span = self.span(node.inner_range());
        self.graph.add_reference(owner, span, resolution)
    }

    /// Reference from a string node, building the strategy from its value.
    pub fn reference_with(
        &mut self,
        owner: Owner,
        node: &JsonNode,
        resolution: impl FnOnce(SmolStr) -> Resolution,
    ) -> Option<ReferenceId> {
        let identifier = SmolStr::new(node.as_str()?);
        self.reference(owner, node, resolution(identifier))
    }
}
