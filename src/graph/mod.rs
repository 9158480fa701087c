//! Cross-document symbol graph
//!
//! All nodes live in generation-checked arenas owned by [`Graph`]:
//!
//! ```text
//! Scope ──owns──▶ Symbol ◀──backrefs── Definition / Reference
//!   ▲                                        │
//!   └──────── nested scope ◀── Definition ◀──┤ owner
//!                                  Document ◀┘
//! ```
//!
//! Definitions and references are owned by a document or a definition.
//! Destroying an owner destroys its children first; every node removes
//! itself from its symbol's backreference sets on the way out. Symbols are
//! interned per scope and collected once nothing declares or references
//! them (see [`Graph::set_collect_orphan_symbols`]).
//!
//! Every mutation that adds or removes a definition or reference bumps the
//! graph generation, which invalidates cached reference resolutions.

mod arena;
mod integrity;
mod lookup;
mod node;
mod resolution;
mod resolve;
mod scope;
mod symbol;
mod symbol_type;

use std::path::PathBuf;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;
use tracing::trace;

use crate::base::Span;

pub use arena::{Arena, Idx};
pub use integrity::IntegrityError;
pub use node::{Children, Definition, Document, Owner, Reference};
pub use resolution::Resolution;
pub use scope::Scope;
pub use symbol::Symbol;
pub use symbol_type::{SymbolType, SymbolTypeInfo};

pub type ScopeId = Idx<Scope>;
pub type SymbolId = Idx<Symbol>;
pub type DocumentId = Idx<Document>;
pub type DefinitionId = Idx<Definition>;
pub type ReferenceId = Idx<Reference>;

pub(crate) type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// The symbol graph: scopes, symbols and the node trees of every document.
pub struct Graph {
    scopes: Arena<Scope>,
    symbols: Arena<Symbol>,
    documents: Arena<Document>,
    definitions: Arena<Definition>,
    references: Arena<Reference>,
    root_scope: ScopeId,
    generation: u64,
    /// Generation at which every independent reference was last settled
    settled: Option<u64>,
    collect_orphans: bool,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        let mut scopes = Arena::new();
        let root_scope = scopes.insert(Scope::new(None, None));
        Self {
            scopes,
            symbols: Arena::new(),
            documents: Arena::new(),
            definitions: Arena::new(),
            references: Arena::new(),
            root_scope,
            generation: 0,
            settled: None,
            collect_orphans: true,
        }
    }

    /// Whether symbols are removed once no definition or reference uses them.
    pub fn set_collect_orphan_symbols(&mut self, collect: bool) {
        self.collect_orphans = collect;
    }

    pub fn root_scope(&self) -> ScopeId {
        self.root_scope
    }

    /// Counter bumped whenever a definition or reference is added or removed
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn bump(&mut self) {
        self.generation += 1;
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id)
    }

    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn definition(&self, id: DefinitionId) -> Option<&Definition> {
        self.definitions.get(id)
    }

    pub fn reference(&self, id: ReferenceId) -> Option<&Reference> {
        self.references.get(id)
    }

    pub fn documents(&self) -> impl Iterator<Item = (DocumentId, &Document)> {
        self.documents.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols.iter()
    }

    pub fn definitions(&self) -> impl Iterator<Item = (DefinitionId, &Definition)> {
        self.definitions.iter()
    }

    pub fn references(&self) -> impl Iterator<Item = (ReferenceId, &Reference)> {
        self.references.iter()
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Children of a document or definition
    pub fn children(&self, owner: Owner) -> Option<&Children> {
        match owner {
            Owner::Document(id) => self.documents.get(id).map(|d| &d.children),
            Owner::Definition(id) => self.definitions.get(id).map(|d| &d.children),
        }
    }

    fn children_mut(&mut self, owner: Owner) -> Option<&mut Children> {
        match owner {
            Owner::Document(id) => self.documents.get_mut(id).map(|d| &mut d.children),
            Owner::Definition(id) => self.definitions.get_mut(id).map(|d| &mut d.children),
        }
    }

    /// Scope that children of `owner` declare their symbols in by default
    pub fn owner_scope(&self, owner: Owner) -> Option<ScopeId> {
        match owner {
            Owner::Document(id) => self.documents.get(id).map(|d| d.scope),
            Owner::Definition(id) => self.definitions.get(id).map(|d| d.scope),
        }
    }

    fn owner_document(&self, owner: Owner) -> Option<DocumentId> {
        match owner {
            Owner::Document(id) => self.documents.contains(id).then_some(id),
            Owner::Definition(id) => self.definitions.get(id).map(|d| d.document),
        }
    }

    /// Range of the identifier reference naming `definition`
    pub fn identifier_range(&self, definition: DefinitionId) -> Option<Span> {
        let identifier = self.definitions.get(definition)?.identifier?;
        self.references.get(identifier).map(|r| r.range)
    }

    // ---------------------------------------------------------------------
    // Symbol table
    // ---------------------------------------------------------------------

    /// Return the symbol for (type, identifier) in `scope`, creating it if needed.
    ///
    /// Returns `None` only when `scope` no longer exists.
    pub fn get_or_create(
        &mut self,
        scope: ScopeId,
        symbol_type: SymbolType,
        identifier: &str,
    ) -> Option<SymbolId> {
        let existing = self.scopes.get(scope)?.get(symbol_type, identifier);
        if let Some(id) = existing {
            return Some(id);
        }
        let name = SmolStr::new(identifier);
        let id = self
            .symbols
            .insert(Symbol::new(symbol_type, name.clone(), scope));
        if let Some(scope) = self.scopes.get_mut(scope) {
            scope.insert(symbol_type, name, id);
        }
        trace!("[GRAPH] interned {:?} {:?}", symbol_type, identifier);
        Some(id)
    }

    /// Look up (type, identifier) in `scope` without creating it
    pub fn try_get(
        &self,
        scope: ScopeId,
        symbol_type: SymbolType,
        identifier: &str,
    ) -> Option<SymbolId> {
        self.scopes.get(scope)?.get(symbol_type, identifier)
    }

    /// All symbols of `symbol_type` in `scope`, in insertion order
    pub fn get_all(
        &self,
        scope: ScopeId,
        symbol_type: SymbolType,
    ) -> impl Iterator<Item = SymbolId> + '_ {
        self.scopes
            .get(scope)
            .into_iter()
            .flat_map(move |s| s.symbols_of(symbol_type))
    }

    /// `scope` followed by each enclosing scope up to the root
    pub fn scope_chain(&self, scope: ScopeId) -> Vec<ScopeId> {
        let mut chain = Vec::new();
        let mut current = Some(scope);
        while let Some(id) = current {
            let Some(scope) = self.scopes.get(id) else {
                break;
            };
            chain.push(id);
            current = scope.parent;
        }
        chain
    }

    /// Drop a symbol that nothing declares or references any more.
    fn collect_if_orphan(&mut self, id: SymbolId) {
        if !self.collect_orphans {
            return;
        }
        let Some(symbol) = self.symbols.get(id) else {
            return;
        };
        if !symbol.is_orphan() {
            return;
        }
        self.remove_symbol(id);
    }

    fn remove_symbol(&mut self, id: SymbolId) {
        let Some(symbol) = self.symbols.remove(id) else {
            return;
        };
        if let Some(scope) = self.scopes.get_mut(symbol.scope) {
            scope.remove(symbol.symbol_type, &symbol.identifier);
        }
        trace!(
            "[GRAPH] collected {:?} {:?}",
            symbol.symbol_type, symbol.identifier
        );
    }

    // ---------------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------------

    /// Create an empty document. Its definitions declare into `scope`
    /// (usually the root scope, or a definition's scope when embedded).
    pub fn add_document(
        &mut self,
        path: impl Into<PathBuf>,
        kind: &'static str,
        scope: ScopeId,
        parent: Option<DefinitionId>,
    ) -> DocumentId {
        let parent = parent.filter(|&definition| self.definitions.contains(definition));
        let id = self.documents.insert(Document {
            path: path.into(),
            kind,
            parent,
            scope,
            children: Children::default(),
        });
        if let Some(definition) = parent.and_then(|d| self.definitions.get_mut(d)) {
            definition.children.documents.insert(id);
        }
        self.bump();
        id
    }

    /// Create a definition of `symbol` under `owner`.
    ///
    /// The definition is registered in the owner's children and the symbol's
    /// definition set, and gets a nested scope whose parent is the owner's
    /// scope.
    pub fn add_definition(
        &mut self,
        owner: Owner,
        symbol: SymbolId,
        range: Span,
    ) -> Option<DefinitionId> {
        let document = self.owner_document(owner)?;
        let parent_scope = self.owner_scope(owner)?;
        if !self.symbols.contains(symbol) {
            return None;
        }

        let scope = self.scopes.insert(Scope::new(Some(parent_scope), None));
        let id = self.definitions.insert(Definition {
            owner,
            document,
            symbol,
            scope,
            range,
            identifier: None,
            children: Children::default(),
        });
        if let Some(scope) = self.scopes.get_mut(scope) {
            scope.owner = Some(id);
        }
        if let Some(children) = self.children_mut(owner) {
            children.definitions.insert(id);
        }
        if let Some(symbol) = self.symbols.get_mut(symbol) {
            symbol.definitions.insert(id);
        }
        self.bump();
        Some(id)
    }

    /// Create a reference under `owner`. Resolution is deferred until first use.
    pub fn add_reference(
        &mut self,
        owner: Owner,
        range: Span,
        resolution: Resolution,
    ) -> Option<ReferenceId> {
        let document = self.owner_document(owner)?;
        let id = self.references.insert(Reference {
            owner,
            document,
            range,
            resolution,
            cached: None,
        });
        if let Some(children) = self.children_mut(owner) {
            children.references.insert(id);
        }
        self.bump();
        Some(id)
    }

    /// Create the reference naming `definition`; it resolves to the
    /// definition's own symbol.
    pub fn add_identifier(&mut self, definition: DefinitionId, range: Span) -> Option<ReferenceId> {
        let symbol = self.definitions.get(definition)?.symbol;
        let id = self.add_reference(
            Owner::Definition(definition),
            range,
            Resolution::Symbol(symbol),
        )?;
        if let Some(definition) = self.definitions.get_mut(definition) {
            definition.identifier = Some(id);
        }
        Some(id)
    }

    // ---------------------------------------------------------------------
    // Teardown
    // ---------------------------------------------------------------------

    /// Destroy a document and everything it owns. Stale ids are a no-op.
    pub fn destroy_document(&mut self, id: DocumentId) -> bool {
        let Some(document) = self.documents.get(id) else {
            return false;
        };
        let definitions: Vec<_> = document.children.definitions.iter().copied().collect();
        let references: Vec<_> = document.children.references.iter().copied().collect();
        for definition in definitions {
            self.destroy_definition(definition);
        }
        for reference in references {
            self.destroy_reference(reference);
        }

        let Some(document) = self.documents.remove(id) else {
            return false;
        };
        if let Some(parent) = document.parent.and_then(|d| self.definitions.get_mut(d)) {
            parent.children.documents.shift_remove(&id);
        }
        self.bump();
        true
    }

    /// Destroy a definition, its children and its nested scope.
    pub fn destroy_definition(&mut self, id: DefinitionId) -> bool {
        let Some(definition) = self.definitions.get(id) else {
            return false;
        };
        let definitions: Vec<_> = definition.children.definitions.iter().copied().collect();
        let references: Vec<_> = definition.children.references.iter().copied().collect();
        let embedded: Vec<_> = definition.children.documents.iter().copied().collect();
        for child in definitions {
            self.destroy_definition(child);
        }
        for child in references {
            self.destroy_reference(child);
        }
        for document in embedded {
            self.destroy_document(document);
        }

        let Some(definition) = self.definitions.remove(id) else {
            return false;
        };
        if let Some(symbol) = self.symbols.get_mut(definition.symbol) {
            symbol.definitions.shift_remove(&id);
        }
        if let Some(children) = self.children_mut(definition.owner) {
            children.definitions.shift_remove(&id);
        }
        self.collect_if_orphan(definition.symbol);
        self.free_scope(definition.scope);
        self.bump();
        true
    }

    /// Destroy a reference and drop it from the symbols it resolved to.
    pub fn destroy_reference(&mut self, id: ReferenceId) -> bool {
        let Some(reference) = self.references.remove(id) else {
            return false;
        };
        if let Some((_, symbols)) = &reference.cached {
            for &symbol in symbols {
                if let Some(s) = self.symbols.get_mut(symbol) {
                    s.references.shift_remove(&id);
                }
                self.collect_if_orphan(symbol);
            }
        }
        if let Some(children) = self.children_mut(reference.owner) {
            children.references.shift_remove(&id);
        }
        self.bump();
        true
    }

    /// Remove a scope together with every symbol still registered in it.
    ///
    /// References elsewhere that last resolved to one of those symbols
    /// forget it; their caches are stale after the generation bump anyway.
    fn free_scope(&mut self, id: ScopeId) {
        let Some(scope) = self.scopes.remove(id) else {
            return;
        };
        for symbol in scope.all_symbols() {
            let Some(removed) = self.symbols.remove(symbol) else {
                continue;
            };
            for reference in removed.references {
                if let Some((_, symbols)) = self
                    .references
                    .get_mut(reference)
                    .and_then(|r| r.cached.as_mut())
                {
                    symbols.retain(|&s| s != symbol);
                }
            }
        }
    }
}
