use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use smol_str::SmolStr;

use super::symbol_type::SymbolType;
use super::{DefinitionId, ScopeId, SymbolId};

type Names = IndexMap<SmolStr, SymbolId, FxBuildHasher>;

/// A type-indexed symbol table.
///
/// Symbols of one type are kept in insertion order, which is the order
/// [`Graph::get_all`](super::Graph::get_all) yields them in.
#[derive(Debug, Default)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    /// Definition whose nested scope this is (`None` for the root scope)
    pub owner: Option<DefinitionId>,
    symbols: FxHashMap<SymbolType, Names>,
}

impl Scope {
    pub fn new(parent: Option<ScopeId>, owner: Option<DefinitionId>) -> Self {
        Self {
            parent,
            owner,
            symbols: FxHashMap::default(),
        }
    }

    pub fn get(&self, symbol_type: SymbolType, identifier: &str) -> Option<SymbolId> {
        self.symbols.get(&symbol_type)?.get(identifier).copied()
    }

    pub(super) fn insert(&mut self, symbol_type: SymbolType, identifier: SmolStr, id: SymbolId) {
        self.symbols
            .entry(symbol_type)
            .or_default()
            .insert(identifier, id);
    }

    pub(super) fn remove(&mut self, symbol_type: SymbolType, identifier: &str) -> Option<SymbolId> {
        let names = self.symbols.get_mut(&symbol_type)?;
        let removed = names.shift_remove(identifier);
        if names.is_empty() {
            self.symbols.remove(&symbol_type);
        }
        removed
    }

    /// Symbols of one type, in insertion order
    pub fn symbols_of(&self, symbol_type: SymbolType) -> impl Iterator<Item = SymbolId> + '_ {
        self.symbols
            .get(&symbol_type)
            .into_iter()
            .flat_map(|names| names.values().copied())
    }

    /// Every symbol in this scope regardless of type
    pub fn all_symbols(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.symbols.values().flat_map(|names| names.values().copied())
    }

    pub fn len(&self) -> usize {
        self.symbols.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
