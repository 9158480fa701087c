use smol_str::SmolStr;

use super::symbol_type::SymbolType;
use super::{DefinitionId, FxIndexSet, ReferenceId, ScopeId};

/// A named entity, unique per (type, identifier) within its scope.
///
/// The definition and reference sets are backreferences only: nodes add
/// and remove themselves, a symbol never owns them.
#[derive(Debug)]
pub struct Symbol {
    pub symbol_type: SymbolType,
    pub identifier: SmolStr,
    pub scope: ScopeId,
    pub definitions: FxIndexSet<DefinitionId>,
    pub references: FxIndexSet<ReferenceId>,
}

impl Symbol {
    pub(super) fn new(symbol_type: SymbolType, identifier: SmolStr, scope: ScopeId) -> Self {
        Self {
            symbol_type,
            identifier,
            scope,
            definitions: FxIndexSet::default(),
            references: FxIndexSet::default(),
        }
    }

    pub fn is_declared(&self) -> bool {
        !self.definitions.is_empty()
    }

    pub fn is_orphan(&self) -> bool {
        self.definitions.is_empty() && self.references.is_empty()
    }
}
