//! Resolution strategies.
//!
//! A [`Resolution`] is inert data describing how a reference finds its
//! symbols. [`Graph::resolve`](super::Graph::resolve) is the only interpreter.

use smol_str::SmolStr;

use super::symbol_type::SymbolType;
use super::{ScopeId, SymbolId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Placeholder that never resolves
    None,
    /// Fixed target, used by the reference naming a definition
    Symbol(SymbolId),
    /// Declared symbol in exactly one scope
    Lookup {
        scope: ScopeId,
        symbol_type: SymbolType,
        identifier: SmolStr,
    },
    /// Declared symbol in `scope` or the nearest enclosing scope
    Visible {
        scope: ScopeId,
        symbol_type: SymbolType,
        identifier: SmolStr,
    },
    /// Get-or-create in one scope; always resolves
    Intern {
        scope: ScopeId,
        symbol_type: SymbolType,
        identifier: SmolStr,
    },
    /// Ordered, de-duplicated union of the inner strategies
    Union(Vec<Resolution>),
    /// Declared symbol in every scope holding a definition that references
    /// `target`, e.g. the nickname an entity binds a controller to.
    Users {
        target: SymbolId,
        symbol_type: SymbolType,
        identifier: SmolStr,
    },
}

impl Resolution {
    pub fn lookup(scope: ScopeId, symbol_type: SymbolType, identifier: impl Into<SmolStr>) -> Self {
        Resolution::Lookup {
            scope,
            symbol_type,
            identifier: identifier.into(),
        }
    }

    pub fn visible(scope: ScopeId, symbol_type: SymbolType, identifier: impl Into<SmolStr>) -> Self {
        Resolution::Visible {
            scope,
            symbol_type,
            identifier: identifier.into(),
        }
    }

    pub fn intern(scope: ScopeId, symbol_type: SymbolType, identifier: impl Into<SmolStr>) -> Self {
        Resolution::Intern {
            scope,
            symbol_type,
            identifier: identifier.into(),
        }
    }

    pub fn users(target: SymbolId, symbol_type: SymbolType, identifier: impl Into<SmolStr>) -> Self {
        Resolution::Users {
            target,
            symbol_type,
            identifier: identifier.into(),
        }
    }

    /// Whether evaluation reads other references' resolved state.
    ///
    /// Dependent strategies are evaluated after every independent reference
    /// in the graph has been settled.
    pub fn is_dependent(&self) -> bool {
        match self {
            Resolution::Users { .. } => true,
            Resolution::Union(parts) => parts.iter().any(Resolution::is_dependent),
            _ => false,
        }
    }

    /// The symbol type and identifier this strategy is looking for, if it
    /// names one directly.
    pub fn expected(&self) -> Option<(SymbolType, &str)> {
        match self {
            Resolution::None | Resolution::Symbol(_) => None,
            Resolution::Lookup {
                symbol_type,
                identifier,
                ..
            }
            | Resolution::Visible {
                symbol_type,
                identifier,
                ..
            }
            | Resolution::Intern {
                symbol_type,
                identifier,
                ..
            }
            | Resolution::Users {
                symbol_type,
                identifier,
                ..
            } => Some((*symbol_type, identifier.as_str())),
            Resolution::Union(parts) => parts.iter().find_map(Resolution::expected),
        }
    }
}
