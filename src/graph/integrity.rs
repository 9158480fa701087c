//! Referential integrity checks.

use thiserror::Error;

use super::{DefinitionId, DocumentId, Graph, Owner, ReferenceId, ScopeId, SymbolId};

/// A broken link between graph nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("symbol {symbol:?} lists definition {definition:?} which is gone or declares another symbol")]
    StaleDefinition {
        symbol: SymbolId,
        definition: DefinitionId,
    },
    #[error("symbol {symbol:?} lists reference {reference:?} which no longer resolves to it")]
    StaleReference {
        symbol: SymbolId,
        reference: ReferenceId,
    },
    #[error("definition {definition:?} is missing from the definition set of {symbol:?}")]
    UnregisteredDefinition {
        definition: DefinitionId,
        symbol: SymbolId,
    },
    #[error("reference {reference:?} resolved to {symbol:?} but is missing from its reference set")]
    UnregisteredReference {
        reference: ReferenceId,
        symbol: SymbolId,
    },
    #[error("{owner:?} does not list its child {child}")]
    Orphaned { owner: Owner, child: String },
    #[error("scope {scope:?} maps to symbol {symbol:?} which is gone or lives elsewhere")]
    ScopeEntry { scope: ScopeId, symbol: SymbolId },
    #[error("document {document:?} lists a child that is gone")]
    DanglingChild { document: DocumentId },
}

impl Graph {
    /// Check every backreference and ownership link. An empty result means
    /// the graph is consistent.
    pub fn verify(&self) -> Vec<IntegrityError> {
        let mut errors = Vec::new();

        for (symbol_id, symbol) in self.symbols.iter() {
            for &definition in &symbol.definitions {
                let ok = self
                    .definitions
                    .get(definition)
                    .is_some_and(|d| d.symbol == symbol_id);
                if !ok {
                    errors.push(IntegrityError::StaleDefinition {
                        symbol: symbol_id,
                        definition,
                    });
                }
            }
            for &reference in &symbol.references {
                let ok = self
                    .references
                    .get(reference)
                    .is_some_and(|r| r.last_resolved().contains(&symbol_id));
                if !ok {
                    errors.push(IntegrityError::StaleReference {
                        symbol: symbol_id,
                        reference,
                    });
                }
            }
            let listed = self
                .scopes
                .get(symbol.scope)
                .and_then(|s| s.get(symbol.symbol_type, &symbol.identifier));
            if listed != Some(symbol_id) {
                errors.push(IntegrityError::ScopeEntry {
                    scope: symbol.scope,
                    symbol: symbol_id,
                });
            }
        }

        for (id, definition) in self.definitions.iter() {
            let registered = self
                .symbols
                .get(definition.symbol)
                .is_some_and(|s| s.definitions.contains(&id));
            if !registered {
                errors.push(IntegrityError::UnregisteredDefinition {
                    definition: id,
                    symbol: definition.symbol,
                });
            }
            let listed = self
                .children(definition.owner)
                .is_some_and(|c| c.definitions.contains(&id));
            if !listed {
                errors.push(IntegrityError::Orphaned {
                    owner: definition.owner,
                    child: format!("{id:?}"),
                });
            }
        }

        for (id, reference) in self.references.iter() {
            for &symbol in reference.last_resolved() {
                let registered = self
                    .symbols
                    .get(symbol)
                    .is_some_and(|s| s.references.contains(&id));
                if !registered {
                    errors.push(IntegrityError::UnregisteredReference {
                        reference: id,
                        symbol,
                    });
                }
            }
            let listed = self
                .children(reference.owner)
                .is_some_and(|c| c.references.contains(&id));
            if !listed {
                errors.push(IntegrityError::Orphaned {
                    owner: reference.owner,
                    child: format!("{id:?}"),
                });
            }
        }

        for (id, document) in self.documents.iter() {
            if let Some(parent) = document.parent {
                let listed = self
                    .definitions
                    .get(parent)
                    .is_some_and(|d| d.children.documents.contains(&id));
                if !listed {
                    errors.push(IntegrityError::Orphaned {
                        owner: Owner::Definition(parent),
                        child: format!("{id:?}"),
                    });
                }
            }
            let dangling = document
                .children
                .definitions
                .iter()
                .any(|&d| !self.definitions.contains(d))
                || document
                    .children
                    .references
                    .iter()
                    .any(|&r| !self.references.contains(r));
            if dangling {
                errors.push(IntegrityError::DanglingChild { document: id });
            }
        }

        errors
    }
}
