//! Reference resolution.
//!
//! Results are cached per graph generation. When a reference is re-evaluated
//! the difference between its old and new symbol sets is applied to the
//! symbols' backreference sets, so `Symbol::references` always mirrors the
//! last evaluation of every live reference.

use tracing::trace;

use crate::base::{SeqExt, traverse};

use super::{Graph, Owner, ReferenceId, Resolution, ScopeId, SymbolId, SymbolType};

impl Graph {
    /// Resolve a reference, re-evaluating its strategy only if the graph
    /// changed since the last evaluation.
    pub fn resolve(&mut self, id: ReferenceId) -> Vec<SymbolId> {
        let Some(reference) = self.references.get(id) else {
            return Vec::new();
        };
        if let Some((generation, symbols)) = &reference.cached {
            if *generation == self.generation {
                return symbols.clone();
            }
        }

        let resolution = reference.resolution.clone();
        if resolution.is_dependent() {
            self.settle_independent();
        }
        let resolved = self.evaluate(&resolution);
        self.store(id, resolved.clone());
        trace!("[RESOLVE] {:?} -> {:?}", id, resolved);
        resolved
    }

    /// The cached result if it is current for this generation
    pub fn resolved(&self, id: ReferenceId) -> Option<&[SymbolId]> {
        let (generation, symbols) = self.references.get(id)?.cached.as_ref()?;
        (*generation == self.generation).then_some(symbols.as_slice())
    }

    /// Force resolution of every reference under `owner`, recursively.
    pub fn ensure_resolved(&mut self, owner: Owner) {
        let (dependent, independent): (Vec<_>, Vec<_>) =
            self.references_under(owner).into_iter().partition(|&id| {
                self.references
                    .get(id)
                    .is_some_and(|r| r.resolution.is_dependent())
            });
        for id in independent.into_iter().chain(dependent) {
            self.resolve(id);
        }
    }

    /// Force resolution of every reference in the graph.
    pub fn ensure_all_resolved(&mut self) {
        self.settle_independent();
        for id in self.references.ids() {
            self.resolve(id);
        }
    }

    /// References owned by `owner`, its definitions and embedded documents,
    /// in pre-order.
    fn references_under(&self, owner: Owner) -> Vec<ReferenceId> {
        traverse([owner], |&owner| {
            self.children(owner)
                .map(|c| {
                    let definitions = c.definitions.iter().map(|&d| Owner::Definition(d));
                    let documents = c.documents.iter().map(|&d| Owner::Document(d));
                    definitions.chain(documents).collect()
                })
                .unwrap_or_default()
        })
        .filter_map(|owner| self.children(owner))
        .flat_map(|c| c.references.iter().copied())
        .collect()
    }

    /// Bring every independent reference up to date so dependent strategies
    /// see complete backreference sets.
    fn settle_independent(&mut self) {
        if self.settled == Some(self.generation) {
            return;
        }
        let stale: Vec<ReferenceId> = self
            .references
            .iter()
            .filter(|(_, r)| !r.resolution.is_dependent())
            .filter(|(_, r)| !matches!(r.cached, Some((g, _)) if g == self.generation))
            .map(|(id, _)| id)
            .collect();
        trace!("[RESOLVE] settling {} independent references", stale.len());
        for id in stale {
            self.resolve(id);
        }
        self.settled = Some(self.generation);
    }

    fn evaluate(&mut self, resolution: &Resolution) -> Vec<SymbolId> {
        match resolution {
            Resolution::None => Vec::new(),
            Resolution::Symbol(id) => {
                if self.symbols.contains(*id) {
                    vec![*id]
                } else {
                    Vec::new()
                }
            }
            Resolution::Lookup {
                scope,
                symbol_type,
                identifier,
            } => self
                .declared(*scope, *symbol_type, identifier)
                .into_iter()
                .collect(),
            Resolution::Visible {
                scope,
                symbol_type,
                identifier,
            } => self
                .scope_chain(*scope)
                .into_iter()
                .find_map(|s| self.declared(s, *symbol_type, identifier))
                .into_iter()
                .collect(),
            Resolution::Intern {
                scope,
                symbol_type,
                identifier,
            } => self
                .get_or_create(*scope, *symbol_type, identifier)
                .into_iter()
                .collect(),
            Resolution::Union(parts) => {
                let mut all = Vec::new();
                for part in parts {
                    all.extend(self.evaluate(part));
                }
                all.into_iter().distinct().collect()
            }
            Resolution::Users {
                target,
                symbol_type,
                identifier,
            } => self
                .user_scopes(*target)
                .into_iter()
                .filter_map(|s| self.declared(s, *symbol_type, identifier))
                .distinct()
                .collect(),
        }
    }

    /// A symbol in `scope` that has at least one definition
    fn declared(&self, scope: ScopeId, symbol_type: SymbolType, identifier: &str) -> Option<SymbolId> {
        let id = self.try_get(scope, symbol_type, identifier)?;
        self.symbols
            .get(id)
            .is_some_and(|s| s.is_declared())
            .then_some(id)
    }

    /// Scopes of the symbols whose definitions hold a reference to `target`
    pub(crate) fn user_scopes(&self, target: SymbolId) -> Vec<ScopeId> {
        let Some(symbol) = self.symbols.get(target) else {
            return Vec::new();
        };
        symbol
            .references
            .iter()
            .filter_map(|&r| self.references.get(r))
            .filter_map(|r| match r.owner {
                Owner::Definition(d) => self.definitions.get(d),
                Owner::Document(_) => None,
            })
            .filter_map(|d| self.symbols.get(d.symbol))
            .map(|s| s.scope)
            .distinct()
            .collect()
    }

    /// Record a new result and move backreferences from the old symbol set
    /// to the new one.
    fn store(&mut self, id: ReferenceId, resolved: Vec<SymbolId>) {
        let previous = self
            .references
            .get_mut(id)
            .and_then(|r| r.cached.take())
            .map(|(_, symbols)| symbols)
            .unwrap_or_default();

        for &symbol in &resolved {
            if let Some(s) = self.symbols.get_mut(symbol) {
                s.references.insert(id);
            }
        }
        let dropped: Vec<SymbolId> = previous
            .into_iter()
            .filter(|s| !resolved.contains(s))
            .collect();

        if let Some(reference) = self.references.get_mut(id) {
            reference.cached = Some((self.generation, resolved));
        }
        for symbol in dropped {
            if let Some(s) = self.symbols.get_mut(symbol) {
                s.references.shift_remove(&id);
            }
            self.collect_if_orphan(symbol);
        }
    }

    /// (scope, type) pairs whose symbols are valid completions for `resolution`
    pub fn completion_domain(&mut self, resolution: &Resolution) -> Vec<(ScopeId, SymbolType)> {
        if resolution.is_dependent() {
            self.settle_independent();
        }
        self.domain(resolution).into_iter().distinct().collect()
    }

    fn domain(&self, resolution: &Resolution) -> Vec<(ScopeId, SymbolType)> {
        match resolution {
            Resolution::None | Resolution::Symbol(_) => Vec::new(),
            Resolution::Lookup {
                scope, symbol_type, ..
            }
            | Resolution::Intern {
                scope, symbol_type, ..
            } => vec![(*scope, *symbol_type)],
            Resolution::Visible {
                scope, symbol_type, ..
            } => self
                .scope_chain(*scope)
                .into_iter()
                .map(|s| (s, *symbol_type))
                .collect(),
            Resolution::Union(parts) => parts.iter().flat_map(|p| self.domain(p)).collect(),
            Resolution::Users {
                target,
                symbol_type,
                ..
            } => self
                .user_scopes(*target)
                .into_iter()
                .map(|s| (s, *symbol_type))
                .collect(),
        }
    }
}
