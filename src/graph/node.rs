//! Definition, Reference and Document nodes.

use std::path::{Path, PathBuf};

use crate::base::Span;

use super::resolution::Resolution;
use super::{DefinitionId, DocumentId, FxIndexSet, ReferenceId, ScopeId, SymbolId};

/// The node a Definition or Reference belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Document(DocumentId),
    Definition(DefinitionId),
}

impl From<DocumentId> for Owner {
    fn from(id: DocumentId) -> Self {
        Owner::Document(id)
    }
}

impl From<DefinitionId> for Owner {
    fn from(id: DefinitionId) -> Self {
        Owner::Definition(id)
    }
}

/// Children shared by documents and definitions.
#[derive(Debug, Default)]
pub struct Children {
    pub definitions: FxIndexSet<DefinitionId>,
    pub references: FxIndexSet<ReferenceId>,
    /// Documents embedded in a definition; always empty for documents
    pub documents: FxIndexSet<DocumentId>,
}

/// Root owner of one parsed source buffer.
#[derive(Debug)]
pub struct Document {
    pub path: PathBuf,
    /// Name of the document kind that built it
    pub kind: &'static str,
    /// Set when the document is embedded inside another definition
    pub parent: Option<DefinitionId>,
    /// Scope top-level definitions register their symbols in
    pub scope: ScopeId,
    pub children: Children,
}

impl Document {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A declaration site.
#[derive(Debug)]
pub struct Definition {
    pub owner: Owner,
    pub document: DocumentId,
    pub symbol: SymbolId,
    /// Nested scope for identifiers meaningful only inside this definition
    pub scope: ScopeId,
    pub range: Span,
    /// The reference covering the name of this definition
    pub identifier: Option<ReferenceId>,
    pub children: Children,
}

impl Definition {
    /// Range used to select the name: the identifier's range when it lies
    /// inside the definition, otherwise the full range.
    pub fn selection_range(&self, identifier: Option<Span>) -> Span {
        match identifier {
            Some(span) if self.range.contains_span(&span) => span,
            _ => self.range,
        }
    }
}

/// A usage site.
#[derive(Debug)]
pub struct Reference {
    pub owner: Owner,
    pub document: DocumentId,
    pub range: Span,
    pub resolution: Resolution,
    /// Last evaluated symbol set and the graph generation it was computed at
    pub(super) cached: Option<(u64, Vec<SymbolId>)>,
}

impl Reference {
    /// Last computed symbols, whether or not they are still current
    pub fn last_resolved(&self) -> &[SymbolId] {
        self.cached
            .as_ref()
            .map(|(_, symbols)| symbols.as_slice())
            .unwrap_or(&[])
    }
}
