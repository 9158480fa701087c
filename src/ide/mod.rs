//! IDE features: high-level queries for editor handlers.
//!
//! Each function corresponds to one editor request and answers from the
//! symbol graph alone. Results are plain data with no editor protocol types.
//!
//! ## Design Principles
//!
//! 1. **Best available data**: a query that finds nothing returns an empty
//!    result, never an error
//! 2. **No protocol types**: hosts convert at their own boundary
//! 3. **Graph-level**: functions take a [`Graph`] and a [`DocumentId`]; the
//!    [`Project`](crate::project::Project) decides which document a buffer maps to
//!
//! ## Usage
//!
//! ```ignore
//! use packgraph::project::{Project, ProjectConfig, SourceBuffer};
//!
//! let mut project = Project::new(ProjectConfig::default())?;
//! let buffer = SourceBuffer::new("RP/entity/pig.json", text);
//! let hover = project.hover(&buffer, Position::new(4, 20));
//! ```

mod completion;
mod goto;
mod hover;
mod references;
mod rename;
mod symbols;

use std::path::PathBuf;

use crate::base::{Position, Span};
use crate::graph::{DocumentId, Graph, ReferenceId, SymbolId};

pub use completion::{CompletionItem, CompletionKind, completions, path_completions};
pub use goto::{GotoResult, GotoTarget, goto_definition};
pub use hover::{HoverResult, hover};
pub use references::{ReferenceResult, ReferenceSite, document_highlights, find_references};
pub use rename::{TextEdit, WorkspaceEdit, rename};
pub use symbols::{DocumentSymbol, SymbolInfo, document_symbols, workspace_symbols};

/// A range inside a document, addressed by path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub path: PathBuf,
    pub range: Span,
}

impl Location {
    pub fn new(path: impl Into<PathBuf>, range: Span) -> Self {
        Self {
            path: path.into(),
            range,
        }
    }

    pub(crate) fn in_document(graph: &Graph, document: DocumentId, range: Span) -> Option<Self> {
        let path = graph.document(document)?.path();
        Some(Self::new(path, range))
    }
}

/// The reference under the cursor and the symbols it resolves to.
fn symbols_at(
    graph: &mut Graph,
    document: DocumentId,
    position: Position,
) -> Option<(ReferenceId, Vec<SymbolId>)> {
    let reference = graph.reference_at(document.into(), position)?;
    let symbols = graph.resolve(reference);
    Some((reference, symbols))
}
