use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::base::Position;
use crate::graph::{DocumentId, Graph};
use crate::ide::{
    self, CompletionItem, DocumentSymbol, GotoResult, HoverResult, Location, ReferenceResult,
    SymbolInfo, WorkspaceEdit,
};

use super::buffer::SourceBuffer;
use super::config::ProjectConfig;
use super::document_type::{DocumentType, LoaderKind, default_document_types};
use super::error::LoadError;
use super::loader::DocumentLoader;
use super::workspace::Workspace;

/// Outcome of a bulk load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Paths that produced a document, in load order
    pub loaded: Vec<PathBuf>,
    /// Files that were enumerated but not tracked, and enumeration failures
    pub failed: Vec<LoadError>,
    /// The load stopped early because its token was cancelled
    pub cancelled: bool,
}

/// Tracks one document per buffer path and answers editor queries.
///
/// Every query reparses the queried buffer from the text it is given before
/// answering, so results never reflect stale state.
pub struct Project {
    config: ProjectConfig,
    graph: Graph,
    types: Vec<Arc<dyn DocumentType>>,
    loaders: Vec<DocumentLoader>,
    documents: IndexMap<PathBuf, DocumentId, FxBuildHasher>,
}

impl Project {
    /// A project recognising the built-in document kinds.
    pub fn new(config: ProjectConfig) -> Result<Self, LoadError> {
        Self::with_document_types(config, default_document_types())
    }

    /// A project recognising `types`, tried in the given order.
    pub fn with_document_types(
        config: ProjectConfig,
        types: Vec<Arc<dyn DocumentType>>,
    ) -> Result<Self, LoadError> {
        let loaders = DocumentLoader::group(&types)?;
        let mut graph = Graph::new();
        graph.set_collect_orphan_symbols(config.collect_orphan_symbols);
        Ok(Self {
            config,
            graph,
            types,
            loaders,
            documents: IndexMap::default(),
        })
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn document_types(&self) -> &[Arc<dyn DocumentType>] {
        &self.types
    }

    pub fn loaded_paths(&self) -> impl Iterator<Item = &Path> {
        self.documents.keys().map(PathBuf::as_path)
    }

    /// The live document tracked for `path`
    pub fn document(&self, path: &Path) -> Option<DocumentId> {
        self.documents
            .get(path)
            .copied()
            .filter(|&id| self.graph.document(id).is_some())
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    /// Load every file the registered types could own, then resolve all
    /// references once.
    pub fn load_all(&mut self, workspace: &dyn Workspace) -> LoadReport {
        self.load_all_with_cancel(workspace, &CancellationToken::new())
    }

    /// [`load_all`](Self::load_all), checking `cancel` between files.
    ///
    /// A cancelled load still resolves whatever was loaded so far.
    pub fn load_all_with_cancel(
        &mut self,
        workspace: &dyn Workspace,
        cancel: &CancellationToken,
    ) -> LoadReport {
        let mut report = LoadReport::default();
        let patterns: Vec<&str> = self
            .types
            .iter()
            .flat_map(|ty| ty.patterns().iter().copied())
            .collect::<IndexSet<&str, FxBuildHasher>>()
            .into_iter()
            .collect();

        let paths = match workspace.find_files(&patterns) {
            Ok(list) => {
                report.failed.extend(list.skipped);
                list.paths
            }
            Err(e) => {
                warn!("[LOAD] file enumeration failed: {}", e);
                report.failed.push(e);
                Vec::new()
            }
        };

        for path in paths {
            if cancel.is_cancelled() {
                warn!("[LOAD] bulk load cancelled after {} file(s)", report.loaded.len());
                report.cancelled = true;
                break;
            }

            let buffer = if self.needs_text(&path) {
                match workspace.read(&path) {
                    Ok(text) => SourceBuffer::new(path, text),
                    Err(e) => {
                        debug!("[LOAD] {}", e);
                        report.failed.push(e);
                        continue;
                    }
                }
            } else {
                SourceBuffer::path_only(path)
            };

            match self.load(&buffer, true) {
                Ok(_) => report.loaded.push(buffer.path().to_path_buf()),
                Err(e) => {
                    debug!("[LOAD] {}", e);
                    report.failed.push(e);
                }
            }
        }

        self.ensure_resolved_references();
        debug!(
            "[LOAD] bulk load: {} loaded, {} failed{}",
            report.loaded.len(),
            report.failed.len(),
            if report.cancelled { ", cancelled" } else { "" }
        );
        report
    }

    /// The document for `buffer`, loading it if needed.
    ///
    /// Without `force_reload` a live document is returned unchanged. With it,
    /// any existing document is destroyed before the buffer is parsed again.
    /// Returns `None` when no document type takes the buffer.
    pub fn try_load(&mut self, buffer: &SourceBuffer, force_reload: bool) -> Option<DocumentId> {
        match self.load(buffer, force_reload) {
            Ok(document) => Some(document),
            Err(e) if e.is_unmatched() => {
                trace!("[LOAD] {}", e);
                None
            }
            Err(e) => {
                debug!("[LOAD] {}", e);
                None
            }
        }
    }

    fn load(&mut self, buffer: &SourceBuffer, force_reload: bool) -> Result<DocumentId, LoadError> {
        let path = buffer.path();
        if force_reload {
            self.unload(path);
        } else if let Some(document) = self.document(path) {
            return Ok(document);
        }

        let mut failure = None;
        for loader in &self.loaders {
            match loader.load(&mut self.graph, buffer) {
                Ok(document) => {
                    debug!("[LOAD] loaded {}", path.display());
                    self.documents.insert(path.to_path_buf(), document);
                    return Ok(document);
                }
                Err(e) if e.is_unmatched() => {}
                Err(e) => failure = Some(e),
            }
        }
        Err(failure.unwrap_or_else(|| LoadError::Unmatched(path.to_path_buf())))
    }

    /// Destroy the document tracked for `path`. Returns whether one existed.
    pub fn unload(&mut self, path: &Path) -> bool {
        let Some(document) = self.documents.shift_remove(path) else {
            return false;
        };
        let destroyed = self.graph.destroy_document(document);
        if destroyed {
            debug!("[LOAD] unloaded {}", path.display());
        }
        destroyed
    }

    /// Resolve every reference in every loaded document.
    pub fn ensure_resolved_references(&mut self) {
        self.graph.ensure_all_resolved();
    }

    fn needs_text(&self, path: &Path) -> bool {
        self.loaders
            .iter()
            .any(|loader| loader.kind() != LoaderKind::Raw && loader.matches(path))
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn completions(&mut self, buffer: &SourceBuffer, position: Position) -> Vec<CompletionItem> {
        let Some(document) = self.try_load(buffer, true) else {
            return Vec::new();
        };
        ide::completions(&mut self.graph, document, buffer.text(), position)
    }

    pub fn hover(&mut self, buffer: &SourceBuffer, position: Position) -> Option<HoverResult> {
        let document = self.try_load(buffer, true)?;
        ide::hover(&mut self.graph, document, position)
    }

    pub fn goto_definition(&mut self, buffer: &SourceBuffer, position: Position) -> GotoResult {
        let Some(document) = self.try_load(buffer, true) else {
            return GotoResult::empty();
        };
        ide::goto_definition(&mut self.graph, document, position)
    }

    pub fn find_references(
        &mut self,
        buffer: &SourceBuffer,
        position: Position,
        include_declaration: bool,
    ) -> ReferenceResult {
        let Some(document) = self.try_load(buffer, true) else {
            return ReferenceResult::empty();
        };
        ide::find_references(&mut self.graph, document, position, include_declaration)
    }

    pub fn document_highlights(&mut self, buffer: &SourceBuffer, position: Position) -> Vec<Location> {
        let Some(document) = self.try_load(buffer, true) else {
            return Vec::new();
        };
        ide::document_highlights(&mut self.graph, document, position)
    }

    pub fn document_symbols(&mut self, buffer: &SourceBuffer) -> Vec<DocumentSymbol> {
        let Some(document) = self.try_load(buffer, true) else {
            return Vec::new();
        };
        ide::document_symbols(&self.graph, document)
    }

    pub fn rename(
        &mut self,
        buffer: &SourceBuffer,
        position: Position,
        new_name: &str,
    ) -> Option<WorkspaceEdit> {
        let document = self.try_load(buffer, true)?;
        ide::rename(&mut self.graph, document, position, new_name)
    }

    /// Outline of an already loaded document, without reparsing.
    pub fn outline_of_loaded(&self, path: &Path) -> Vec<DocumentSymbol> {
        self.document(path)
            .map(|document| ide::document_symbols(&self.graph, document))
            .unwrap_or_default()
    }

    pub fn workspace_symbols(&self, query: Option<&str>) -> Vec<SymbolInfo> {
        ide::workspace_symbols(&self.graph, query)
    }
}

impl std::fmt::Debug for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Project")
            .field("config", &self.config)
            .field("loaders", &self.loaders)
            .field("documents", &self.documents.len())
            .finish()
    }
}
