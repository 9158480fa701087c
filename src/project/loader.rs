//! Loader selection: path patterns first, then one parse, then structural
//! acceptance in declaration order.

use std::path::Path;
use std::sync::Arc;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use tracing::{debug, trace};

use crate::base::{SeqExt, TextSize};
use crate::documents::DocumentBuilder;
use crate::graph::{DocumentId, Graph};
use crate::parser::{ParseError, ParseErrorKind, parse};

use super::buffer::SourceBuffer;
use super::document_type::{Content, DocumentType, LoaderKind};
use super::error::LoadError;

/// Compile path patterns the way every matcher in the crate does:
/// `*` never crosses a path separator, `**` does.
pub(crate) fn glob_set<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Result<GlobSet, LoadError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| LoadError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| LoadError::Pattern {
        pattern: String::new(),
        source,
    })
}

/// Document types sharing one parsing strategy.
pub struct DocumentLoader {
    kind: LoaderKind,
    types: Vec<Arc<dyn DocumentType>>,
    patterns: GlobSet,
    /// Index into `types` for every compiled glob
    owners: Vec<usize>,
}

impl DocumentLoader {
    pub fn new(kind: LoaderKind, types: Vec<Arc<dyn DocumentType>>) -> Result<Self, LoadError> {
        let (owners, patterns): (Vec<usize>, Vec<&str>) = types
            .iter()
            .enumerate()
            .flat_map(|(index, ty)| ty.patterns().iter().map(move |p| (index, *p)))
            .unzip();
        let patterns = glob_set(patterns)?;
        Ok(Self {
            kind,
            types,
            patterns,
            owners,
        })
    }

    /// One loader per parsing strategy, in order of first appearance.
    pub fn group(types: &[Arc<dyn DocumentType>]) -> Result<Vec<Self>, LoadError> {
        types
            .iter()
            .cloned()
            .group_by_key(|ty| ty.loader())
            .into_iter()
            .map(|(kind, types)| Self::new(kind, types))
            .collect()
    }

    pub fn kind(&self) -> LoaderKind {
        self.kind
    }

    pub fn types(&self) -> &[Arc<dyn DocumentType>] {
        &self.types
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.patterns.is_match(path)
    }

    /// Types whose patterns match `path`, in declaration order
    pub fn candidates(&self, path: &Path) -> Vec<&Arc<dyn DocumentType>> {
        let mut owners: Vec<usize> = self
            .patterns
            .matches(path)
            .into_iter()
            .filter_map(|glob| self.owners.get(glob).copied())
            .collect();
        owners.sort_unstable();
        owners.dedup();
        owners.into_iter().filter_map(|i| self.types.get(i)).collect()
    }

    /// Build a document for `buffer` with the first candidate that accepts
    /// its content and builds successfully.
    pub fn load(&self, graph: &mut Graph, buffer: &SourceBuffer) -> Result<DocumentId, LoadError> {
        let path = buffer.path();
        let candidates = self.candidates(path);
        if candidates.is_empty() {
            return Err(LoadError::Unmatched(path.to_path_buf()));
        }

        match self.kind {
            LoaderKind::Json => {
                let parsed = parse(buffer.text());
                let Some(root) = parsed.root else {
                    let source = parsed.errors.into_iter().next().unwrap_or(ParseError {
                        kind: ParseErrorKind::EmptyDocument,
                        offset: TextSize::new(0),
                    });
                    return Err(LoadError::Parse {
                        path: path.to_path_buf(),
                        source,
                    });
                };
                if let Some(error) = parsed.errors.first() {
                    debug!("[LOAD] {} parsed partially: {}", path.display(), error);
                }
                build_first(graph, buffer, &candidates, Content::Json(&root))
            }
            LoaderKind::Raw => build_first(graph, buffer, &candidates, Content::Raw),
        }
    }
}

fn build_first(
    graph: &mut Graph,
    buffer: &SourceBuffer,
    candidates: &[&Arc<dyn DocumentType>],
    content: Content<'_>,
) -> Result<DocumentId, LoadError> {
    let path = buffer.path();
    let mut last_error = None;

    for ty in candidates.iter().filter(|ty| ty.accepts(content)) {
        let root_scope = graph.root_scope();
        let document = graph.add_document(path, ty.kind(), root_scope, None);
        let mut builder = DocumentBuilder::new(graph, document, buffer.text());
        match ty.build(&mut builder, content) {
            Ok(()) => {
                trace!("[LOAD] {} built as {}", path.display(), ty.kind());
                return Ok(document);
            }
            Err(source) => {
                graph.destroy_document(document);
                last_error = Some(LoadError::Build {
                    path: path.to_path_buf(),
                    kind: ty.kind(),
                    source,
                });
            }
        }
    }

    Err(last_error.unwrap_or_else(|| LoadError::Rejected(path.to_path_buf())))
}

impl std::fmt::Debug for DocumentLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentLoader")
            .field("kind", &self.kind)
            .field("types", &self.types)
            .finish()
    }
}
