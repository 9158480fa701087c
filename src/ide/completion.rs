//! Completion suggestions implementation.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use crate::base::{LineIndex, Position, SeqExt};
use crate::graph::{DocumentId, Graph, ScopeId, SymbolId, SymbolType};

use super::Location;

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    /// A declared identifier
    Value,
    /// A path segment with further segments below it
    Folder,
    /// A complete path
    File,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Value => 12,
            CompletionKind::Folder => 19,
            CompletionKind::File => 17,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug)]
pub struct CompletionItem {
    /// The text shown in the list.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
    /// Text to insert (if different from label).
    pub insert_text: Option<Arc<str>>,
    /// Where the candidate was first declared.
    pub location: Option<Location>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            insert_text: None,
            location: None,
            sort_priority: 100,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set the insert text.
    pub fn with_insert_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(text.into());
        self
    }

    pub fn with_location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }

    /// Set the sort priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }

    /// Text the host should insert.
    pub fn text(&self) -> &str {
        self.insert_text.as_deref().unwrap_or(&self.label)
    }
}

/// Get completion suggestions at a position.
///
/// Only positions inside a reference produce candidates: the declared
/// symbols its strategy could resolve to. Path-like symbol types complete
/// one path segment at a time, using the text typed so far.
///
/// # Arguments
/// * `graph` - The symbol graph
/// * `document` - The document containing the cursor
/// * `text` - Current text of that document
/// * `position` - Cursor position
pub fn completions(
    graph: &mut Graph,
    document: DocumentId,
    text: &str,
    position: Position,
) -> Vec<CompletionItem> {
    let Some(reference) = graph.reference_at(document.into(), position) else {
        return Vec::new();
    };
    let Some((resolution, range)) = graph
        .reference(reference)
        .map(|r| (r.resolution.clone(), r.range))
    else {
        return Vec::new();
    };

    let (paths, plain): (Vec<_>, Vec<_>) = graph
        .completion_domain(&resolution)
        .into_iter()
        .partition(|(_, symbol_type)| symbol_type.is_path_like());
    let graph = &*graph;

    let mut items = Vec::new();
    if !paths.is_empty() {
        let index = LineIndex::new(text);
        let typed = match (index.offset(range.start), index.offset(position)) {
            (Some(start), Some(end)) if start <= end => {
                text.get(usize::from(start)..usize::from(end)).unwrap_or("")
            }
            _ => "",
        };
        let identifiers: Vec<SmolStr> = declared(graph, &paths)
            .filter_map(|id| graph.symbol(id))
            .map(|s| s.identifier.clone())
            .collect();
        items.extend(path_completions(identifiers.iter().map(SmolStr::as_str), typed));
    }

    items.extend(declared(graph, &plain).filter_map(|id| symbol_item(graph, id)));
    items
}

/// Declared symbols in the given (scope, type) pairs, each once.
fn declared<'g>(
    graph: &'g Graph,
    domain: &'g [(ScopeId, SymbolType)],
) -> impl Iterator<Item = SymbolId> + 'g {
    domain
        .iter()
        .filter_map(|&(scope, symbol_type)| Some((graph.scope(scope)?, symbol_type)))
        .flat_map(|(scope, symbol_type)| scope.symbols_of(symbol_type))
        .filter(|&id| graph.symbol(id).is_some_and(|s| s.is_declared()))
        .distinct()
}

fn symbol_item(graph: &Graph, id: SymbolId) -> Option<CompletionItem> {
    let symbol = graph.symbol(id)?;
    let location = symbol
        .definitions
        .first()
        .and_then(|&d| graph.definition(d))
        .and_then(|d| Location::in_document(graph, d.document, d.range));
    let info = symbol.symbol_type.info();

    let mut item = CompletionItem::new(symbol.identifier.as_str(), CompletionKind::Value)
        .with_detail(info.label)
        .with_location(location);
    if !info.description.is_empty() {
        item = item.with_documentation(info.description);
    }
    Some(item)
}

const FOLDER_PRIORITY: u32 = 10;
const FILE_PRIORITY: u32 = 20;

/// Segment tree built from `/`-separated paths.
#[derive(Default)]
struct PathNode {
    children: IndexMap<SmolStr, PathNode, FxBuildHasher>,
}

impl PathNode {
    fn build<'a>(paths: impl IntoIterator<Item = &'a str>) -> Self {
        let mut root = PathNode::default();
        for path in paths {
            let mut node = &mut root;
            for segment in path.split('/') {
                node = node.children.entry(SmolStr::new(segment)).or_default();
            }
        }
        root
    }

    fn get(&self, segments: &[&str]) -> Option<&PathNode> {
        segments
            .iter()
            .try_fold(self, |node, segment| node.children.get(*segment))
    }
}

/// Candidates for the next segment of a partially typed path.
///
/// `typed` is the text between the opening quote and the cursor. Segments
/// with children are offered as folders (`name/`), leaves as files; the
/// insert text is always the full path. Folders sort ahead of files.
pub fn path_completions<'a>(
    paths: impl IntoIterator<Item = &'a str>,
    typed: &str,
) -> Vec<CompletionItem> {
    let tree = PathNode::build(paths);
    let mut parents: Vec<&str> = typed.split('/').collect();
    parents.pop();
    let parent_path = parents.join("/");

    let Some(parent) = tree.get(&parents) else {
        return Vec::new();
    };
    let mut items: Vec<CompletionItem> = parent
        .children
        .iter()
        .map(|(name, child)| {
            let (segment, kind, priority) = if child.children.is_empty() {
                (name.to_string(), CompletionKind::File, FILE_PRIORITY)
            } else {
                (format!("{name}/"), CompletionKind::Folder, FOLDER_PRIORITY)
            };
            let full_path = if parent_path.is_empty() {
                segment.clone()
            } else {
                format!("{parent_path}/{segment}")
            };
            CompletionItem::new(segment, kind)
                .with_insert_text(full_path)
                .with_priority(priority)
        })
        .collect();
    items.sort_by_key(|item| item.sort_priority);
    items
}
