//! Path addressing into a [`JsonNode`] tree.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::tree::JsonNode;

/// One step of a concrete JSON path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(key: &'a str) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment<'_> {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// Find the node at a concrete path, e.g. `["minecraft:client_entity", "description"]`.
pub fn find_node<'n>(root: &'n JsonNode, path: &[Segment<'_>]) -> Option<&'n JsonNode> {
    let mut current = root;
    for segment in path {
        current = match *segment {
            Segment::Key(key) => current.get(key)?,
            Segment::Index(index) => current.elements().get(index)?,
        };
    }
    Some(current)
}

/// Convenience wrapper over [`find_node`] for key-only paths.
pub fn find_key_path<'n>(root: &'n JsonNode, keys: &[&str]) -> Option<&'n JsonNode> {
    let path: Vec<Segment<'_>> = keys.iter().map(|k| Segment::Key(k)).collect();
    find_node(root, &path)
}

/// A node matched by [`matching_nodes`].
#[derive(Debug, Clone)]
pub struct NodeMatch<'n> {
    /// Concrete path to the node (array indices rendered as numbers)
    pub path: Vec<SmolStr>,
    /// Values captured by `{param}` segments
    pub params: IndexMap<SmolStr, SmolStr>,
    pub node: &'n JsonNode,
}

/// Find every node matching a path pattern.
///
/// Pattern segments are object keys or array indices, `*` (any key or element),
/// or `{name}` (any key or element, captured under `name`).
pub fn matching_nodes<'n>(root: &'n JsonNode, pattern: &[&str]) -> Vec<NodeMatch<'n>> {
    let mut matches = vec![NodeMatch {
        path: Vec::new(),
        params: IndexMap::new(),
        node: root,
    }];

    for segment in pattern {
        let capture = segment
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'));
        let mut next = Vec::new();

        for found in &matches {
            let node = found.node;
            if node.is_array() {
                for (index, element) in node.elements().iter().enumerate() {
                    let index_text = SmolStr::new(index.to_string());
                    let wanted = *segment == "*"
                        || capture.is_some()
                        || segment.parse::<usize>().ok() == Some(index);
                    if wanted {
                        next.push(extend(found, index_text, capture, element));
                    }
                }
            } else if node.is_object() {
                for (key, value) in node.properties() {
                    let Some(key) = key.as_str() else { continue };
                    if *segment == "*" || capture.is_some() || *segment == key {
                        next.push(extend(found, SmolStr::new(key), capture, value));
                    }
                }
            }
        }
        matches = next;
    }
    matches
}

fn extend<'n>(
    parent: &NodeMatch<'n>,
    step: SmolStr,
    capture: Option<&str>,
    node: &'n JsonNode,
) -> NodeMatch<'n> {
    let mut path = parent.path.clone();
    let mut params = parent.params.clone();
    if let Some(name) = capture {
        params.insert(SmolStr::new(name), step.clone());
    }
    path.push(step);
    NodeMatch { path, params, node }
}
