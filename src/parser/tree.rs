//! Offset-addressed JSON tree.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

/// Kind of a [`JsonNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object,
    Array,
    /// A `key: value` pair inside an object. Children are `[key, value]`
    /// (only `[key]` when the value is missing).
    Property,
    String,
    Number,
    Boolean,
    Null,
}

/// A node in a parsed JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonNode {
    pub kind: NodeKind,
    /// Byte range of the node in the source text (strings include their quotes)
    pub range: TextRange,
    /// Decoded value for strings, source text for numbers and booleans
    pub value: Option<SmolStr>,
    /// Offset of the `:` for properties
    pub colon: Option<TextSize>,
    pub children: Vec<JsonNode>,
}

impl JsonNode {
    pub fn new(kind: NodeKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            value: None,
            colon: None,
            children: Vec::new(),
        }
    }

    pub fn is_object(&self) -> bool {
        self.kind == NodeKind::Object
    }

    pub fn is_array(&self) -> bool {
        self.kind == NodeKind::Array
    }

    /// The decoded value if this is a string node
    pub fn as_str(&self) -> Option<&str> {
        match self.kind {
            NodeKind::String => self.value.as_deref(),
            _ => None,
        }
    }

    /// The range of a string's content, without its quotes. Other nodes return
    /// their full range.
    pub fn inner_range(&self) -> TextRange {
        if self.kind == NodeKind::String && self.range.len() >= TextSize::new(2) {
            let one = TextSize::new(1);
            TextRange::new(self.range.start() + one, self.range.end() - one)
        } else {
            self.range
        }
    }

    /// Key/value pairs of an object node. Properties without a value are skipped.
    pub fn properties(&self) -> impl Iterator<Item = (&JsonNode, &JsonNode)> {
        self.children
            .iter()
            .filter(|_| self.is_object())
            .filter_map(|property| match property.children.as_slice() {
                [key, value] if property.kind == NodeKind::Property => Some((key, value)),
                _ => None,
            })
    }

    /// Value of the property named `key` on an object node
    pub fn get(&self, key: &str) -> Option<&JsonNode> {
        self.properties()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, value)| value)
    }

    /// The property node (key and value) named `key` on an object node
    pub fn get_property(&self, key: &str) -> Option<&JsonNode> {
        self.children.iter().filter(|_| self.is_object()).find(|p| {
            p.kind == NodeKind::Property
                && p.children.first().and_then(JsonNode::as_str) == Some(key)
        })
    }

    /// Property nodes of an object, including ones whose value failed to parse
    pub fn property_nodes(&self) -> impl Iterator<Item = &JsonNode> {
        self.children
            .iter()
            .filter(|_| self.is_object())
            .filter(|p| p.kind == NodeKind::Property)
    }

    /// Key of a property node
    pub fn key(&self) -> Option<&JsonNode> {
        match self.kind {
            NodeKind::Property => self.children.first(),
            _ => None,
        }
    }

    /// Value of a property node
    pub fn value(&self) -> Option<&JsonNode> {
        match self.kind {
            NodeKind::Property => self.children.get(1),
            _ => None,
        }
    }

    /// Elements of an array node
    pub fn elements(&self) -> &[JsonNode] {
        if self.is_array() { &self.children } else { &[] }
    }
}
