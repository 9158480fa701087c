//! Geometry documents.
//!
//! Two layouts are understood: the current format, where each entry of
//! `minecraft:geometry` names itself in `description.identifier`, and the
//! legacy format, where top-level `geometry.*` keys are the identifiers
//! (optionally followed by `:parent`).

use text_size::{TextRange, TextSize};

use crate::graph::Owner;
use crate::parser::{JsonNode, find_key_path};

use super::builder::DocumentBuilder;
use super::symbols::GEOMETRY;
use super::BuildError;

pub const KIND: &str = "geometry";

pub const PATTERNS: &[&str] = &["**/models/**/*.json", "**/*.geo.json"];

const LEGACY_PREFIX: &str = "geometry.";

pub fn accepts(root: &JsonNode) -> bool {
    root.get("minecraft:geometry").is_some() || legacy_keys(root).next().is_some()
}

fn legacy_keys(root: &JsonNode) -> impl Iterator<Item = &JsonNode> {
    root.property_nodes().filter(|p| {
        p.key()
            .and_then(JsonNode::as_str)
            .is_some_and(|k| k.starts_with(LEGACY_PREFIX))
    })
}

pub fn build(builder: &mut DocumentBuilder<'_>, root: &JsonNode) -> Result<(), BuildError> {
    let owner = Owner::Document(builder.document());
    let scope = builder.document_scope();

    if let Some(entries) = root.get("minecraft:geometry") {
        for entry in entries.elements() {
            let Some(name) = find_key_path(entry, &["description", "identifier"]) else {
                continue;
            };
            builder.define_named(owner, scope, GEOMETRY, name, entry.range);
        }
        return Ok(());
    }

    let mut found = false;
    for property in legacy_keys(root) {
        let Some(key) = property.key() else { continue };
        let Some(text) = key.as_str() else { continue };
        // `geometry.pig.v1:geometry.pig` inherits from the part after the colon
        let identifier = text.split(':').next().unwrap_or(text);
        let inner = key.inner_range();
        let identifier_range = TextRange::at(inner.start(), TextSize::of(identifier)).intersect(inner);
        builder.define_at(
            owner,
            scope,
            GEOMETRY,
            identifier,
            property.range,
            identifier_range.unwrap_or(inner),
        );
        found = true;
    }
    if found {
        Ok(())
    } else {
        Err(BuildError::MissingField("minecraft:geometry"))
    }
}
