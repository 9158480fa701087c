//! Animation documents: every key under `animations` declares an animation.

use crate::graph::Owner;
use crate::parser::JsonNode;

use super::builder::DocumentBuilder;
use super::symbols::ANIMATION;
use super::BuildError;

pub const KIND: &str = "animation";

pub const PATTERNS: &[&str] = &["**/animations/*.json", "**/*.animation.json"];

pub fn accepts(root: &JsonNode) -> bool {
    root.get("animations").is_some()
}

pub fn build(builder: &mut DocumentBuilder<'_>, root: &JsonNode) -> Result<(), BuildError> {
    let animations = root
        .get("animations")
        .ok_or(BuildError::MissingField("animations"))?;
    let owner = Owner::Document(builder.document());
    let scope = builder.document_scope();
    for property in animations.property_nodes() {
        builder.define(owner, scope, ANIMATION, property);
    }
    Ok(())
}
