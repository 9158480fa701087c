//! Client entity documents.
//!
//! The entity is declared by `description.identifier`. The maps in its
//! description (`animations`, `textures`, `geometry`) bind entity-local
//! nicknames to global resources, and `scripts.animate` refers back to the
//! animation nicknames.

use crate::graph::{DefinitionId, Owner, Resolution, ScopeId, SymbolType};
use crate::parser::{JsonNode, matching_nodes};

use super::builder::DocumentBuilder;
use super::symbols::{
    ANIMATION, ANIMATION_CONTROLLER, ANIMATION_NICKNAME, CLIENT_ENTITY, GEOMETRY,
    GEOMETRY_NICKNAME, IMAGE_TEXTURE, TEXTURE_NICKNAME,
};
use super::BuildError;

pub const KIND: &str = "client_entity";

pub const PATTERNS: &[&str] = &["**/entity/*.json", "**/*.entity.json"];

const ROOT_KEY: &str = "minecraft:client_entity";

pub fn accepts(root: &JsonNode) -> bool {
    root.get(ROOT_KEY).is_some()
}

pub fn build(builder: &mut DocumentBuilder<'_>, root: &JsonNode) -> Result<(), BuildError> {
    let entity = root
        .get_property(ROOT_KEY)
        .ok_or(BuildError::MissingField(ROOT_KEY))?;
    let description = entity
        .value()
        .and_then(|v| v.get("description"))
        .ok_or(BuildError::MissingField("description"))?;
    let name = description
        .get("identifier")
        .ok_or(BuildError::MissingField("description.identifier"))?;

    let scope = builder.document_scope();
    let document = Owner::Document(builder.document());
    let definition = builder
        .define_named(document, scope, CLIENT_ENTITY, name, entity.range)
        .ok_or(BuildError::MissingField("description.identifier"))?;
    let Some(entity_scope) = builder.scope_of(definition) else {
        return Ok(());
    };
    let global = builder.root_scope();

    bind_nicknames(builder, definition, entity_scope, description.get("animations"), ANIMATION_NICKNAME, |name| {
        Resolution::Union(vec![
            Resolution::lookup(global, ANIMATION, name.clone()),
            Resolution::lookup(global, ANIMATION_CONTROLLER, name),
        ])
    });
    bind_nicknames(builder, definition, entity_scope, description.get("textures"), TEXTURE_NICKNAME, |name| {
        Resolution::intern(global, IMAGE_TEXTURE, name)
    });
    bind_nicknames(builder, definition, entity_scope, description.get("geometry"), GEOMETRY_NICKNAME, |name| {
        Resolution::lookup(global, GEOMETRY, name)
    });

    for found in matching_nodes(description, &["scripts", "animate", "*"]) {
        let entry = found.node;
        let name = if entry.is_object() {
            entry.properties().next().map(|(key, _)| key)
        } else {
            Some(entry)
        };
        if let Some(name) = name {
            builder.reference_with(Owner::Definition(definition), name, |nickname| {
                Resolution::lookup(entity_scope, ANIMATION_NICKNAME, nickname)
            });
        }
    }
    Ok(())
}

/// Declare each key of `map` as a nickname in the entity's scope; the value
/// references what the nickname stands for.
fn bind_nicknames(
    builder: &mut DocumentBuilder<'_>,
    entity: DefinitionId,
    scope: ScopeId,
    map: Option<&JsonNode>,
    nickname: SymbolType,
    target: impl Fn(smol_str::SmolStr) -> Resolution,
) {
    let Some(map) = map else { return };
    for property in map.property_nodes() {
        let Some(definition) = builder.define(Owner::Definition(entity), scope, nickname, property) else {
            continue;
        };
        if let Some(value) = property.value() {
            builder.reference_with(Owner::Definition(definition), value, &target);
        }
    }
}
