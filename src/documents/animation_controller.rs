//! Animation controller documents.
//!
//! ```json
//! { "animation_controllers": {
//!     "controller.animation.pig.walk": {
//!       "initial_state": "default",
//!       "states": {
//!         "default": {
//!           "animations": ["move", { "look_at": "q.is_angry" }],
//!           "transitions": [{ "running": "q.modified_move_speed > 0.5" }]
//!         },
//!         "running": {}
//! } } } }
//! ```
//!
//! Controllers are global. States live in the controller's own scope, so
//! two controllers may both have a `default` state. Animation entries name
//! nicknames that some client entity binds to the controller.

use crate::graph::{DefinitionId, Owner, Resolution};
use crate::parser::{JsonNode, matching_nodes};

use super::builder::DocumentBuilder;
use super::symbols::{ANIMATION_CONTROLLER, ANIMATION_CONTROLLER_STATE, ANIMATION_NICKNAME};
use super::BuildError;

pub const KIND: &str = "animation_controller";

pub const PATTERNS: &[&str] = &[
    "**/animation_controllers/*.json",
    "**/*.animation_controllers.json",
];

pub fn accepts(root: &JsonNode) -> bool {
    root.get("animation_controllers").is_some()
}

pub fn build(builder: &mut DocumentBuilder<'_>, root: &JsonNode) -> Result<(), BuildError> {
    let controllers = root
        .get("animation_controllers")
        .ok_or(BuildError::MissingField("animation_controllers"))?;
    let document = Owner::Document(builder.document());
    let scope = builder.document_scope();

    for property in controllers.property_nodes() {
        let Some(controller) = builder.define(document, scope, ANIMATION_CONTROLLER, property) else {
            continue;
        };
        if let Some(body) = property.value() {
            build_controller(builder, controller, body);
        }
    }
    Ok(())
}

fn build_controller(builder: &mut DocumentBuilder<'_>, controller: DefinitionId, body: &JsonNode) {
    let Some(scope) = builder.scope_of(controller) else {
        return;
    };
    let owner = Owner::Definition(controller);

    if let Some(initial) = body.get("initial_state") {
        builder.reference_with(owner, initial, |name| {
            Resolution::lookup(scope, ANIMATION_CONTROLLER_STATE, name)
        });
    }

    let Some(states) = body.get("states") else {
        return;
    };
    for property in states.property_nodes() {
        let Some(state) = builder.define(owner, scope, ANIMATION_CONTROLLER_STATE, property) else {
            continue;
        };
        if let Some(body) = property.value() {
            build_state(builder, controller, state, body);
        }
    }
}

fn build_state(
    builder: &mut DocumentBuilder<'_>,
    controller: DefinitionId,
    state: DefinitionId,
    body: &JsonNode,
) {
    let owner = Owner::Definition(state);

    if let Some(state_scope) = builder.scope_of(state) {
        for transition in matching_nodes(body, &["transitions", "*"]) {
            for (target, _) in transition.node.properties() {
                builder.reference_with(owner, target, |name| {
                    Resolution::visible(state_scope, ANIMATION_CONTROLLER_STATE, name)
                });
            }
        }
    }

    let Some(symbol) = builder.graph().definition(controller).map(|d| d.symbol) else {
        return;
    };
    let animations = body.get("animations").map(JsonNode::elements).unwrap_or_default();
    for entry in animations {
        let name = if entry.is_object() {
            entry.properties().next().map(|(key, _)| key)
        } else {
            Some(entry)
        };
        if let Some(name) = name {
            builder.reference_with(owner, name, |nickname| {
                Resolution::users(symbol, ANIMATION_NICKNAME, nickname)
            });
        }
    }
}
