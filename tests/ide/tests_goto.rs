//! Go-to-definition tests.

use std::path::PathBuf;

use packgraph::documents::symbols::{ANIMATION_CONTROLLER_STATE, GEOMETRY};

use crate::helpers::fixtures::*;
use crate::helpers::*;

#[test]
fn test_goto_geometry_in_other_document() {
    let mut project = pig_project();
    let result = project.goto_definition(&buffer(ENTITY_PATH), cursor(ENTITY, "\"geometry.pig\""));

    assert_eq!(result.targets.len(), 1);
    let target = &result.targets[0];
    assert_eq!(target.location.path, PathBuf::from(GEOMETRY_PATH));
    assert_eq!(target.symbol_type, GEOMETRY);
    assert_eq!(target.name.as_ref(), "geometry.pig");
    assert_eq!(target.selection_range.start, cursor(crate::helpers::fixtures::GEOMETRY, "\"geometry.pig\""));
    assert!(target.location.range.contains_span(&target.selection_range));
}

#[test]
fn test_goto_transition_target_state() {
    let mut project = pig_project();
    let result = project.goto_definition(&buffer(CONTROLLER_PATH), cursor(CONTROLLER, "\"running\""));

    assert_eq!(result.targets.len(), 1);
    let target = &result.targets[0];
    assert_eq!(target.symbol_type, ANIMATION_CONTROLLER_STATE);
    assert_eq!(target.selection_range.start, cursor(CONTROLLER, "\"running\": {}"));
}

#[test]
fn test_goto_initial_state() {
    let mut project = pig_project();
    let result = project.goto_definition(&buffer(CONTROLLER_PATH), end_of(CONTROLLER, "\"initial_state\": \"d"));
    assert_eq!(result.targets.len(), 1);
    assert_eq!(
        result.targets[0].selection_range.start,
        cursor(CONTROLLER, "\"default\": {")
    );
}

#[test]
fn test_goto_unresolved_is_empty() {
    let mut loaded = pig_project();
    let result = loaded.goto_definition(&buffer(ENTITY_PATH), cursor(ENTITY, "\"minecraft:pig\""));
    // The entity's own name resolves to itself
    assert_eq!(result.targets.len(), 1);

    let mut empty = project();
    let result = empty.goto_definition(&buffer(ENTITY_PATH), cursor(ENTITY, "\"walk\""));
    assert!(result.is_empty());
}
