//! Rename tests.

use std::path::{Path, PathBuf};

use packgraph::documents::symbols::ANIMATION_CONTROLLER;
use packgraph::project::SourceBuffer;

use crate::helpers::fixtures::*;
use crate::helpers::*;

#[test]
fn test_rename_touches_declaration_and_usage() {
    let mut project = pig_project();
    let edit = project
        .rename(&buffer(CONTROLLER_PATH), cursor(CONTROLLER, "\"walk\""), "running")
        .unwrap();

    assert_eq!(edit.changes.len(), 2);
    assert_eq!(edit.edit_count(), 2);

    let controller_edits = &edit.changes[&PathBuf::from(CONTROLLER_PATH)];
    assert_eq!(controller_edits[0].range.start, cursor(CONTROLLER, "\"walk\""));
    assert_eq!(controller_edits[0].new_text, "running");

    let entity_edits = &edit.changes[&PathBuf::from(ENTITY_PATH)];
    assert_eq!(entity_edits[0].range.start, cursor(ENTITY, "\"walk\""));
}

#[test]
fn test_rename_then_reload() {
    let mut project = pig_project();
    let edit = project
        .rename(&buffer(ENTITY_PATH), cursor(ENTITY, "\"walk\""), "running")
        .unwrap();

    let controller = apply_edits(CONTROLLER, &edit.changes[&PathBuf::from(CONTROLLER_PATH)]);
    let entity = apply_edits(ENTITY, &edit.changes[&PathBuf::from(ENTITY_PATH)]);
    assert!(controller.contains("\"running\": {\n      \"initial_state\""));
    assert!(entity.contains("\"controller\": \"running\""));

    project
        .try_load(&SourceBuffer::new(CONTROLLER_PATH, controller.as_str()), true)
        .unwrap();
    let entity_buffer = SourceBuffer::new(ENTITY_PATH, entity.as_str());
    project.try_load(&entity_buffer, true).unwrap();
    project.ensure_resolved_references();

    let graph = project.graph();
    let root = graph.root_scope();
    assert_eq!(graph.try_get(root, ANIMATION_CONTROLLER, "walk"), None);
    assert!(graph.try_get(root, ANIMATION_CONTROLLER, "running").is_some());

    let hover = project
        .hover(&entity_buffer, cursor(&entity, "\"running\""))
        .unwrap();
    assert_eq!(
        hover.contents,
        vec![format!("[Animation Controller] running ({CONTROLLER_PATH})")]
    );

    // The controller's animation entry still reaches the entity's nickname
    let controller_buffer = SourceBuffer::new(CONTROLLER_PATH, controller.as_str());
    let hover = project
        .hover(&controller_buffer, cursor(&controller, "\"move\""))
        .unwrap();
    assert_eq!(
        hover.contents,
        vec![format!("[Animation Nickname] move ({ENTITY_PATH})")]
    );
}

#[test]
fn test_rename_nothing_under_cursor() {
    let mut project = pig_project();
    let edit = project.rename(&buffer(ENTITY_PATH), cursor(ENTITY, "\"format_version\""), "x");
    assert!(edit.is_none());

    let edit = project.rename(&buffer(ENTITY_PATH), cursor(ENTITY, "\"scripts\""), "x");
    assert!(edit.is_none());
    assert!(project.document(Path::new(ENTITY_PATH)).is_some());
}
