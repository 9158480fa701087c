//! Hover feature tests for the IDE layer.

use packgraph::Position;
use packgraph::project::SourceBuffer;

use crate::helpers::fixtures::*;
use crate::helpers::*;

#[test]
fn test_hover_on_cross_document_reference() {
    let mut project = pig_project();
    let hover = project
        .hover(&buffer(ENTITY_PATH), cursor(ENTITY, "\"walk\""))
        .unwrap();

    assert_eq!(
        hover.contents,
        vec![format!("[Animation Controller] walk ({CONTROLLER_PATH})")]
    );
    let start = cursor(ENTITY, "\"walk\"");
    assert_eq!(hover.range.start, start);
    assert_eq!(hover.range.end, Position::new(start.line, start.column + 4));
}

#[test]
fn test_hover_on_declaration_name() {
    let mut project = pig_project();
    let hover = project
        .hover(&buffer(ANIMATION_PATH), cursor(ANIMATION, "\"animation.pig.move\""))
        .unwrap();
    assert_eq!(
        hover.contents,
        vec![format!("[Animation] animation.pig.move ({ANIMATION_PATH})")]
    );
}

#[test]
fn test_hover_on_unresolved_reference_is_generic() {
    let mut project = pig_project();
    let path = "RP/entity/ghost.json";
    let buffer = SourceBuffer::new(path, GHOST_ENTITY);
    let hover = project
        .hover(&buffer, cursor(GHOST_ENTITY, "\"animation.ghost.float\""))
        .unwrap();
    assert_eq!(hover.contents, vec!["[Animation] animation.ghost.float".to_string()]);
    assert_eq!(hover.to_markdown(), "[Animation] animation.ghost.float");
}

#[test]
fn test_hover_on_undeclared_texture() {
    let mut project = project();
    let hover = project
        .hover(&buffer(ENTITY_PATH), cursor(ENTITY, "\"textures/entity/pig/pig\""))
        .unwrap();
    assert_eq!(
        hover.contents,
        vec!["[Image Texture] textures/entity/pig/pig".to_string()]
    );
}

#[test]
fn test_hover_outside_references() {
    let mut project = pig_project();
    let hover = project.hover(&buffer(ENTITY_PATH), cursor(ENTITY, "\"format_version\""));
    assert!(hover.is_none());
}
