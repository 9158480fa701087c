//! Document outline and workspace symbol tests.

use std::path::Path;

use crate::helpers::fixtures::*;
use crate::helpers::*;

#[test]
fn test_controller_outline_nests_states() {
    let mut project = pig_project();
    let outline = project.document_symbols(&buffer(CONTROLLER_PATH));

    assert_eq!(outline.len(), 1);
    let walk = &outline[0];
    assert_eq!(walk.name.as_ref(), "walk");
    assert_eq!(walk.kind, "animation_controller");
    assert_eq!(walk.selection_range.start, cursor(CONTROLLER, "\"walk\""));
    assert!(walk.range.contains_span(&walk.selection_range));

    let states: Vec<_> = walk.children.iter().map(|s| s.name.as_ref()).collect();
    assert_eq!(states, vec!["default", "running"]);
    assert!(walk.children.iter().all(|s| s.kind == "animation_controller_state"));
}

#[test]
fn test_entity_outline() {
    let mut project = pig_project();
    let outline = project.document_symbols(&buffer(ENTITY_PATH));

    assert_eq!(outline.len(), 1);
    assert_eq!(outline[0].name.as_ref(), "minecraft:pig");
    let nicknames: Vec<_> = outline[0]
        .children
        .iter()
        .map(|s| (s.kind, s.name.as_ref()))
        .collect();
    assert_eq!(
        nicknames,
        vec![
            ("animation_nickname", "move"),
            ("animation_nickname", "controller"),
            ("texture_nickname", "default"),
            ("geometry_nickname", "default"),
        ]
    );
}

#[test]
fn test_texture_outline_uses_full_range() {
    let mut project = pig_project();
    let outline = project.document_symbols(&buffer(TEXTURE_PATH));
    assert_eq!(outline.len(), 1);
    assert_eq!(outline[0].name.as_ref(), "textures/entity/pig/pig");
    assert_eq!(outline[0].selection_range, outline[0].range);
}

#[test]
fn test_outline_of_loaded_matches_query() {
    let mut project = pig_project();
    let cached = project.outline_of_loaded(Path::new(CONTROLLER_PATH));
    let fresh = project.document_symbols(&buffer(CONTROLLER_PATH));
    assert_eq!(cached, fresh);
    assert!(project.outline_of_loaded(Path::new("RP/missing.json")).is_empty());
}

#[test]
fn test_workspace_symbols_query() {
    let project = pig_project();
    let all = project.workspace_symbols(None);
    assert!(all.len() >= 8);

    let pigs: Vec<_> = project
        .workspace_symbols(Some("PIG"))
        .into_iter()
        .map(|s| s.name.to_string())
        .collect();
    assert_eq!(
        pigs,
        vec![
            "animation.pig.move",
            "geometry.pig",
            "minecraft:pig",
            "textures/entity/pig/pig",
        ]
    );
}
