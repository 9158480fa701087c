//! Completion tests.

use packgraph::ide::CompletionKind;
use packgraph::project::SourceBuffer;

use crate::helpers::fixtures::*;
use crate::helpers::*;

fn labels(items: &[packgraph::ide::CompletionItem]) -> Vec<&str> {
    items.iter().map(|i| i.label.as_ref()).collect()
}

#[test]
fn test_complete_animation_or_controller() {
    let mut project = pig_project();
    let items = project.completions(&buffer(ENTITY_PATH), cursor(ENTITY, "\"walk\""));

    let labels = labels(&items);
    assert!(labels.contains(&"animation.pig.move"));
    assert!(labels.contains(&"walk"));
    assert_eq!(labels.len(), 2);

    let walk = items.iter().find(|i| i.label.as_ref() == "walk").unwrap();
    assert_eq!(walk.kind, CompletionKind::Value);
    assert_eq!(walk.detail.as_deref(), Some("Animation Controller"));
    let location = walk.location.as_ref().unwrap();
    assert_eq!(location.path, std::path::PathBuf::from(CONTROLLER_PATH));
}

#[test]
fn test_complete_state_names() {
    let mut project = pig_project();
    let items = project.completions(&buffer(CONTROLLER_PATH), cursor(CONTROLLER, "\"running\""));
    assert_eq!(labels(&items), vec!["default", "running"]);
}

#[test]
fn test_complete_texture_path_segments() {
    let mut project = pig_project();
    let text = ENTITY.replace("textures/entity/pig/pig", "textures/");
    let buffer = SourceBuffer::new(ENTITY_PATH, text.as_str());

    let items = project.completions(&buffer, end_of(&text, "\"textures/"));

    assert_eq!(labels(&items), vec!["entity/"]);
    assert_eq!(items[0].kind, CompletionKind::Folder);
    assert_eq!(items[0].text(), "textures/entity/");
}

#[test]
fn test_complete_texture_leaf() {
    let mut project = pig_project();
    let items = project.completions(
        &buffer(ENTITY_PATH),
        end_of(ENTITY, "\"textures/entity/pig/p"),
    );
    assert_eq!(labels(&items), vec!["pig"]);
    assert_eq!(items[0].kind, CompletionKind::File);
    assert_eq!(items[0].text(), "textures/entity/pig/pig");
}

#[test]
fn test_no_completion_outside_references() {
    let mut project = pig_project();
    let items = project.completions(&buffer(ENTITY_PATH), cursor(ENTITY, "\"format_version\""));
    assert!(items.is_empty());
}
