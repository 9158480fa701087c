//! Find-references and document highlight tests.

use std::path::PathBuf;

use crate::helpers::fixtures::*;
use crate::helpers::*;

#[test]
fn test_references_across_documents() {
    let mut project = pig_project();
    let at = cursor(CONTROLLER, "\"walk\"");

    let with_declaration = project.find_references(&buffer(CONTROLLER_PATH), at, true);
    assert_eq!(with_declaration.len(), 2);
    assert!(with_declaration.include_declaration);
    let declarations: Vec<_> = with_declaration
        .references
        .iter()
        .filter(|r| r.is_declaration)
        .map(|r| r.location.path.clone())
        .collect();
    assert_eq!(declarations, vec![PathBuf::from(CONTROLLER_PATH)]);

    let usages = project.find_references(&buffer(CONTROLLER_PATH), at, false);
    assert_eq!(usages.len(), 1);
    let usage = &usages.references[0];
    assert_eq!(usage.location.path, PathBuf::from(ENTITY_PATH));
    assert_eq!(usage.location.range.start, cursor(ENTITY, "\"walk\""));
}

#[test]
fn test_references_from_usage_site() {
    let mut project = pig_project();
    let result = project.find_references(&buffer(ENTITY_PATH), cursor(ENTITY, "\"walk\""), true);
    let paths: Vec<_> = result.locations().map(|l| l.path.clone()).collect();
    assert!(paths.contains(&PathBuf::from(CONTROLLER_PATH)));
    assert!(paths.contains(&PathBuf::from(ENTITY_PATH)));
}

#[test]
fn test_nickname_references_include_controller() {
    let mut project = pig_project();
    // "move" is declared by the entity and used by its scripts and by the
    // controller it binds.
    let result = project.find_references(&buffer(ENTITY_PATH), cursor(ENTITY, "\"move\""), false);
    let paths: Vec<_> = result.locations().map(|l| l.path.clone()).collect();
    assert_eq!(paths, vec![PathBuf::from(CONTROLLER_PATH)]);
}

#[test]
fn test_highlights_stay_in_document() {
    let mut project = pig_project();
    let highlights = project.document_highlights(&buffer(CONTROLLER_PATH), cursor(CONTROLLER, "\"running\""));

    assert_eq!(highlights.len(), 2);
    assert!(highlights.iter().all(|h| h.path == PathBuf::from(CONTROLLER_PATH)));
    let starts: Vec<_> = highlights.iter().map(|h| h.range.start).collect();
    assert!(starts.contains(&cursor(CONTROLLER, "\"running\"")));
    assert!(starts.contains(&cursor(CONTROLLER, "\"running\": {}")));
}

#[test]
fn test_no_references_outside_symbols() {
    let mut project = pig_project();
    let result = project.find_references(&buffer(ENTITY_PATH), cursor(ENTITY, "\"format_version\""), true);
    assert!(result.is_empty());
}
