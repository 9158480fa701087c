//! Shared fixtures and helpers for integration tests.

#![allow(dead_code)]

pub mod fixtures;

use packgraph::ide::TextEdit;
use packgraph::project::{MemoryWorkspace, Project, ProjectConfig, SourceBuffer};
use packgraph::{LineIndex, Position, TextSize};

use fixtures::*;

/// Position one byte into the first occurrence of `needle`.
///
/// With a quoted needle such as `"\"walk\""` this lands on the first
/// character of the string's contents.
pub fn cursor(text: &str, needle: &str) -> Position {
    let offset = text
        .find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in fixture"));
    LineIndex::new(text).position(TextSize::new(offset as u32 + 1))
}

/// Position right after the first occurrence of `needle`.
pub fn end_of(text: &str, needle: &str) -> Position {
    let offset = text
        .find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in fixture"));
    LineIndex::new(text).position(TextSize::new((offset + needle.len()) as u32))
}

/// Apply non-overlapping edits to `text`.
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> String {
    let index = LineIndex::new(text);
    let mut ranges: Vec<(usize, usize, &str)> = edits
        .iter()
        .map(|edit| {
            let start = index.offset(edit.range.start).unwrap();
            let end = index.offset(edit.range.end).unwrap();
            (usize::from(start), usize::from(end), edit.new_text.as_str())
        })
        .collect();
    ranges.sort_by_key(|(start, _, _)| std::cmp::Reverse(*start));

    let mut result = text.to_string();
    for (start, end, new_text) in ranges {
        result.replace_range(start..end, new_text);
    }
    result
}

pub fn project() -> Project {
    Project::new(ProjectConfig::default()).unwrap()
}

/// A workspace holding the full pig fixture pack, in the given file order.
pub fn pig_workspace(order: &[&str]) -> MemoryWorkspace {
    order
        .iter()
        .fold(MemoryWorkspace::new(), |workspace, path| {
            workspace.with_file(*path, fixture_text(path))
        })
}

/// Every fixture path, declaration order
pub fn pig_paths() -> Vec<&'static str> {
    vec![
        CONTROLLER_PATH,
        ANIMATION_PATH,
        ENTITY_PATH,
        GEOMETRY_PATH,
        TEXTURE_PATH,
    ]
}

pub fn fixture_text(path: &str) -> &'static str {
    match path {
        CONTROLLER_PATH => CONTROLLER,
        ANIMATION_PATH => ANIMATION,
        ENTITY_PATH => ENTITY,
        GEOMETRY_PATH => GEOMETRY,
        _ => "",
    }
}

pub fn buffer(path: &str) -> SourceBuffer {
    SourceBuffer::new(path, fixture_text(path))
}

/// A project with the whole pig pack bulk-loaded.
pub fn pig_project() -> Project {
    let mut project = project();
    let report = project.load_all(&pig_workspace(&pig_paths()));
    assert_eq!(report.loaded.len(), 5, "failed: {:?}", report.failed);
    project
}
