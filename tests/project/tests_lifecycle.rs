//! Buffer lifecycle through the project.

use std::path::Path;
use std::sync::Arc;

use packgraph::documents::{BuildError, DocumentBuilder};
use packgraph::documents::symbols::ANIMATION;
use packgraph::project::{
    Content, DocumentKind, DocumentType, LoadError, LoaderKind, Project, ProjectConfig,
    SourceBuffer, default_document_types,
};

use crate::helpers::fixtures::*;
use crate::helpers::*;

#[test]
fn test_cached_document_is_identical() {
    let mut project = project();
    let first = project.try_load(&buffer(ENTITY_PATH), false).unwrap();
    let again = project.try_load(&buffer(ENTITY_PATH), false).unwrap();
    assert_eq!(first, again);
    assert!(project.graph().document(first).is_some());
}

#[test]
fn test_forced_reload_replaces_document() {
    let mut project = project();
    let first = project.try_load(&buffer(ENTITY_PATH), false).unwrap();
    let second = project.try_load(&buffer(ENTITY_PATH), true).unwrap();
    assert_ne!(first, second);
    assert!(project.graph().document(first).is_none());
    assert_eq!(project.document(Path::new(ENTITY_PATH)), Some(second));
}

#[test]
fn test_queries_reparse_the_buffer() {
    let mut project = pig_project();
    let before = project.document(Path::new(ENTITY_PATH)).unwrap();
    let edited = ENTITY.replace("\"walk\"", "\"idle\"");
    let buffer = SourceBuffer::new(ENTITY_PATH, edited.as_str());

    let hover = project.hover(&buffer, cursor(&edited, "\"idle\"")).unwrap();
    assert_eq!(hover.contents, vec!["[Animation] idle".to_string()]);
    assert_ne!(project.document(Path::new(ENTITY_PATH)), Some(before));
}

#[test]
fn test_untracked_buffers_answer_nothing() {
    let mut project = pig_project();
    let manifest = SourceBuffer::new("RP/manifest.json", r#"{"header": {}}"#);
    assert!(project.hover(&manifest, Default::default()).is_none());
    assert!(project.goto_definition(&manifest, Default::default()).is_empty());
    assert!(project.document_symbols(&manifest).is_empty());
    assert!(project.rename(&manifest, Default::default(), "x").is_none());
    assert_eq!(project.loaded_paths().count(), 5);
}

#[test]
fn test_deeply_nested_buffer_loads_its_prefix() {
    let mut project = project();
    let text = format!(
        "{{\"animations\": {{\"animation.pig.deep\": {{\"bones\": {}}}}}}}",
        "[".repeat(100_000)
    );
    let buffer = SourceBuffer::new("RP/animations/deep.json", text.as_str());

    assert!(project.try_load(&buffer, true).is_some());
    let names: Vec<_> = project
        .workspace_symbols(Some("deep"))
        .into_iter()
        .map(|s| s.name.to_string())
        .collect();
    assert_eq!(names, vec!["animation.pig.deep"]);
    assert!(project.graph().verify().is_empty());
}

#[test]
fn test_load_report_lists_failures() {
    let mut project = project();
    let workspace = pig_workspace(&[ANIMATION_PATH])
        .with_file("RP/animations/broken.json", "{ \"format_version\": ")
        .with_file("RP/entity/nameless.json", r#"{"minecraft:client_entity": {"description": {}}}"#);

    let report = project.load_all(&workspace);

    assert_eq!(report.loaded, vec![Path::new(ANIMATION_PATH).to_path_buf()]);
    assert_eq!(report.failed.len(), 2);
    assert!(!report.cancelled);
    assert!(report.failed.iter().any(|e| matches!(
        e,
        LoadError::Build {
            source: BuildError::MissingField("description.identifier"),
            ..
        }
    )));
}

#[test]
fn test_orphan_collection_can_be_disabled() {
    let config = ProjectConfig::default().with_collect_orphan_symbols(false);
    let mut project = Project::new(config).unwrap();
    project.try_load(&buffer(ANIMATION_PATH), false).unwrap();
    project.unload(Path::new(ANIMATION_PATH));

    let graph = project.graph();
    let symbol = graph
        .try_get(graph.root_scope(), ANIMATION, "animation.pig.move")
        .unwrap();
    assert!(graph.symbol(symbol).unwrap().is_orphan());
}

/// Claims `*.anim.txt` files: the first line names an animation.
struct PlainTextAnimation;

impl DocumentType for PlainTextAnimation {
    fn kind(&self) -> &'static str {
        "plain_animation"
    }

    fn patterns(&self) -> &[&'static str] {
        &["**/*.anim.txt"]
    }

    fn loader(&self) -> LoaderKind {
        LoaderKind::Raw
    }

    fn accepts(&self, _content: Content<'_>) -> bool {
        true
    }

    fn build(&self, builder: &mut DocumentBuilder<'_>, _content: Content<'_>) -> Result<(), BuildError> {
        let name = builder
            .path()
            .and_then(Path::file_stem)
            .and_then(|s| s.to_str())
            .map(|s| s.trim_end_matches(".anim").to_string())
            .ok_or(BuildError::MissingField("name"))?;
        builder
            .define_document(ANIMATION, &name)
            .ok_or(BuildError::MissingField("name"))?;
        Ok(())
    }
}

#[test]
fn test_custom_document_type() {
    let mut types = default_document_types();
    types.push(Arc::new(PlainTextAnimation));
    let mut project = Project::with_document_types(ProjectConfig::default(), types).unwrap();
    assert_eq!(project.document_types().len(), DocumentKind::ALL.len() + 1);

    project
        .try_load(&SourceBuffer::path_only("RP/extra/animation.pig.move.anim.txt"), false)
        .unwrap();
    let entity = project.try_load(&buffer(ENTITY_PATH), false).unwrap();
    assert!(project.graph().document(entity).is_some());

    let hover = project
        .hover(&buffer(ENTITY_PATH), cursor(ENTITY, "\"animation.pig.move\""))
        .unwrap();
    assert_eq!(
        hover.contents,
        vec!["[Animation] animation.pig.move (RP/extra/animation.pig.move.anim.txt)".to_string()]
    );
}
