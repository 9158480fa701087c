//! Referential integrity across document lifecycles.

use packgraph::Graph;
use packgraph::base::Span;
use packgraph::documents::symbols::{ANIMATION, ANIMATION_CONTROLLER};
use packgraph::graph::{Owner, Resolution};

use crate::helpers::*;

// =============================================================================
// INTERNING
// =============================================================================

#[test]
fn test_get_or_create_returns_same_symbol() {
    let mut graph = Graph::new();
    let root = graph.root_scope();

    let first = graph.get_or_create(root, ANIMATION, "walk").unwrap();
    let second = graph.get_or_create(root, ANIMATION, "walk").unwrap();
    let other_type = graph.get_or_create(root, ANIMATION_CONTROLLER, "walk").unwrap();

    assert_eq!(first, second);
    assert_ne!(first, other_type);
}

// =============================================================================
// TEARDOWN
// =============================================================================

#[test]
fn test_destroy_document_twice() {
    let mut graph = Graph::new();
    graph.set_collect_orphan_symbols(false);
    let root = graph.root_scope();
    let a = graph.add_document("a.json", "animation", root, None);
    let b = graph.add_document("b.json", "animation", root, None);

    let walk = graph.get_or_create(root, ANIMATION, "walk").unwrap();
    let definition = graph
        .add_definition(Owner::Document(a), walk, Span::from_coords(1, 2, 1, 20))
        .unwrap();
    let identifier = graph
        .add_identifier(definition, Span::from_coords(1, 3, 1, 7))
        .unwrap();
    let usage = graph
        .add_reference(
            Owner::Document(b),
            Span::from_coords(3, 4, 3, 8),
            Resolution::lookup(root, ANIMATION, "walk"),
        )
        .unwrap();
    graph.ensure_all_resolved();
    assert_eq!(graph.symbol(walk).unwrap().references.len(), 2);

    assert!(graph.destroy_document(a));
    let after_first = graph.generation();
    assert!(!graph.destroy_document(a));
    assert_eq!(graph.generation(), after_first);

    let symbol = graph.symbol(walk).unwrap();
    assert!(!symbol.definitions.contains(&definition));
    assert!(!symbol.references.contains(&identifier));
    assert!(graph.definition(definition).is_none());
    assert!(graph.reference(identifier).is_none());
    assert!(graph.verify().is_empty());

    // The usage in b is still live but no longer finds a declaration
    assert_eq!(graph.resolve(usage), vec![]);
}

#[test]
fn test_orphan_symbols_are_collected() {
    let mut graph = Graph::new();
    let root = graph.root_scope();
    let doc = graph.add_document("a.json", "animation", root, None);
    let walk = graph.get_or_create(root, ANIMATION, "walk").unwrap();
    graph
        .add_definition(Owner::Document(doc), walk, Span::from_coords(0, 0, 0, 4))
        .unwrap();

    graph.destroy_document(doc);

    assert!(graph.symbol(walk).is_none());
    assert_eq!(graph.try_get(root, ANIMATION, "walk"), None);
    assert!(graph.verify().is_empty());
}

#[test]
fn test_bulk_load_and_unload_keeps_integrity() {
    let mut project = pig_project();
    assert!(project.graph().verify().is_empty());

    for path in pig_paths() {
        project.try_load(&buffer(path), true).unwrap();
        assert!(project.graph().verify().is_empty(), "after reloading {path}");
    }

    project.ensure_resolved_references();
    for path in pig_paths() {
        assert!(project.unload(std::path::Path::new(path)));
        assert!(project.graph().verify().is_empty(), "after unloading {path}");
    }

    assert_eq!(project.graph().documents().count(), 0);
    assert_eq!(project.graph().definitions().count(), 0);
    assert_eq!(project.graph().references().count(), 0);
    assert_eq!(project.graph().symbols().count(), 0);
}
