//! Resolution does not depend on the order documents are loaded in.

use std::collections::BTreeSet;
use std::path::PathBuf;

use packgraph::documents::symbols::ANIMATION_CONTROLLER;
use packgraph::{Graph, Position};

use crate::helpers::fixtures::*;
use crate::helpers::*;

/// Every (reference site, resolved symbol) pair in the graph.
fn resolved_edges(graph: &Graph) -> BTreeSet<(PathBuf, Position, String, String)> {
    graph
        .references()
        .flat_map(|(id, reference)| {
            let path = graph.document(reference.document).unwrap().path.clone();
            let start = reference.range.start;
            graph
                .resolved(id)
                .expect("resolution is current after a bulk load")
                .iter()
                .map(move |&symbol| {
                    let symbol = graph.symbol(symbol).unwrap();
                    (
                        path.clone(),
                        start,
                        symbol.symbol_type.name().to_string(),
                        symbol.identifier.to_string(),
                    )
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn test_forward_reference_resolves_in_either_order() {
    let mut forward = project();
    forward.load_all(&pig_workspace(&[ENTITY_PATH, CONTROLLER_PATH]));
    let mut backward = project();
    backward.load_all(&pig_workspace(&[CONTROLLER_PATH, ENTITY_PATH]));

    for project in [&forward, &backward] {
        let graph = project.graph();
        let walk = graph
            .try_get(graph.root_scope(), ANIMATION_CONTROLLER, "walk")
            .unwrap();
        let users: Vec<PathBuf> = graph
            .symbol(walk)
            .unwrap()
            .references
            .iter()
            .map(|&r| graph.reference(r).unwrap().document)
            .map(|d| graph.document(d).unwrap().path.clone())
            .collect();
        assert!(users.contains(&PathBuf::from(ENTITY_PATH)));
    }

    assert_eq!(resolved_edges(forward.graph()), resolved_edges(backward.graph()));
}

#[test]
fn test_full_pack_resolves_identically_in_reverse() {
    let mut paths = pig_paths();
    let mut forward = project();
    forward.load_all(&pig_workspace(&paths));
    paths.reverse();
    let mut backward = project();
    backward.load_all(&pig_workspace(&paths));

    let edges = resolved_edges(forward.graph());
    assert!(edges.iter().any(|(_, _, ty, id)| ty == "image_texture" && id == "textures/entity/pig/pig"));
    assert!(edges.iter().any(|(_, _, ty, id)| ty == "animation_nickname" && id == "move"));
    assert_eq!(edges, resolved_edges(backward.graph()));
}

#[test]
fn test_reload_keeps_dependent_resolution() {
    let mut project = pig_project();
    // Reloading the entity invalidates the nickname the controller's
    // animation entry depends on; resolving again must find the new one.
    project.try_load(&buffer(ENTITY_PATH), true).unwrap();
    let hover = project
        .hover(&buffer(CONTROLLER_PATH), cursor(CONTROLLER, "\"move\""))
        .unwrap();
    assert_eq!(
        hover.contents,
        vec![format!("[Animation Nickname] move ({ENTITY_PATH})")]
    );
}
