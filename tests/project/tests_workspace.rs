//! Bulk loading from disk and cancellation.

use std::fs;
use std::path::Path;

use packgraph::project::{
    FsWorkspace, LoadError, Project, ProjectConfig, SourceBuffer, Workspace,
};
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use crate::helpers::fixtures::*;
use crate::helpers::*;

fn write_pack(dir: &Path) {
    for path in pig_paths() {
        let target = dir.join(path);
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, fixture_text(path)).unwrap();
    }
    let ignored = dir.join("node_modules/pack/animations/extra.json");
    fs::create_dir_all(ignored.parent().unwrap()).unwrap();
    fs::write(&ignored, ANIMATION).unwrap();
}

#[test]
fn test_fs_workspace_applies_excludes() {
    let dir = TempDir::new().unwrap();
    write_pack(dir.path());
    let workspace = FsWorkspace::new(&ProjectConfig::new(dir.path())).unwrap();

    let found = workspace.find_files(&["**/animations/*.json"]).unwrap();
    assert_eq!(found.paths, vec![dir.path().join(ANIMATION_PATH)]);
    assert!(found.skipped.is_empty());
}

#[cfg(unix)]
#[test]
fn test_broken_entry_does_not_drop_other_files() {
    let dir = TempDir::new().unwrap();
    write_pack(dir.path());
    let broken = dir.path().join("RP/zz/broken");
    fs::create_dir_all(broken.parent().unwrap()).unwrap();
    std::os::unix::fs::symlink(dir.path().join("missing"), &broken).unwrap();

    let config = ProjectConfig::new(dir.path()).with_follow_links(true);
    let mut project = Project::new(config).unwrap();
    let workspace = FsWorkspace::new(project.config()).unwrap();

    let report = project.load_all(&workspace);

    assert_eq!(report.loaded.len(), 5);
    assert_eq!(report.failed.len(), 1);
    assert!(matches!(report.failed[0], LoadError::Walk { .. }));
}

#[cfg(unix)]
#[test]
fn test_excluded_directories_are_not_walked() {
    let dir = TempDir::new().unwrap();
    write_pack(dir.path());
    let broken = dir.path().join("node_modules/pack/broken");
    std::os::unix::fs::symlink(dir.path().join("missing"), &broken).unwrap();

    let config = ProjectConfig::new(dir.path()).with_follow_links(true);
    let workspace = FsWorkspace::new(&config).unwrap();

    let found = workspace.find_files(&["**/*.json"]).unwrap();
    assert!(found.skipped.is_empty(), "{:?}", found.skipped);
    assert!(found.paths.iter().all(|p| !p.starts_with(dir.path().join("node_modules"))));
    assert_eq!(found.paths.len(), 4);
}

#[test]
fn test_load_all_from_disk() {
    let dir = TempDir::new().unwrap();
    write_pack(dir.path());
    let mut project = Project::new(ProjectConfig::new(dir.path())).unwrap();
    let workspace = FsWorkspace::new(project.config()).unwrap();

    let report = project.load_all(&workspace);

    assert!(report.failed.is_empty(), "{:?}", report.failed);
    assert_eq!(report.loaded.len(), 5);

    let entity_path = dir.path().join(ENTITY_PATH);
    let texture_path = dir.path().join(TEXTURE_PATH);
    let buffer = SourceBuffer::new(&entity_path, ENTITY);
    let hover = project
        .hover(&buffer, cursor(ENTITY, "\"textures/entity/pig/pig\""))
        .unwrap();
    assert_eq!(
        hover.contents,
        vec![format!(
            "[Image Texture] textures/entity/pig/pig ({})",
            texture_path.display()
        )]
    );
}

#[test]
fn test_cancelled_load_stops_before_first_file() {
    let mut project = project();
    let token = CancellationToken::new();
    token.cancel();

    let report = project.load_all_with_cancel(&pig_workspace(&pig_paths()), &token);

    assert!(report.cancelled);
    assert!(report.loaded.is_empty());
    assert_eq!(project.loaded_paths().count(), 0);
}

#[test]
fn test_load_all_reloads_tracked_buffers() {
    let mut project = pig_project();
    let before = project.document(Path::new(ENTITY_PATH)).unwrap();
    project.load_all(&pig_workspace(&pig_paths()));
    let after = project.document(Path::new(ENTITY_PATH)).unwrap();
    assert_ne!(before, after);
    assert_eq!(project.loaded_paths().count(), 5);
    assert!(project.graph().verify().is_empty());
}
