use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::orchestrator::Project;

/// A [`Project`] shared between threads.
///
/// Loading and every query (which reparses its buffer) mutate the graph and
/// take the write lock, so they never interleave. Read-only inspection of
/// already loaded state takes the read lock.
#[derive(Clone, Debug)]
pub struct SharedProject(Arc<RwLock<Project>>);

impl SharedProject {
    pub fn new(project: Project) -> Self {
        Self(Arc::new(RwLock::new(project)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Project> {
        self.0.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Project> {
        self.0.write()
    }

    /// Run `f` with exclusive access.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Project) -> R) -> R {
        f(&mut self.0.write())
    }

    pub fn loaded_paths(&self) -> Vec<PathBuf> {
        self.0.read().loaded_paths().map(PathBuf::from).collect()
    }
}

impl From<Project> for SharedProject {
    fn from(project: Project) -> Self {
        Self::new(project)
    }
}
