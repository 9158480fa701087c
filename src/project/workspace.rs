//! File enumeration for bulk loading.

use std::io;
use std::path::{Path, PathBuf};

use globset::GlobSet;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use super::config::ProjectConfig;
use super::error::LoadError;
use super::loader::glob_set;

/// Files found by a [`Workspace`], plus the entries that could not be visited.
#[derive(Debug, Default)]
pub struct FileList {
    pub paths: Vec<PathBuf>,
    /// Entries skipped during enumeration; the rest of the tree is still listed
    pub skipped: Vec<LoadError>,
}

/// Where [`Project::load_all`](super::Project::load_all) finds its files.
pub trait Workspace {
    /// Files matching any of `patterns`, in a stable order.
    ///
    /// Only an invalid pattern fails the whole enumeration.
    fn find_files(&self, patterns: &[&str]) -> Result<FileList, LoadError>;

    fn read(&self, path: &Path) -> Result<String, LoadError>;
}

/// A directory tree on disk.
#[derive(Debug)]
pub struct FsWorkspace {
    root: PathBuf,
    exclude: GlobSet,
    follow_links: bool,
}

impl FsWorkspace {
    pub fn new(config: &ProjectConfig) -> Result<Self, LoadError> {
        Ok(Self {
            root: config.root.clone(),
            exclude: glob_set(config.exclude.iter().map(String::as_str))?,
            follow_links: config.follow_links,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FsWorkspace {
    fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let relative = self.relative(entry.path());
        if self.exclude.is_match(relative) {
            return true;
        }
        // `**/node_modules/**` matches what lies below the directory, so the
        // directory itself is tested with a trailing separator.
        entry.file_type().is_dir() && self.exclude.is_match(relative.join(""))
    }
}

impl Workspace for FsWorkspace {
    fn find_files(&self, patterns: &[&str]) -> Result<FileList, LoadError> {
        let include = glob_set(patterns.iter().copied())?;
        let mut list = FileList::default();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(entry));
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    let error = LoadError::Walk {
                        root: self.root.clone(),
                        source,
                    };
                    warn!("[LOAD] skipping entry: {}", error);
                    list.skipped.push(error);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            // Patterns are written relative to the workspace root
            if include.is_match(self.relative(entry.path())) {
                list.paths.push(entry.into_path());
            }
        }

        Ok(list)
    }

    fn read(&self, path: &Path) -> Result<String, LoadError> {
        std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// In-memory buffers, for hosts that own the text and for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryWorkspace {
    files: IndexMap<PathBuf, String, FxBuildHasher>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    /// Add or replace a buffer, returning the previous text.
    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Option<String> {
        self.files.insert(path.into(), text.into())
    }

    pub fn remove(&mut self, path: &Path) -> Option<String> {
        self.files.shift_remove(path)
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Workspace for MemoryWorkspace {
    fn find_files(&self, patterns: &[&str]) -> Result<FileList, LoadError> {
        let include = glob_set(patterns.iter().copied())?;
        let paths = self
            .files
            .keys()
            .filter(|path| include.is_match(path))
            .cloned()
            .collect();
        Ok(FileList {
            paths,
            skipped: Vec::new(),
        })
    }

    fn read(&self, path: &Path) -> Result<String, LoadError> {
        self.get(path)
            .map(str::to_string)
            .ok_or_else(|| LoadError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such buffer"),
            })
    }
}
