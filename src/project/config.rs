use std::path::PathBuf;

/// Options controlling how a [`Project`](super::Project) discovers and keeps documents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProjectConfig {
    /// Workspace root searched by the filesystem enumerator
    pub root: PathBuf,
    /// Glob patterns (relative to `root`) skipped during bulk load
    pub exclude: Vec<String>,
    /// Drop symbols once nothing declares or references them
    pub collect_orphan_symbols: bool,
    /// Follow symbolic links while walking `root`
    pub follow_links: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude: vec!["**/.git/**".to_string(), "**/node_modules/**".to_string()],
            collect_orphan_symbols: true,
            follow_links: false,
        }
    }
}

impl ProjectConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    pub fn with_collect_orphan_symbols(mut self, collect: bool) -> Self {
        self.collect_orphan_symbols = collect;
        self
    }

    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
