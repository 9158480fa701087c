use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Current contents of one source buffer, keyed by its path.
///
/// Raw document kinds never look at `text`; for those an empty buffer is
/// enough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    path: PathBuf,
    text: Arc<str>,
}

impl SourceBuffer {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<Arc<str>>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// A buffer whose contents are irrelevant (raw documents)
    pub fn path_only(path: impl Into<PathBuf>) -> Self {
        Self::new(path, "")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
