use std::path::PathBuf;

use thiserror::Error;

use crate::documents::BuildError;
use crate::parser::ParseError;

/// Why a buffer is not tracked.
///
/// These never cross the query boundary: [`Project`](super::Project) logs
/// them and treats the buffer as unloaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no document type matches {}", .0.display())]
    Unmatched(PathBuf),

    #[error("no document type accepts the content of {}", .0.display())]
    Rejected(PathBuf),

    #[error("failed to parse {}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid path pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: globset::Error,
    },

    #[error("failed to walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        source: walkdir::Error,
    },

    #[error("{kind} document {} could not be built: {source}", path.display())]
    Build {
        path: PathBuf,
        kind: &'static str,
        source: BuildError,
    },
}

impl LoadError {
    /// Classification failures are expected for most files in a pack and are
    /// not worth reporting.
    pub fn is_unmatched(&self) -> bool {
        matches!(self, LoadError::Unmatched(_))
    }
}
