//! Project orchestration: which document owns a buffer, and when.
//!
//! A buffer moves between two states. It is *unloaded* until a
//! [`DocumentType`] claims it, then *loaded* until it is reloaded (destroyed
//! and rebuilt) or explicitly unloaded. Bulk loading defers reference
//! resolution until every file is in the graph so that forward references
//! resolve regardless of load order.

mod buffer;
mod config;
mod document_type;
mod error;
mod loader;
mod orchestrator;
mod shared;
mod workspace;

pub use buffer::SourceBuffer;
pub use config::ProjectConfig;
pub use document_type::{Content, DocumentKind, DocumentType, LoaderKind, default_document_types};
pub use error::LoadError;
pub use loader::DocumentLoader;
pub use orchestrator::{LoadReport, Project};
pub use shared::SharedProject;
pub use workspace::{FileList, FsWorkspace, MemoryWorkspace, Workspace};
