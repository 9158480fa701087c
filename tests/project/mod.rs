//! Project orchestration tests
//!
//! Tests for:
//! - Buffer lifecycle (load, reload, unload)
//! - Bulk loading from memory and from disk
//! - Cancellation

pub mod tests_lifecycle;
pub mod tests_workspace;
