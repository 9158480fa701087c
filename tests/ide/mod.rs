//! IDE feature tests
//!
//! Tests for:
//! - Hover information
//! - Go to definition
//! - Find references and document highlights
//! - Document and workspace symbols
//! - Code completion
//! - Rename

pub mod tests_completion;
pub mod tests_goto;
pub mod tests_hover;
pub mod tests_references;
pub mod tests_rename;
pub mod tests_symbols;
