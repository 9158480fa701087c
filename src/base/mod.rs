//! Foundation types for packgraph.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`], [`Span`] - Line/column positions for graph nodes
//! - [`LineIndex`] - Offset ↔ line/column conversion
//! - [`SeqExt`], [`traverse`] - Lazy sequence helpers
//!
//! This module has NO dependencies on other packgraph modules.

mod line_index;
mod position;
pub mod seq;

pub use line_index::LineIndex;
pub use position::{Position, Span};
pub use seq::{SeqExt, traverse};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
