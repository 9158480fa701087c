//! # packgraph-base
//!
//! Cross-document symbol graph and semantic navigation for Bedrock resource
//! pack JSON files.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Project orchestrator, document classification, workspaces
//!   ↓
//! ide       → IDE features (completion, hover, goto-def, references, rename)
//!   ↓
//! documents → Concrete document kinds and their symbol types
//!   ↓
//! graph     → Scopes, symbols, definitions, references, resolution
//!   ↓
//! parser    → Logos lexer, tolerant JSONC parser, path helpers
//!   ↓
//! base      → Primitives (Position, Span, LineIndex, sequence helpers)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → graph → documents → ide → project)
// ============================================================================

/// Foundation types: Position/Span, LineIndex, lazy sequences
pub mod base;

/// Parser: Logos lexer, recursive-descent JSONC parser, path helpers
pub mod parser;

/// Symbol graph: arenas, scopes, symbols, resolution strategies
pub mod graph;

/// Document kinds: animation controllers, animations, entities, geometry, textures
pub mod documents;

/// IDE features: completion, hover, goto-definition, find-references, rename
pub mod ide;

/// Project management: loading, reloading, query dispatch
pub mod project;

// Re-export foundation types
pub use base::{LineIndex, Position, Span, TextRange, TextSize};
pub use graph::Graph;
pub use project::{Project, ProjectConfig, SourceBuffer};
