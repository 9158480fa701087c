//! JSON parser: Logos lexer, tolerant recursive-descent parser, path helpers.
//!
//! The tree keeps byte ranges for every node so that graph nodes can be
//! attached to exact sub-ranges of the source buffer.

mod lexer;
mod parse;
mod path;
mod tree;

use text_size::TextSize;
use thiserror::Error;

pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use parse::{MAX_DEPTH, parse};
pub use path::{NodeMatch, Segment, find_key_path, find_node, matching_nodes};
pub use tree::{JsonNode, NodeKind};

/// What went wrong while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("document is empty")]
    EmptyDocument,
    #[error("invalid token")]
    InvalidToken,
    #[error("expected {expected}, found {found}")]
    Unexpected {
        expected: &'static str,
        found: &'static str,
    },
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str },
    #[error("unexpected content after the root value")]
    TrailingContent,
    #[error("containers nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// A syntax error at a byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {}", u32::from(*offset))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: TextSize,
}

/// Result of parsing: the (possibly partial) tree plus any errors.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub root: Option<JsonNode>,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
