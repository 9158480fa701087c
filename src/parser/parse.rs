//! Recursive-descent JSON parser producing a [`JsonNode`] tree.
//!
//! Comments and trailing commas are accepted. On the first syntax error the
//! parser stops, closes every open container at the error offset and returns
//! the prefix it managed to build together with the error.
//!
//! Containers nest at most [`MAX_DEPTH`] levels deep; anything deeper is
//! reported as [`ParseErrorKind::TooDeep`].

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use tracing::trace;

use super::lexer::{Token, TokenKind, tokenize};
use super::tree::{JsonNode, NodeKind};
use super::{ParseError, ParseErrorKind, ParseResult};

/// Deepest container nesting the parser descends into.
pub const MAX_DEPTH: usize = 256;

/// Parse JSON text into a tree.
pub fn parse(text: &str) -> ParseResult {
    let tokens = tokenize(text);
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        end: TextSize::of(text),
        errors: Vec::new(),
    };

    let root = parser.parse_root();
    trace!(
        "[PARSE] parsed {} bytes, root={:?}, errors={}",
        u32::from(parser.end),
        root.as_ref().map(|r| r.kind),
        parser.errors.len()
    );
    ParseResult {
        root,
        errors: parser.errors,
    }
}

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    depth: usize,
    end: TextSize,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    fn parse_root(&mut self) -> Option<JsonNode> {
        if self.peek().is_none() {
            self.error(ParseErrorKind::EmptyDocument, TextSize::new(0));
            return None;
        }
        let root = self.parse_value();
        if root.is_some() && !self.failed() {
            if let Some(token) = self.peek() {
                let offset = token.range.start();
                self.error(ParseErrorKind::TrailingContent, offset);
            }
        }
        root
    }

    fn failed(&self) -> bool {
        !self.errors.is_empty()
    }

    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Offset of the next token, or the end of input
    fn current_offset(&self) -> TextSize {
        self.peek().map(|t| t.range.start()).unwrap_or(self.end)
    }

    /// End offset of the last consumed token
    fn last_end(&self) -> TextSize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.range.end())
            .unwrap_or(TextSize::new(0))
    }

    fn error(&mut self, kind: ParseErrorKind, offset: TextSize) {
        if self.errors.is_empty() {
            self.errors.push(ParseError { kind, offset });
        }
    }

    fn unexpected(&mut self, expected: &'static str) {
        let offset = self.current_offset();
        let kind = match self.peek_kind() {
            Some(TokenKind::Error) => ParseErrorKind::InvalidToken,
            Some(found) => ParseErrorKind::Unexpected {
                expected,
                found: found.describe(),
            },
            None => ParseErrorKind::UnexpectedEof { expected },
        };
        self.error(kind, offset);
    }

    fn parse_value(&mut self) -> Option<JsonNode> {
        match self.peek_kind() {
            Some(TokenKind::LBrace | TokenKind::LBracket) => self.parse_container(),
            Some(TokenKind::String) => self.bump().map(|t| string_node(&t)),
            Some(TokenKind::Number) => self.bump().map(|t| scalar(NodeKind::Number, &t)),
            Some(TokenKind::True | TokenKind::False) => {
                self.bump().map(|t| scalar(NodeKind::Boolean, &t))
            }
            Some(TokenKind::Null) => self
                .bump()
                .map(|t| JsonNode::new(NodeKind::Null, t.range)),
            _ => {
                self.unexpected("value");
                None
            }
        }
    }

    fn parse_container(&mut self) -> Option<JsonNode> {
        if self.depth >= MAX_DEPTH {
            let offset = self.current_offset();
            self.error(ParseErrorKind::TooDeep { limit: MAX_DEPTH }, offset);
            return None;
        }
        self.depth += 1;
        let node = if self.peek_kind() == Some(TokenKind::LBrace) {
            self.parse_object()
        } else {
            self.parse_array()
        };
        self.depth -= 1;
        Some(node)
    }

    fn parse_object(&mut self) -> JsonNode {
        let start = self.current_offset();
        self.bump();
        let mut node = JsonNode::new(NodeKind::Object, TextRange::empty(start));

        loop {
            match self.peek_kind() {
                Some(TokenKind::RBrace) => {
                    self.bump();
                    break;
                }
                Some(TokenKind::String) => {
                    let Some(key) = self.bump() else { break };
                    let property = self.parse_property(&key);
                    node.children.push(property);
                    if self.failed() {
                        break;
                    }
                    match self.peek_kind() {
                        Some(TokenKind::Comma) => {
                            self.bump();
                        }
                        Some(TokenKind::RBrace) => {}
                        _ => {
                            self.unexpected("`,` or `}`");
                            break;
                        }
                    }
                }
                _ => {
                    self.unexpected("property name or `}`");
                    break;
                }
            }
        }

        node.range = TextRange::new(start, self.closing_end());
        node
    }

    fn parse_property(&mut self, key: &Token<'a>) -> JsonNode {
        let key = string_node(key);
        let start = key.range.start();
        let mut property = JsonNode::new(NodeKind::Property, key.range);
        property.children.push(key);

        if self.peek_kind() == Some(TokenKind::Colon) {
            let colon = self.bump().map(|t| t.range.start());
            property.colon = colon;
            if let Some(value) = self.parse_value() {
                property.children.push(value);
            }
        } else {
            self.unexpected("`:`");
        }

        property.range = TextRange::new(start, self.closing_end());
        property
    }

    fn parse_array(&mut self) -> JsonNode {
        let start = self.current_offset();
        self.bump();
        let mut node = JsonNode::new(NodeKind::Array, TextRange::empty(start));

        loop {
            if self.peek_kind() == Some(TokenKind::RBracket) {
                self.bump();
                break;
            }
            match self.parse_value() {
                Some(value) => node.children.push(value),
                None => break,
            }
            if self.failed() {
                break;
            }
            match self.peek_kind() {
                Some(TokenKind::Comma) => {
                    self.bump();
                }
                Some(TokenKind::RBracket) => {}
                _ => {
                    self.unexpected("`,` or `]`");
                    break;
                }
            }
        }

        node.range = TextRange::new(start, self.closing_end());
        node
    }

    /// End offset for a container: the last consumed token, or the error offset
    /// once parsing has failed.
    fn closing_end(&self) -> TextSize {
        match self.errors.first() {
            Some(error) => error.offset.max(self.last_end()),
            None => self.last_end(),
        }
    }
}

fn scalar(kind: NodeKind, token: &Token<'_>) -> JsonNode {
    let mut node = JsonNode::new(kind, token.range);
    node.value = Some(SmolStr::new(token.text));
    node
}

fn string_node(token: &Token<'_>) -> JsonNode {
    let mut node = JsonNode::new(NodeKind::String, token.range);
    let raw = token
        .text
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(token.text);
    node.value = Some(unescape(raw));
    node
}

/// Decode JSON string escapes. Malformed escapes are kept verbatim.
fn unescape(raw: &str) -> SmolStr {
    if !raw.contains('\\') {
        return SmolStr::new(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    SmolStr::new(out)
}
