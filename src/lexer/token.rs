//! Tokens and where they came from.

use std::fmt;

/// What sort of text a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Operator,
    Separator,
    Literal,
    /// Reserved for a parser that wants to keep comments.
    /// The lexer discards comments and never produces this.
    Comment,
}

/// Where a token's characters sit in the source.
///
/// Lines and columns are 1-indexed; both columns are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenLocation {
    pub line: usize,
    pub begin_column: usize,
    pub end_column: usize,
}

impl fmt::Display for TokenLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.line, self.begin_column, self.end_column)
    }
}

/// A classified piece of source text.
///
/// The text is exactly as it appeared in the source: numbers are not normalized
/// and string literals keep their quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
    location: TokenLocation,
}

/// The value a literal token denotes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue<'a> {
    Number(f64),
    /// Contents between the quotes. No escapes are processed.
    String(&'a str),
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: TokenLocation) -> Self {
        Token {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn location(&self) -> TokenLocation {
        self.location
    }

    /// The value of a literal token; None for any other kind.
    pub fn value(&self) -> Option<LiteralValue<'_>> {
        if self.kind != TokenKind::Literal {
            return None;
        }
        if let Some(inner) = self
            .text
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            return Some(LiteralValue::String(inner));
        }
        self.text.parse().ok().map(LiteralValue::Number)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{:?}\t{}", self.location, self.kind, self.text)
    }
}
