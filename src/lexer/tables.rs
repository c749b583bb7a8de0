//! Fixed vocabulary of the language.

/// Words reserved by the language. Anything else shaped like a word is an identifier.
pub const KEYWORDS: &[&str] = &["if", "else", "elseif", "func", "return", "true", "false"];

/// Operators, matched against the whole buffered text.
///
/// There is no longest-prefix scan: `!=` is an operator because buffering ran past the `!`,
/// not because this table prefers longer entries.
pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "=", "==", "!", "!=", "||", "&&", ">", ">=", "<", "<=",
];

/// Single-character punctuation. Each one ends buffering and is a token by itself.
pub const SEPARATORS: &[char] = &['(', ')', '{', '}', ';', ','];

/// Starts a comment that runs to the end of the line.
pub const COMMENT_MARKER: char = '#';

pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

pub fn is_operator(text: &str) -> bool {
    OPERATORS.contains(&text)
}

pub fn is_separator(ch: char) -> bool {
    SEPARATORS.contains(&ch)
}

/// Characters that end a run of buffered text without being part of it.
pub(crate) fn ends_buffer(ch: char) -> bool {
    is_separator(ch) || ch.is_whitespace()
}
