//! Lexical front end for TinyLang.
//!

pub mod lexer;

pub use lexer::{
    scan, tokenize, tokenize_bytes, tokenize_reader, LexError, LexResult, LiteralValue, Scan,
    Token, TokenKind, TokenLocation, Unrecognized,
};
