//! Support for splitting TinyLang source text into tokens.

use std::io::{ErrorKind, Read};

use thiserror::Error;

use scanner::Scanner;
use source::CharSource;

pub use scanner::{Scan, Unrecognized};
pub use token::{LiteralValue, Token, TokenKind, TokenLocation};

mod classify;
mod scanner;
mod source;
pub mod tables;
mod token;

/// Split the source into its tokens.
///
/// Fails on the first run of text that does not classify as any kind of token.
/// Use [`scan`] to collect every such run instead.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    scan(source).into_tokens()
}

/// Split the source into its tokens, setting aside text that does not classify.
pub fn scan(source: &str) -> Scan {
    Scanner::new(CharSource::new(source)).run()
}

/// Split UTF-8 encoded source into its tokens.
pub fn tokenize_bytes(input: &[u8]) -> LexResult<Vec<Token>> {
    let source = CharSource::from_bytes(input)?;
    Scanner::new(source).run().into_tokens()
}

/// Read a whole source unit from `reader` and split it into its tokens.
pub fn tokenize_reader(reader: impl Read) -> LexResult<Vec<Token>> {
    let source = CharSource::from_reader(reader)?;
    Scanner::new(source).run().into_tokens()
}

/// Error type if tokenizing does not complete.
///
/// A source that can't be read at all is distinct from a source that reads fine
/// but contains text that isn't any TinyLang token.
/// No tokens are returned in either case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("could not read source: {0}")]
    SourceRead(String),
    #[error("unrecognized token {text:?} at {location}")]
    UnrecognizedToken {
        text: String,
        location: TokenLocation,
    },
}

/// The main result type for this module.
pub type LexResult<T> = Result<T, LexError>;

impl From<LexError> for std::io::Error {
    fn from(value: LexError) -> Self {
        match value {
            LexError::SourceRead(s) => std::io::Error::new(ErrorKind::InvalidData, s),
            e @ LexError::UnrecognizedToken { .. } => {
                std::io::Error::new(ErrorKind::InvalidInput, e.to_string())
            }
        }
    }
}
