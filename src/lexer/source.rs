//! Character-at-a-time access to a source unit.

use std::borrow::Cow;
use std::io::Read;

use super::{LexError, LexResult};

/// Peekable character stream over one source unit.
///
/// `None` from `peek` or `read` marks the end of input.
/// The backing text is either borrowed from the caller or owned by the source;
/// owned text is freed when the source is dropped, whichever way the scan exits.
#[derive(Debug)]
pub(crate) struct CharSource<'a> {
    text: Cow<'a, str>,
    // Byte offset of the next unread character.
    offset: usize,
}

impl<'a> CharSource<'a> {
    pub fn new(text: &'a str) -> Self {
        CharSource {
            text: Cow::Borrowed(text),
            offset: 0,
        }
    }

    /// Check that the bytes are UTF-8 before handing out any characters.
    pub fn from_bytes(bytes: &'a [u8]) -> LexResult<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            LexError::SourceRead(format!("input is not UTF-8: {}", e))
        })?;
        Ok(CharSource::new(text))
    }

    pub fn from_reader(mut reader: impl Read) -> LexResult<CharSource<'static>> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| LexError::SourceRead(e.to_string()))?;
        let text = String::from_utf8(bytes).map_err(|e| {
            LexError::SourceRead(format!("input is not UTF-8: {}", e.utf8_error()))
        })?;
        Ok(CharSource {
            text: Cow::Owned(text),
            offset: 0,
        })
    }

    pub fn peek(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    pub fn read(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }
}
