//! The tokenizer state machine.
//!
//! The scanner makes one forward pass over a [`CharSource`]. Between tokens it skips
//! whitespace and comments. A separator is a token on its own. Anything else is
//! buffered until the next separator or whitespace, then handed to the classifiers.

use super::classify::classify;
use super::source::CharSource;
use super::tables::{ends_buffer, is_separator, COMMENT_MARKER};
use super::token::{Token, TokenKind, TokenLocation};
use super::{LexError, LexResult};

/// Buffered text that no classifier recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unrecognized {
    text: String,
    location: TokenLocation,
}

impl Unrecognized {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn location(&self) -> TokenLocation {
        self.location
    }
}

impl From<Unrecognized> for LexError {
    fn from(value: Unrecognized) -> Self {
        LexError::UnrecognizedToken {
            text: value.text,
            location: value.location,
        }
    }
}

/// Everything one pass over a source produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    tokens: Vec<Token>,
    unrecognized: Vec<Unrecognized>,
}

impl Scan {
    /// Recognized tokens, in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Text that was skipped because it isn't a token, in source order.
    pub fn unrecognized(&self) -> &[Unrecognized] {
        &self.unrecognized
    }

    /// True if every non-blank, non-comment character ended up in a token.
    pub fn is_clean(&self) -> bool {
        self.unrecognized.is_empty()
    }

    /// The tokens, or an error for the first run of unrecognized text.
    pub fn into_tokens(self) -> LexResult<Vec<Token>> {
        match self.unrecognized.into_iter().next() {
            Some(bad) => Err(bad.into()),
            None => Ok(self.tokens),
        }
    }
}

/// Position of the scan, and the text of the token being built.
#[derive(Debug)]
struct ScanState {
    line: usize,
    // Column of the last character read; 0 before the first character of a line.
    column: usize,
    begin_column: usize,
    buffer: String,
}

impl Default for ScanState {
    fn default() -> Self {
        ScanState {
            line: 1,
            column: 0,
            begin_column: 0,
            buffer: String::new(),
        }
    }
}

impl ScanState {
    /// Copy out the location of the buffered text, ending at the last character read.
    fn location(&self) -> TokenLocation {
        TokenLocation {
            line: self.line,
            begin_column: self.begin_column,
            end_column: self.column,
        }
    }
}

pub(crate) struct Scanner<'a> {
    source: CharSource<'a>,
    state: ScanState,
    result: Scan,
}

impl<'a> Scanner<'a> {
    pub fn new(source: CharSource<'a>) -> Self {
        Scanner {
            source,
            state: ScanState::default(),
            result: Scan::default(),
        }
    }

    /// Scan to the end of the source.
    pub fn run(mut self) -> Scan {
        while self.skip_blank() {
            let Some(ch) = self.bump() else { break };
            self.state.begin_column = self.state.column;
            self.state.buffer.push(ch);

            if is_separator(ch) {
                self.emit(TokenKind::Separator);
            } else if self.fill_buffer() {
                self.classify_buffer();
            }
        }
        tracing::debug!(
            "scanned {} lines: {} tokens, {} unrecognized",
            self.state.line,
            self.result.tokens.len(),
            self.result.unrecognized.len()
        );
        self.result
    }

    /// Read one character, keeping the line and column up to date.
    fn bump(&mut self) -> Option<char> {
        let ch = self.source.read()?;
        if ch == '\n' {
            self.state.line += 1;
            self.state.column = 0;
        } else {
            self.state.column += 1;
        }
        Some(ch)
    }

    /// Skip whitespace and comments.
    /// Returns false if that reached the end of input.
    fn skip_blank(&mut self) -> bool {
        while let Some(ch) = self.source.peek() {
            if ch == COMMENT_MARKER {
                self.skip_comment();
            } else if ch.is_whitespace() {
                self.bump();
            } else {
                return true;
            }
        }
        false
    }

    /// Discard through the end of the line, including the newline.
    fn skip_comment(&mut self) {
        while let Some(ch) = self.bump() {
            if ch == '\n' {
                break;
            }
        }
    }

    /// Buffer characters up to the next separator or whitespace.
    ///
    /// A comment marker inside the run abandons the buffer along with the rest of the line;
    /// returns false in that case.
    fn fill_buffer(&mut self) -> bool {
        while let Some(next) = self.source.peek() {
            if ends_buffer(next) {
                break;
            }
            if next == COMMENT_MARKER {
                tracing::debug!(
                    "comment at line {} discards partial token {:?}",
                    self.state.line,
                    self.state.buffer
                );
                self.state.buffer.clear();
                self.skip_comment();
                return false;
            }
            self.bump();
            self.state.buffer.push(next);
        }
        true
    }

    fn classify_buffer(&mut self) {
        match classify(&self.state.buffer) {
            Some(kind) => self.emit(kind),
            None => {
                let location = self.state.location();
                let text = std::mem::take(&mut self.state.buffer);
                tracing::debug!("unrecognized text {:?} at {}", text, location);
                self.result.unrecognized.push(Unrecognized { text, location });
            }
        }
    }

    fn emit(&mut self, kind: TokenKind) {
        let location = self.state.location();
        let text = std::mem::take(&mut self.state.buffer);
        tracing::trace!("{:?} {:?} at {}", kind, text, location);
        self.result.tokens.push(Token::new(kind, text, location));
    }
}
