//! Forward-only cursor over the input text.
//!
//! The cursor is shared by every sub-parser; each one advances it past what
//! it consumes. Positions are byte offsets into the input and always sit on
//! a `char` boundary.

use crate::error::{FormatError, ParseResult};

/// Read position into a JSON text.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the current position in the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the input in bytes.
    pub fn len(&self) -> usize {
        self.input.len()
    }

    /// Returns true if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Returns true if nothing is left to read.
    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Unread remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek at the current byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Peek at the current character without consuming it.
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Like [`peek`](Self::peek), but end of input is an error.
    pub fn require(&self) -> ParseResult<u8> {
        self.peek().ok_or(FormatError::UnexpectedEnd(self.pos))
    }

    /// Consume one character.
    pub fn bump(&mut self) {
        if let Some(ch) = self.peek_char() {
            self.pos += ch.len_utf8();
        }
    }

    /// Consume and return the current character.
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume the current byte if it equals `expected`.
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume `literal` if the input continues with it.
    pub fn eat_literal(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Skip whitespace characters.
    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    /// Consume a run of ASCII digits and return them.
    pub fn take_digits(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Input between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }
}
