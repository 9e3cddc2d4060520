//! Sequential byte source consumed by the grammar.
//!
//! The grammar never un-reads a byte. The only way back is an absolute
//! [`Cursor::seek`], which filename scanning uses to measure a token before
//! copying it.

/// Byte source with one byte of lookahead and absolute repositioning
pub trait Cursor {
    /// Current byte, or `None` at end of input
    fn peek(&self) -> Option<u8>;

    /// Consume the current byte. Does nothing at end of input.
    fn advance(&mut self);

    /// Absolute offset of the current byte
    fn position(&self) -> usize;

    /// Move to an absolute offset, clamped to the end of input
    fn seek(&mut self, position: usize);

    /// True when no bytes remain
    fn at_end(&self) -> bool {
        self.peek().is_none()
    }
}

/// Cursor over an in-memory byte slice
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the first byte
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.position..]
    }
}

impl<'a> From<&'a str> for ByteCursor<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl Cursor for ByteCursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    fn advance(&mut self) {
        if self.position < self.bytes.len() {
            self.position += 1;
        }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn seek(&mut self, position: usize) {
        self.position = position.min(self.bytes.len());
    }
}
