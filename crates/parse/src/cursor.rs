// SPDX-License-Identifier: MIT OR Apache-2.0

//! An immutable cursor over a tag's `-`-separated subtag parts (§9 "Parser
//! chained fallible steps": "re-architect as an immutable cursor ... no
//! shared mutation").
//!
//! Each parsing step borrows the cursor, looks ahead, and returns a new
//! cursor advanced past whatever it consumed. Nothing is mutated in place.

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    parts: &'a [&'a str],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(parts: &'a [&'a str]) -> Self {
        Self { parts, pos: 0 }
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.parts.get(self.pos).copied()
    }

    pub fn peek_at(&self, offset: usize) -> Option<&'a str> {
        self.parts.get(self.pos + offset).copied()
    }

    /// Advance past the current part, returning it along with the new
    /// cursor position.
    pub fn advance(&self) -> (Option<&'a str>, Self) {
        match self.peek() {
            Some(p) => (Some(p), Self { parts: self.parts, pos: self.pos + 1 }),
            None => (None, *self),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.parts.len()
    }

    /// Byte offset of the current part within the original `-`-joined
    /// string, used for [`ctxres_core::CtxError::ParseError`] positions.
    pub fn byte_position(&self) -> usize {
        self.parts[..self.pos.min(self.parts.len())]
            .iter()
            .map(|p| p.len() + 1)
            .sum()
    }

    pub fn remaining(&self) -> &'a [&'a str] {
        &self.parts[self.pos.min(self.parts.len())..]
    }
}
