use std::cmp::Ordering;

/// An immutable position inside the text being parsed
///
/// A cursor is the source buffer plus a byte offset into it. It is `Copy`, so
/// saving a cursor before an attempt and reusing it afterwards is how the
/// combinators backtrack. The offset always sits on a `char` boundary.
#[derive(Debug, Copy, Clone)]
pub struct Cursor<'code> {
    source: &'code str,
    position: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor at the start of `source`
    pub fn new(source: &'code str) -> Self {
        Cursor {
            source,
            position: 0,
        }
    }

    /// Get the character at the current position, or `None` at end of input
    pub fn value(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance past the current character
    ///
    /// If already at the end, returns a cursor still positioned at the end
    pub fn next(self) -> Self {
        match self.value() {
            Some(ch) => Cursor {
                source: self.source,
                position: self.position + ch.len_utf8(),
            },
            None => self,
        }
    }

    /// Advance by `len` bytes, clamped to the end of the input
    ///
    /// Callers pass lengths of text they just matched at this position, which
    /// keeps the cursor on a `char` boundary.
    pub(crate) fn advance(self, len: usize) -> Self {
        Cursor {
            source: self.source,
            position: (self.position + len).min(self.source.len()),
        }
    }

    /// Byte offset of this cursor in the source
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes left to parse
    pub fn remaining(&self) -> usize {
        self.source.len() - self.position
    }

    /// Check if the cursor is at the end of the input
    pub fn eos(&self) -> bool {
        self.position >= self.source.len()
    }

    /// The whole source text this cursor walks over
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// The unparsed part of the source
    pub fn rest(&self) -> &'code str {
        &self.source[self.position..]
    }

    /// Consume the cursor and return the source and current position
    pub fn inner(self) -> (&'code str, usize) {
        (self.source, self.position)
    }

    fn same_source(&self, other: &Self) -> bool {
        std::ptr::eq(self.source, other.source)
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_source(other) && self.position == other.position
    }
}

impl Eq for Cursor<'_> {}

/// Cursors are ordered by position only when they walk over the same buffer
impl PartialOrd for Cursor<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_source(other) {
            Some(self.position.cmp(&other.position))
        } else {
            None
        }
    }
}
