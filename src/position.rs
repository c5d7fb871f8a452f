use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Represents a span of the input with start and end byte offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Get the length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the text this span covers in `source`
    ///
    /// Returns `None` if the span does not fit `source` or does not fall on
    /// character boundaries.
    pub fn slice<'code>(&self, source: &'code str) -> Option<&'code str> {
        source.get(self.start..self.end)
    }
}

/// A parser combinator that captures the position span of a successful parse
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<P> Parser for Position<P>
where
    P: Parser,
{
    type Output = (P::Output, Span);

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let start_pos = cursor.position();
        let (output, new_cursor) = self.parser.parse(cursor)?;
        let end_pos = new_cursor.position();

        Ok(((output, Span::new(start_pos, end_pos)), new_cursor))
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt: Parser + Sized {
    /// Wrap this parser to capture its position span
    fn with_position(self) -> Position<Self> {
        Position::new(self)
    }
}

impl<P> PositionExt for P where P: Parser {}

/// Convenience function to create a Position combinator
pub fn position<P>(parser: P) -> Position<P> {
    Position::new(parser)
}
