use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;

/// Runs `parser` then `trailer`, keeping only the first value
///
/// The usual way to build tokens that swallow the whitespace after them.
pub struct SkipTrailing<P, T> {
    parser: P,
    trailer: T,
}

impl<P, T> SkipTrailing<P, T> {
    pub fn new(parser: P, trailer: T) -> Self {
        SkipTrailing { parser, trailer }
    }
}

impl<P, T> Parser for SkipTrailing<P, T>
where
    P: Parser,
    T: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let (_, cursor) = self.trailer.parse(cursor).map_err(Failure::committed)?;
        Ok((value, cursor))
    }
}

pub fn skip_trailing<P, T>(parser: P, trailer: T) -> SkipTrailing<P, T>
where
    P: Parser,
    T: Parser,
{
    SkipTrailing::new(parser, trailer)
}

pub trait SkipExt: Parser + Sized {
    fn skip<T>(self, trailer: T) -> SkipTrailing<Self, T>
    where
        T: Parser,
    {
        SkipTrailing::new(self, trailer)
    }
}

impl<P> SkipExt for P where P: Parser {}
