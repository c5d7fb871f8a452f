use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;

/// Runs two parsers in order and combines their values
///
/// Equivalent to binding the first parser into the second: once the first
/// succeeds, any later failure is committed.
pub struct Sequence2<P1, P2, F> {
    parser1: P1,
    parser2: P2,
    combine: F,
}

impl<P1, P2, F> Sequence2<P1, P2, F> {
    pub fn new(parser1: P1, parser2: P2, combine: F) -> Self {
        Sequence2 {
            parser1,
            parser2,
            combine,
        }
    }
}

impl<P1, P2, F, U> Parser for Sequence2<P1, P2, F>
where
    P1: Parser,
    P2: Parser,
    F: Fn(P1::Output, P2::Output) -> U,
{
    type Output = U;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (first, cursor) = self.parser1.parse(cursor)?;
        let (second, cursor) = self
            .parser2
            .parse(cursor)
            .map_err(Failure::committed)?;
        Ok(((self.combine)(first, second), cursor))
    }
}

pub fn sequence2<P1, P2, F, U>(parser1: P1, parser2: P2, combine: F) -> Sequence2<P1, P2, F>
where
    P1: Parser,
    P2: Parser,
    F: Fn(P1::Output, P2::Output) -> U,
{
    Sequence2::new(parser1, parser2, combine)
}

/// Runs three parsers in order and combines their values
pub struct Sequence3<P1, P2, P3, F> {
    parser1: P1,
    parser2: P2,
    parser3: P3,
    combine: F,
}

impl<P1, P2, P3, F> Sequence3<P1, P2, P3, F> {
    pub fn new(parser1: P1, parser2: P2, parser3: P3, combine: F) -> Self {
        Sequence3 {
            parser1,
            parser2,
            parser3,
            combine,
        }
    }
}

impl<P1, P2, P3, F, U> Parser for Sequence3<P1, P2, P3, F>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
    F: Fn(P1::Output, P2::Output, P3::Output) -> U,
{
    type Output = U;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (first, cursor) = self.parser1.parse(cursor)?;
        let (second, cursor) = self
            .parser2
            .parse(cursor)
            .map_err(Failure::committed)?;
        let (third, cursor) = self
            .parser3
            .parse(cursor)
            .map_err(Failure::committed)?;
        Ok(((self.combine)(first, second, third), cursor))
    }
}

pub fn sequence3<P1, P2, P3, F, U>(
    parser1: P1,
    parser2: P2,
    parser3: P3,
    combine: F,
) -> Sequence3<P1, P2, P3, F>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
    F: Fn(P1::Output, P2::Output, P3::Output) -> U,
{
    Sequence3::new(parser1, parser2, parser3, combine)
}
