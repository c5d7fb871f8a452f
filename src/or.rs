use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;
use log::trace;

/// Ordered choice: try the first parser, and if it fails without consuming, try the second
///
/// Both alternatives start from the same cursor. The first success wins. A
/// failure that consumed input stops the search and is returned as is, so the
/// second parser is never tried past a commit point. When both fail without
/// consuming, the diagnostics of both are reported, first parser's first.
///
/// Chaining `.or()` gives n-ary choice with the same rules.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2, O> Parser for Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    type Output = O;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(failure) if failure.consumed => {
                trace!("alternative committed at byte {}", cursor.position());
                Err(failure)
            }
            Err(failure) => self
                .parser2
                .parse(cursor)
                .map_err(|later| failure.merge(later)),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    Or::new(parser1, parser2)
}

/// Ordered choice over any number of parsers of the same type
///
/// Usually built from [`BoxedParser`](crate::boxed::BoxedParser)s. An empty
/// choice always fails without diagnostics.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<P> Parser for Choice<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut accumulated = Failure::new(Vec::new(), false);

        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(failure) => {
                    accumulated = accumulated.merge(failure);
                    if accumulated.consumed {
                        trace!("alternative committed at byte {}", cursor.position());
                        return Err(accumulated);
                    }
                }
            }
        }

        Err(accumulated)
    }
}

/// Convenience function to create a Choice parser
pub fn choice<P>(parsers: Vec<P>) -> Choice<P>
where
    P: Parser,
{
    Choice::new(parsers)
}
