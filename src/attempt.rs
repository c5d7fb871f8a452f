use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;

/// Makes a failed parse look like it consumed nothing
///
/// The failure keeps its diagnostics but loses its commit flag, so an
/// enclosing alternation backtracks past it and tries the next branch.
/// Success passes through unchanged.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<P> Parser for Attempt<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        self.parser.parse(cursor).map_err(Failure::uncommitted)
    }
}

pub fn attempt<P>(parser: P) -> Attempt<P>
where
    P: Parser,
{
    Attempt::new(parser)
}

pub trait AttemptExt: Parser + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

impl<P> AttemptExt for P where P: Parser {}
