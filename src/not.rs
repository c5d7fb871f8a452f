use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct Not<P> {
    parser: P,
    expected: Cow<'static, str>,
}

impl<P> Not<P> {
    pub fn new(parser: P, expected: impl Into<Cow<'static, str>>) -> Self {
        Not {
            parser,
            expected: expected.into(),
        }
    }
}

impl<P> Parser for Not<P>
where
    P: Parser,
{
    type Output = ();

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            // Parser succeeded when we wanted it to fail
            Ok(_) => Err(Failure::expected(self.expected.clone(), cursor.position())),
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
///
/// `description` names what was rejected; the failure reads `not <description>`.
pub fn not<P>(parser: P, description: &str) -> Not<P>
where
    P: Parser,
{
    Not::new(parser, format!("not {description}"))
}
