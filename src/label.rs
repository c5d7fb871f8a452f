use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;
use std::borrow::Cow;
use std::fmt;

/// Parser combinator that names what a parser expects
///
/// If the parser fails without consuming, its diagnostics are replaced by a
/// single one carrying `expected` at the starting position, so errors read
/// "expected number" rather than "expected digit". A failure after consuming
/// already points inside the construct and is left alone.
pub struct Label<P> {
    parser: P,
    expected: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, expected: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            expected: expected.into(),
        }
    }
}

impl<P> fmt::Debug for Label<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Label")
            .field("parser", &"<parser>")
            .field("expected", &self.expected)
            .finish()
    }
}

impl<P> Parser for Label<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        self.parser.parse(cursor).map_err(|failure| {
            if failure.consumed {
                failure
            } else {
                Failure::expected(self.expected.clone(), cursor.position())
            }
        })
    }
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt: Parser + Sized {
    fn label(self, expected: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, expected)
    }
}

/// Implement LabelExt for all parsers
impl<P> LabelExt for P where P: Parser {}

/// Convenience function to create a Label parser
pub fn label<P>(parser: P, expected: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser,
{
    Label::new(parser, expected)
}
