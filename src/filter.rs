use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value is a committed failure, reported at the position where the
/// inner parser started: the attempt happened even if it matched nothing.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    error_message: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, error_message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            error_message,
        }
    }
}

impl<P, F> Parser for FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, new_cursor) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, new_cursor))
        } else {
            Err(Failure::expected(self.error_message.clone(), cursor.position()).committed())
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt: Parser {
    fn filter<F>(
        self,
        predicate: F,
        error_message: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, error_message.into())
    }
}

impl<P: Parser> FilterExt for P {}

/// Convenience function to create a filtered parser
pub fn filter<P, F>(
    parser: P,
    predicate: F,
    error_message: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, error_message.into())
}
