use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string
///
/// The match is atomic: if any character differs the parser fails at the
/// starting position without consuming, so keywords sharing a prefix can be
/// alternatives without wrapping each in `attempt`.
pub struct IsStringParser {
    expected: Cow<'static, str>,
}

impl IsStringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Parser for IsStringParser {
    type Output = Cow<'static, str>;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        if cursor.rest().starts_with(&*self.expected) {
            // Cheap for &'static str, only copies the reference
            Ok((self.expected.clone(), cursor.advance(self.expected.len())))
        } else {
            Err(Failure::expected(
                format!("\"{}\"", self.expected),
                cursor.position(),
            ))
        }
    }
}

/// Convenience function to create an IsStringParser
pub fn string(expected: impl Into<Cow<'static, str>>) -> IsStringParser {
    IsStringParser::new(expected)
}
