use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that consumes one character matching a predicate
pub struct Satisfy<F> {
    predicate: F,
    expected: Cow<'static, str>,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F, expected: Cow<'static, str>) -> Self {
        Satisfy {
            predicate,
            expected,
        }
    }
}

impl<F> Parser for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match cursor.value() {
            Some(ch) if (self.predicate)(ch) => Ok((ch, cursor.next())),
            _ => Err(Failure::expected(self.expected.clone(), cursor.position())),
        }
    }
}

/// Convenience function to create a Satisfy parser
///
/// `expected` describes the accepted characters in diagnostics, e.g. `"digit"`.
pub fn satisfy<F>(predicate: F, expected: impl Into<Cow<'static, str>>) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate, expected.into())
}

/// Parser that matches a specific character
pub struct Literal(char);

impl Parser for Literal {
    type Output = char;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match cursor.value() {
            Some(ch) if ch == self.0 => Ok((ch, cursor.next())),
            _ => Err(Failure::expected(
                format!("'{}'", self.0),
                cursor.position(),
            )),
        }
    }
}

/// Convenience function to create a parser that matches a specific character
pub fn literal(expected: char) -> Literal {
    Literal(expected)
}

/// Parser that consumes any single character
pub struct AnyChar;

impl Parser for AnyChar {
    type Output = char;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match cursor.value() {
            Some(ch) => Ok((ch, cursor.next())),
            None => Err(Failure::expected("any character", cursor.position())),
        }
    }
}

pub fn any_char() -> AnyChar {
    AnyChar
}
