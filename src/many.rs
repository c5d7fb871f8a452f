use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Repetition stops at the first failure that did not consume input. A failure
/// that did consume input is a partial match and fails the whole repetition.
/// A success that does not advance the cursor is kept and ends the repetition,
/// since repeating it would loop forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut results = Vec::new();
        let cursor = repeat(&self.parser, cursor, &mut results)?;
        Ok((results, cursor))
    }
}

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<P> Parser for Many1<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        // First parse must succeed
        let (first_value, next_cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];
        if next_cursor.position() == cursor.position() {
            return Ok((results, next_cursor));
        }

        let cursor = repeat(&self.parser, next_cursor, &mut results)?;
        Ok((results, cursor))
    }
}

/// Shared loop for the repetition combinators and operator chains
pub(crate) fn repeat<'code, P>(
    parser: &P,
    mut cursor: Cursor<'code>,
    results: &mut Vec<P::Output>,
) -> Result<Cursor<'code>, Failure>
where
    P: Parser,
{
    loop {
        match parser.parse(cursor) {
            Ok((value, next_cursor)) => {
                results.push(value);
                if next_cursor.position() == cursor.position() {
                    return Ok(next_cursor);
                }
                cursor = next_cursor;
            }
            Err(failure) if failure.consumed => return Err(failure),
            // Expected end of the repetition
            Err(_) => return Ok(cursor),
        }
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}

/// Convenience function to create a Many1 parser
pub fn many1<P>(parser: P) -> Many1<P>
where
    P: Parser,
{
    Many1::new(parser)
}
