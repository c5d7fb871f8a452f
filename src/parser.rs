use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::outcome::Outcome;
use log::debug;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a cursor to an [`Outcome`]. The input
/// lifetime belongs to the method, not the parser, so a grammar is built once
/// and then run against any number of inputs.
pub trait Parser {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the cursor after it, or a `Failure` whose
    /// `consumed` flag tells enclosing combinators whether they may backtrack.
    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output>;

    /// Run this parser from the start of `text`, reporting failures with their location
    ///
    /// Trailing input is left in the returned cursor; compose
    /// [`end_of_input`](crate::eof::end_of_input) into the grammar to reject it.
    fn parse_str<'code>(&self, text: &'code str) -> Result<(Self::Output, Cursor<'code>), ParseError> {
        run(self, text).map_err(|failure| failure.locate(text))
    }
}

impl<P> Parser for &P
where
    P: Parser + ?Sized,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Apply a parser to the whole of `text`, starting at offset 0
pub fn run<'code, P>(parser: &P, text: &'code str) -> Outcome<'code, P::Output>
where
    P: Parser + ?Sized,
{
    debug!("parsing {} bytes", text.len());
    let outcome = parser.parse(Cursor::new(text));
    match &outcome {
        Ok((_, rest)) => debug!(
            "parse succeeded at byte {} with {} bytes remaining",
            rest.position(),
            rest.remaining()
        ),
        Err(failure) => debug!(
            "parse failed with {} diagnostics (consumed: {})",
            failure.diagnostics.len(),
            failure.consumed
        ),
    }
    outcome
}
