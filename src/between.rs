use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;

/// Parser that matches content between opening and closing delimiters
///
/// This parses `open + inner + close` and returns just the `inner` value with
/// the delimiters discarded. Once `open` matched, a failure of `inner` or
/// `close` is committed.
///
/// This does not handle whitespace; wrap the delimiters in
/// [`skip_trailing`](crate::skip::skip_trailing) for that.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Surround<P1, P2, P3> {
    open: P1,
    inner: P2,
    close: P3,
}

impl<P1, P2, P3> Surround<P1, P2, P3> {
    pub fn new(open: P1, inner: P2, close: P3) -> Self {
        Surround { open, inner, close }
    }
}

impl<P1, P2, P3> Parser for Surround<P1, P2, P3>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
{
    type Output = P2::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (value, cursor) = self.inner.parse(cursor).map_err(Failure::committed)?;
        let (_, cursor) = self.close.parse(cursor).map_err(Failure::committed)?;

        Ok((value, cursor))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn surround<P1, P2, P3>(open: P1, inner: P2, close: P3) -> Surround<P1, P2, P3>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
{
    Surround::new(open, inner, close)
}
