use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that makes a parser optional
///
/// Returns `Some` with the parser's value if it succeeds, and `None` without
/// consuming anything if it fails without consuming. A failure after consuming
/// input is a partial match and is returned unchanged.
///
/// Example:
/// ```
/// use commitcomb::and::AndExt;
/// use commitcomb::ascii::digit;
/// use commitcomb::optional::OptionalExt;
/// use commitcomb::satisfy::literal;
/// use commitcomb::{Cursor, Parser};
///
/// let signed = literal('-').optional().and(digit());
///
/// let ((sign, d), _) = signed.parse(Cursor::new("-4")).unwrap();
/// assert_eq!((sign, d), (Some('-'), '4'));
///
/// let ((sign, d), _) = signed.parse(Cursor::new("4")).unwrap();
/// assert_eq!((sign, d), (None, '4'));
/// ```
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<P> Parser for Optional<P>
where
    P: Parser,
{
    type Output = Option<P::Output>;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(failure) if failure.consumed => Err(failure),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<P>(parser: P) -> Optional<P>
where
    P: Parser,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt: Parser + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<P> OptionalExt for P where P: Parser {}
