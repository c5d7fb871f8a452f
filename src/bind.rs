use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;

/// Monadic sequencing: run a parser, then choose the next parser from its value
///
/// Once the first parser succeeds, even without consuming anything, the
/// sequence is committed. A failure of the chosen parser is always reported
/// with `consumed = true`, so an enclosing alternation does not silently try a
/// sibling branch from the middle of this sequence.
///
/// Example:
/// ```
/// use commitcomb::ascii::digit;
/// use commitcomb::bind::BindExt;
/// use commitcomb::satisfy::literal;
/// use commitcomb::map::MapExt;
/// use commitcomb::{Cursor, Parser};
///
/// // The digit decides which letter must follow it
/// let parser = digit().bind(|d| literal(if d == '0' { 'z' } else { 'x' }).map(move |x| (d, x)));
/// let ((d, x), _) = parser.parse(Cursor::new("1x")).unwrap();
/// assert_eq!((d, x), ('1', 'x'));
///
/// let failure = parser.parse(Cursor::new("1y")).unwrap_err();
/// assert!(failure.consumed);
/// ```
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<P, F, Q> Parser for Bind<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser,
{
    type Output = Q::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.binder)(value)
            .parse(cursor)
            .map_err(Failure::committed)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<P, F, Q>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt: Parser + Sized {
    fn bind<F, Q>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser,
    {
        Bind::new(self, binder)
    }
}

impl<P> BindExt for P where P: Parser {}
