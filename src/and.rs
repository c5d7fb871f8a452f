use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Sequencing commits once the first parser succeeds: a failure of the second
/// parser is reported with `consumed = true` even if it consumed nothing.
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. For a flat
/// result use [`sequence3`](crate::sequence::sequence3) or `.map()`.
///
/// Example:
/// ```
/// use commitcomb::and::AndExt;
/// use commitcomb::ascii::digit;
/// use commitcomb::satisfy::literal;
/// use commitcomb::{Cursor, Parser};
///
/// let ((whole, _), frac) = digit()
///     .and(literal('.'))
///     .and(digit())
///     .parse(Cursor::new("1.5"))
///     .unwrap()
///     .0;
/// assert_eq!((whole, frac), ('1', '5'));
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<P1, P2> Parser for And<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    type Output = (P1::Output, P2::Output);

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self
            .parser2
            .parse(cursor)
            .map_err(Failure::committed)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<P> AndExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::digit;
    use crate::outcome::Diagnostic;
    use crate::satisfy::literal;

    #[test]
    fn test_and_both_succeed() {
        let parser = literal('A').and(digit());

        let ((a, five), cursor) = parser.parse(Cursor::new("A5xyz")).unwrap();
        assert_eq!(a, 'A');
        assert_eq!(five, '5');
        assert_eq!(cursor.value(), Some('x'));
    }

    #[test]
    fn test_and_first_fails() {
        let failure = literal('A')
            .and(literal('x'))
            .parse(Cursor::new("Bxyz"))
            .unwrap_err();

        assert!(!failure.consumed);
        assert_eq!(failure.diagnostics, vec![Diagnostic::new("'A'", 0)]);
    }

    #[test]
    fn test_and_second_fails_committed() {
        let failure = literal('A')
            .and(digit())
            .parse(Cursor::new("Axyz"))
            .unwrap_err();

        assert!(failure.consumed);
        assert_eq!(failure.diagnostics, vec![Diagnostic::new("digit", 1)]);
    }

    #[test]
    fn test_and_chain() {
        let parser = literal('A').and(digit()).and(literal('B'));

        let (((a, five), b), cursor) = parser.parse(Cursor::new("A5B")).unwrap();
        assert_eq!((a, five, b), ('A', '5', 'B'));
        assert!(cursor.eos());
    }

    #[test]
    fn test_and_function_syntax() {
        let ((x, y), cursor) = and(literal('X'), literal('Y'))
            .parse(Cursor::new("XY"))
            .unwrap();
        assert_eq!((x, y), ('X', 'Y'));
        assert!(cursor.eos());
    }
}
