use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// Failures pass through untouched, diagnostics and commit flag included.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::digit;
    use crate::and::AndExt;
    use crate::satisfy::literal;

    #[derive(Debug, PartialEq)]
    enum Token {
        Digit(u32),
        Paren,
    }

    #[test]
    fn test_map_to_enum() {
        let parser = digit().map(|d| Token::Digit(d.to_digit(10).unwrap()));

        let (token, cursor) = parser.parse(Cursor::new("7")).unwrap();
        assert_eq!(token, Token::Digit(7));
        assert!(cursor.eos());
    }

    #[test]
    fn test_map_chaining() {
        let parser = digit()
            .map(|ch| ch.to_digit(10).unwrap())
            .map(|d| d * 2)
            .map(|d| format!("Doubled: {}", d));

        let (result, _) = parser.parse(Cursor::new("5")).unwrap();
        assert_eq!(result, "Doubled: 10");
    }

    #[test]
    fn test_map_preserves_failure() {
        let plain = literal('(').parse(Cursor::new("x")).unwrap_err();
        let mapped = literal('(').map(|_| Token::Paren).parse(Cursor::new("x")).unwrap_err();
        assert_eq!(plain, mapped);
    }

    #[test]
    fn test_map_preserves_committed_failure() {
        let parser = map(literal('(').and(literal(')')), |_| Token::Paren);

        let failure = parser.parse(Cursor::new("(x")).unwrap_err();
        assert!(failure.consumed);
        assert_eq!(failure.diagnostics[0].position, 1);
    }
}
