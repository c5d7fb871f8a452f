use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `"1;2;3"` with separator `;` → `vec!['1', '2', '3']`
///
/// # Note
/// - Requires at least one element
/// - A separator commits: a trailing separator is a committed failure
/// - Does not handle whitespace automatically
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<P, PS> Parser for SeparatedList<P, PS>
where
    P: Parser,
    PS: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut results = Vec::new();

        // Parse the first element (required)
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        results.push(first_value);

        // Parse remaining elements preceded by separator
        loop {
            let after_separator = match self.separator.parse(cursor) {
                Ok((_, new_cursor)) => new_cursor,
                Err(failure) if failure.consumed => return Err(failure),
                // No more separators, we're done
                Err(_) => break,
            };

            // The element after a separator is required
            let (value, next_cursor) = self
                .parser
                .parse(after_separator)
                .map_err(Failure::committed)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_list<P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser,
    PS: Parser,
{
    SeparatedList::new(parser, separator)
}
