use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;

/// Parses `operand (operator operand)*` and folds the operands from the left
///
/// The operator parser yields the binary function that combines its two
/// neighbours, so `1 - 2 - 3` folds as `(1 - 2) - 3`.
///
/// The chain follows the repetition rules: an operator that fails without
/// consuming ends the chain, an operator that fails after consuming fails the
/// whole chain. Once an operator has matched, the operand after it is
/// required and its failure is committed.
///
/// Example:
/// ```
/// use commitcomb::ascii::digit;
/// use commitcomb::chain::chain_left;
/// use commitcomb::map::MapExt;
/// use commitcomb::satisfy::literal;
/// use commitcomb::{Cursor, Parser};
///
/// let number = digit().map(|d| d.to_digit(10).unwrap_or(0) as i64);
/// let minus = literal('-').map(|_| |a: i64, b: i64| a - b);
/// let (value, _) = chain_left(number, minus).parse(Cursor::new("1-2-3")).unwrap();
/// assert_eq!(value, -4);
/// ```
pub struct ChainLeft<P, O> {
    operand: P,
    operator: O,
}

impl<P, O> ChainLeft<P, O> {
    pub fn new(operand: P, operator: O) -> Self {
        ChainLeft { operand, operator }
    }
}

impl<P, O> Parser for ChainLeft<P, O>
where
    P: Parser,
    O: Parser,
    O::Output: Fn(P::Output, P::Output) -> P::Output,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (mut accumulated, mut cursor) = self.operand.parse(cursor)?;

        loop {
            let (combine, after_operator) = match self.operator.parse(cursor) {
                Ok(result) => result,
                Err(failure) if failure.consumed => return Err(failure),
                Err(_) => break,
            };
            let (right, next_cursor) = self
                .operand
                .parse(after_operator)
                .map_err(Failure::committed)?;

            accumulated = combine(accumulated, right);
            cursor = next_cursor;
        }

        Ok((accumulated, cursor))
    }
}

/// Convenience function to create a left-associative operator chain
pub fn chain_left<P, O>(operand: P, operator: O) -> ChainLeft<P, O>
where
    P: Parser,
    O: Parser,
    O::Output: Fn(P::Output, P::Output) -> P::Output,
{
    ChainLeft::new(operand, operator)
}

/// Parses `operand (operator operand)*` and folds the operands from the right
///
/// `4 ^ 3 ^ 2` folds as `4 ^ (3 ^ 2)`. Matching follows the same rules as
/// [`ChainLeft`]; only the fold differs.
pub struct ChainRight<P, O> {
    operand: P,
    operator: O,
}

impl<P, O> ChainRight<P, O> {
    pub fn new(operand: P, operator: O) -> Self {
        ChainRight { operand, operator }
    }
}

impl<P, O> Parser for ChainRight<P, O>
where
    P: Parser,
    O: Parser,
    O::Output: Fn(P::Output, P::Output) -> P::Output,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (first, mut cursor) = self.operand.parse(cursor)?;
        let mut pairs = Vec::new();

        loop {
            let (combine, after_operator) = match self.operator.parse(cursor) {
                Ok(result) => result,
                Err(failure) if failure.consumed => return Err(failure),
                Err(_) => break,
            };
            let (right, next_cursor) = self
                .operand
                .parse(after_operator)
                .map_err(Failure::committed)?;

            pairs.push((combine, right));
            cursor = next_cursor;
        }

        // Each operator is applied once the operand to its right is fully folded
        let mut pairs = pairs.into_iter().rev();
        let accumulated = match pairs.next() {
            None => first,
            Some((mut pending, mut accumulated)) => {
                for (combine, left) in pairs {
                    accumulated = pending(left, accumulated);
                    pending = combine;
                }
                pending(first, accumulated)
            }
        };

        Ok((accumulated, cursor))
    }
}

/// Convenience function to create a right-associative operator chain
pub fn chain_right<P, O>(operand: P, operator: O) -> ChainRight<P, O>
where
    P: Parser,
    O: Parser,
    O::Output: Fn(P::Output, P::Output) -> P::Output,
{
    ChainRight::new(operand, operator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::ascii::digit;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::outcome::Diagnostic;
    use crate::satisfy::literal;
    use crate::string::string;

    type BinOp = fn(i64, i64) -> i64;

    fn number() -> impl Parser<Output = i64> {
        digit().map(|d| d.to_digit(10).unwrap_or(0) as i64)
    }

    fn minus() -> impl Parser<Output = BinOp> {
        literal('-').map(|_| (|a, b| a - b) as BinOp)
    }

    fn power() -> impl Parser<Output = BinOp> {
        literal('^').map(|_| (|a: i64, b: i64| a.pow(b as u32)) as BinOp)
    }

    #[test]
    fn test_chain_left_single_operand() {
        let (value, cursor) = chain_left(number(), minus()).parse(Cursor::new("7")).unwrap();
        assert_eq!(value, 7);
        assert!(cursor.eos());
    }

    #[test]
    fn test_chain_left_folds_left() {
        let (value, _) = chain_left(number(), minus()).parse(Cursor::new("1-2-3")).unwrap();
        assert_eq!(value, -4);
    }

    #[test]
    fn test_chain_right_folds_right() {
        let (value, _) = chain_right(number(), power()).parse(Cursor::new("4^3^2")).unwrap();
        assert_eq!(value, 262144);

        let (value, _) = chain_right(number(), minus()).parse(Cursor::new("1-2-3")).unwrap();
        assert_eq!(value, 2);
    }

    #[test]
    fn test_chain_right_single_operand() {
        let (value, cursor) = chain_right(number(), power()).parse(Cursor::new("5x")).unwrap();
        assert_eq!(value, 5);
        assert_eq!(cursor.value(), Some('x'));
    }

    #[test]
    fn test_chain_stops_before_non_operator() {
        let (value, cursor) = chain_left(number(), minus()).parse(Cursor::new("9-1+2")).unwrap();
        assert_eq!(value, 8);
        assert_eq!(cursor.value(), Some('+'));
    }

    #[test]
    fn test_chain_missing_operand_is_committed() {
        let failure = chain_left(number(), minus())
            .parse(Cursor::new("1-"))
            .unwrap_err();
        assert!(failure.consumed);
        assert_eq!(failure.diagnostics, vec![Diagnostic::new("digit", 2)]);

        let failure = chain_right(number(), power())
            .parse(Cursor::new("2^x"))
            .unwrap_err();
        assert!(failure.consumed);
    }

    #[test]
    fn test_chain_first_operand_failure_passes_through() {
        let failure = chain_left(number(), minus())
            .parse(Cursor::new("-1"))
            .unwrap_err();
        assert!(!failure.consumed);
    }

    #[test]
    fn test_chain_consuming_operator_failure_propagates() {
        // A '-' not followed by '>' fails after consuming
        let arrow = literal('-')
            .and(literal('>'))
            .map(|_| (|a, b| a * 10 + b) as BinOp)
            .or(string("=>").map(|_| (|a, b| a + b) as BinOp));

        let (value, _) = chain_left(number(), &arrow).parse(Cursor::new("1->2")).unwrap();
        assert_eq!(value, 12);

        let failure = chain_left(number(), &arrow)
            .parse(Cursor::new("1-2"))
            .unwrap_err();
        assert!(failure.consumed);
        assert_eq!(failure.diagnostics, vec![Diagnostic::new("'>'", 2)]);
    }
}
