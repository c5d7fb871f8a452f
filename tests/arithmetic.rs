//! End-to-end tests with a small arithmetic grammar
//!
//! Precedence from loosest to tightest: `+ -` (left), `* /` (left),
//! `^` (right), prefix `-`, then numbers and parenthesised expressions.
//! Whitespace is allowed after every token and before the first one.

use commitcomb::prelude::*;
use rstest::rstest;

type BinOp = fn(f64, f64) -> f64;

fn token<P>(parser: P) -> impl Parser<Output = P::Output>
where
    P: Parser,
{
    skip_trailing(parser, many(whitespace()))
}

fn symbol(c: char) -> impl Parser<Output = char> {
    token(literal(c))
}

fn operator(c: char, op: BinOp) -> impl Parser<Output = BinOp> {
    symbol(c).map(move |_| op)
}

fn number() -> impl Parser<Output = f64> {
    token(many1(digit())).map(|digits| {
        digits
            .iter()
            .filter_map(|d| d.to_digit(10))
            .fold(0.0, |acc, d| acc * 10.0 + f64::from(d))
    })
}

fn expression() -> Recursive<f64> {
    recursive(|expr| {
        let atom = number().or(surround(symbol('('), expr, symbol(')')));
        let unary = recursive(move |unary| {
            sequence2(symbol('-'), unary, |_, value: f64| -value).or(atom)
        });
        let power = chain_right(unary, operator('^', f64::powf));
        let term = chain_left(
            power,
            operator('*', |a, b| a * b).or(operator('/', |a, b| a / b)),
        );
        chain_left(
            term,
            operator('+', |a, b| a + b).or(operator('-', |a, b| a - b)),
        )
    })
}

fn program() -> impl Parser<Output = f64> {
    sequence3(many(whitespace()), expression(), end_of_input(), |_, value, _| value)
}

#[rstest]
#[case("1+2* -3", -5.0)]
#[case("2*( 1 - 2)", -2.0)]
#[case("(1 + 2) * 5", 15.0)]
#[case("- -1", 1.0)]
#[case("4^3^2", 262144.0)]
#[case("1 - 2 - 3", -4.0)]
#[case("  42  ", 42.0)]
#[case("2^3*2", 16.0)]
#[case("-2^2", 4.0)]
#[case("8/4/2", 1.0)]
#[case("((7))", 7.0)]
fn test_evaluates(#[case] input: &str, #[case] expected: f64) {
    let (value, rest) = program().parse_str(input).unwrap();
    assert!(
        (value - expected).abs() < f64::EPSILON,
        "{input} evaluated to {value}, expected {expected}"
    );
    assert!(rest.eos());
}

#[rstest]
#[case("")]
#[case("1+2*")]
#[case("2*")]
#[case("-")]
#[case("-(1 - 2")]
#[case("1 2")]
#[case("()")]
#[case("1 +* 2")]
fn test_rejects(#[case] input: &str) {
    assert!(program().parse_str(input).is_err(), "{input} should not parse");
}

#[test]
fn test_error_points_at_missing_operand() {
    let error = program().parse_str("1+2*").unwrap_err();

    assert_eq!(error.position, 4);
    assert_eq!(error.line, 1);
    assert_eq!(error.expected, vec!["'-'", "digit", "'('"]);
    assert_eq!(
        error.to_string(),
        "Syntax error at line 1, byte offset 4: expected '-', digit or '('\n\n  > 1 | 1+2*\n            ^--- here"
    );
}

#[test]
fn test_error_on_later_line() {
    let error = program().parse_str("1 +\n2 *\n(3 - )").unwrap_err();

    assert_eq!(error.line, 3);
    assert_eq!(error.byte_offset, 5);
    assert!(error.snippet.contains("  > 3 | (3 - )"));
}

#[test]
fn test_unterminated_group_is_committed() {
    let failure = run(&program(), "-(1 - 2").unwrap_err();

    assert!(failure.consumed);
    assert_eq!(failure.furthest()[0].expected, "')'");
}

#[test]
fn test_trailing_input_is_left_to_the_caller() {
    // Without end_of_input the expression stops before the second number
    let (value, rest) = expression().parse_str("1 2").unwrap();
    assert!((value - 1.0).abs() < f64::EPSILON);
    assert_eq!(rest.rest(), "2");
}

#[test]
fn test_grammar_is_reusable() {
    let parser = program();
    for (input, expected) in [("1+1", 2.0), ("3*3", 9.0), ("2^10", 1024.0)] {
        let (value, _) = parser.parse_str(input).unwrap();
        assert!((value - expected).abs() < f64::EPSILON);
    }
}
