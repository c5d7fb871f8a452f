//! # commitcomb - Parser Combinator Library
//!
//! Composable parsers over `&str` with explicit commit and backtracking.
//!
//! Grammars are assembled from small parsers (`satisfy`, `literal`, `digit`,
//! `string`, ...) and combinators (`and`, `or`, `many`, `chain_left`,
//! `recursive`, ...). Every parser returns an [`Outcome`]: the value with the
//! cursor after it, or a [`Failure`] listing what was expected where.
//!
//! A failure also records whether input was consumed before it happened.
//! Alternation only tries the next branch after a failure that consumed
//! nothing, and sequencing marks every failure after its first step as
//! consumed. Wrap a branch in [`attempt`](attempt::attempt) to backtrack out of
//! it anyway.
//!
//! ```
//! use commitcomb::prelude::*;
//!
//! let number = many1(digit()).map(|ds| ds.into_iter().collect::<String>());
//! let pair = surround(literal('('), separated_list(number, literal(',')), literal(')'));
//!
//! let (values, _) = pair.parse_str("(12,7)").unwrap();
//! assert_eq!(values, vec!["12", "7"]);
//!
//! let error = pair.parse_str("(12,)").unwrap_err();
//! assert_eq!(error.byte_offset, 4);
//! assert_eq!(error.expected, vec!["digit"]);
//! ```

pub mod and;
pub mod ascii;
pub mod attempt;
pub mod between;
pub mod bind;
pub mod boxed;
pub mod chain;
pub mod cursor;
pub mod default;
pub mod eof;
pub mod error;
pub mod filter;
pub mod label;
pub mod lazy;
pub mod many;
pub mod map;
pub mod not;
pub mod optional;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod position;
pub mod recursive;
pub mod satisfy;
pub mod separated_list;
pub mod sequence;
pub mod skip;
pub mod string;

pub use boxed::{BoxedParser, from_fn};
pub use cursor::Cursor;
pub use error::ParseError;
pub use outcome::{Diagnostic, Failure, Outcome};
pub use parser::{Parser, run};
pub use position::{PositionExt, Span, position};
pub use recursive::{Recursive, recursive};

/// Everything needed to write a grammar, in one import
pub mod prelude {
    pub use crate::and::{AndExt, and};
    pub use crate::ascii::{alphanumeric, digit, letter, whitespace};
    pub use crate::attempt::{AttemptExt, attempt};
    pub use crate::between::surround;
    pub use crate::bind::{BindExt, bind};
    pub use crate::boxed::{BoxedExt, BoxedParser, from_fn};
    pub use crate::chain::{chain_left, chain_right};
    pub use crate::cursor::Cursor;
    pub use crate::default::{default, pure};
    pub use crate::eof::end_of_input;
    pub use crate::filter::{FilterExt, filter};
    pub use crate::label::{LabelExt, label};
    pub use crate::lazy::lazy;
    pub use crate::many::{many, many1};
    pub use crate::map::{MapExt, map};
    pub use crate::not::not;
    pub use crate::optional::{OptionalExt, optional};
    pub use crate::or::{OrExt, choice, or};
    pub use crate::outcome::{Diagnostic, Failure, Outcome};
    pub use crate::parser::{Parser, run};
    pub use crate::position::{PositionExt, Span, position};
    pub use crate::recursive::{Recursive, recursive};
    pub use crate::satisfy::{any_char, literal, satisfy};
    pub use crate::separated_list::separated_list;
    pub use crate::sequence::{sequence2, sequence3};
    pub use crate::skip::{SkipExt, skip_trailing};
    pub use crate::string::string;
}
