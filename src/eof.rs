use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome};
use crate::parser::Parser;

/// Parser that succeeds, without consuming, only at the end of the input
pub struct EndOfInput;

impl Parser for EndOfInput {
    type Output = ();

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        if cursor.eos() {
            Ok(((), cursor))
        } else {
            Err(Failure::expected("end of input", cursor.position()))
        }
    }
}

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}
