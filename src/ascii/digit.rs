use crate::satisfy::{Satisfy, satisfy};

/// Parser that matches a single ASCII digit (0-9)
pub fn digit() -> Satisfy<fn(char) -> bool> {
    satisfy(is_digit as fn(char) -> bool, "digit")
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}
