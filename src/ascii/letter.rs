use crate::satisfy::{Satisfy, satisfy};

/// Parser that matches a single ASCII letter (a-z, A-Z)
pub fn letter() -> Satisfy<fn(char) -> bool> {
    satisfy(is_letter as fn(char) -> bool, "letter")
}

/// Parser that matches a single ASCII letter or digit
pub fn alphanumeric() -> Satisfy<fn(char) -> bool> {
    satisfy(is_alphanumeric as fn(char) -> bool, "letter or digit")
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

fn is_alphanumeric(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::parser::Parser;

    #[test]
    fn test_letter() {
        let test_cases = [("a", true), ("Z", true), ("ñ", false), ("1", false), ("_", false)];

        for (input, should_succeed) in test_cases {
            let result = letter().parse(Cursor::new(input));
            assert_eq!(result.is_ok(), should_succeed, "Unexpected result for: {}", input);
        }
    }

    #[test]
    fn test_alphanumeric() {
        let test_cases = [("a", true), ("7", true), ("!", false), (" ", false), ("", false)];

        for (input, should_succeed) in test_cases {
            let result = alphanumeric().parse(Cursor::new(input));
            assert_eq!(result.is_ok(), should_succeed, "Unexpected result for: {:?}", input);
        }
    }

    #[test]
    fn test_alphanumeric_diagnostic() {
        let failure = alphanumeric().parse(Cursor::new("-")).unwrap_err();
        assert_eq!(failure.diagnostics[0].expected, "letter or digit");
    }
}
