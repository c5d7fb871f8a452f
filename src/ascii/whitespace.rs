use crate::satisfy::{Satisfy, satisfy};

/// Parser that matches a single ASCII whitespace character (space, tab, newline, carriage return)
pub fn whitespace() -> Satisfy<fn(char) -> bool> {
    satisfy(is_whitespace as fn(char) -> bool, "whitespace")
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::many::many;
    use crate::parser::Parser;

    #[test]
    fn test_whitespace_parser_space() {
        let cursor = Cursor::new(" abc");
        let (ws, cursor) = whitespace().parse(cursor).unwrap();
        assert_eq!(ws, ' ');
        assert_eq!(cursor.value(), Some('a'));
    }

    #[test]
    fn test_whitespace_parser_tab_newline_return() {
        for input in ["\tx", "\nx", "\rx"] {
            let (_, cursor) = whitespace().parse(Cursor::new(input)).unwrap();
            assert_eq!(cursor.value(), Some('x'), "Failed for: {:?}", input);
        }
    }

    #[test]
    fn test_whitespace_parser_non_whitespace_fails() {
        let failure = whitespace().parse(Cursor::new("abc")).unwrap_err();
        assert!(!failure.consumed);
        assert_eq!(failure.diagnostics[0].expected, "whitespace");
    }

    #[test]
    fn test_non_ascii_space_is_not_whitespace() {
        assert!(whitespace().parse(Cursor::new("\u{00A0}")).is_err());
    }

    #[test]
    fn test_whitespaces_parser_multiple_matches() {
        let cursor = Cursor::new("  \t\n abc");
        let (ws_vec, cursor) = many(whitespace()).parse(cursor).unwrap();
        assert_eq!(ws_vec, vec![' ', ' ', '\t', '\n', ' ']);
        assert_eq!(cursor.value(), Some('a'));
    }

    #[test]
    fn test_whitespaces_parser_all_whitespace() {
        let (ws_vec, cursor) = many(whitespace()).parse(Cursor::new(" \t\n\r")).unwrap();
        assert_eq!(ws_vec, vec![' ', '\t', '\n', '\r']);
        assert!(cursor.eos());
    }
}
