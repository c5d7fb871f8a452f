use thiserror::Error;

/// A parse failure located in its source text
///
/// Built from a [`Failure`](crate::Failure) with [`Failure::locate`](crate::Failure::locate)
/// or returned by [`Parser::parse_str`](crate::Parser::parse_str). It reports the
/// furthest position any alternative reached, which is usually the most useful
/// place to point at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Syntax error at line {line}, byte offset {byte_offset}: expected {alternatives}\n\n{snippet}",
    alternatives = describe(.expected)
)]
pub struct ParseError {
    /// Absolute byte position of the error
    pub position: usize,
    /// 1-based line number
    pub line: usize,
    /// Byte offset within the line
    pub byte_offset: usize,
    /// Deduplicated descriptions of what was expected at `position`
    pub expected: Vec<String>,
    /// Up to two lines of context on each side, with a pointer at the error
    pub snippet: String,
}

fn describe(expected: &[String]) -> String {
    match expected {
        [] => "valid input".to_string(),
        [single] => single.clone(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

#[derive(Debug)]
struct ReadablePosition {
    line: usize,
    byte_offset: usize,
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct CodeLoc<'code> {
    code: &'code str,
    /// The position in `code` where parsing failed
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub(crate) fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub(crate) fn error(&self, expected: Vec<String>) -> ParseError {
        let pos = self.readable_position();
        ParseError {
            position: self.loc,
            line: pos.line,
            byte_offset: pos.byte_offset,
            expected,
            snippet: self.context_lines().join("\n"),
        }
    }

    /// Calculate line number and byte offset within that line
    ///
    /// Byte offsets rather than columns: a column depends on tab width and on
    /// how wide each character renders, the byte offset does not.
    fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, byte) in self.code.bytes().enumerate() {
            if i >= self.loc {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            byte_offset: self.loc - line_start,
        }
    }

    /// Up to 2 lines before and after the error line, plus a pointer line
    fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        // split('\n') yields a trailing empty line after a final newline, which is
        // where an error at end of input points
        for (index, content) in self.code.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first {
                continue;
            }
            if current_line > last {
                break;
            }

            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readable_position_first_line() {
        let loc = CodeLoc::new("1 + x", 4);
        let pos = loc.readable_position();

        assert_eq!(pos.line, 1);
        assert_eq!(pos.byte_offset, 4);
    }

    #[test]
    fn test_readable_position_eos() {
        let loc = CodeLoc::new("line1\nline2", 11);
        let pos = loc.readable_position();

        // Line 2, past "line2"
        assert_eq!(pos.line, 2);
        assert_eq!(pos.byte_offset, 5);
    }

    #[test]
    fn test_eos_after_newline() {
        let error = CodeLoc::new("hello\n", 6).error(vec!["digit".into()]);

        assert_eq!(error.line, 2);
        assert_eq!(error.byte_offset, 0);
        assert!(error.snippet.contains("  > 2 | "));
    }

    #[test]
    fn test_context_lines_window() {
        let code = "a\nb\nc\nd\ne\nf\ng";
        let loc = CodeLoc::new(code, 6); // 'd' on line 4
        let context = loc.context_lines().join("\n");

        assert!(!context.contains("1 | a"));
        assert!(context.contains("2 | b"));
        assert!(context.contains("  > 4 | d"));
        assert!(context.contains("6 | f"));
        assert!(!context.contains("7 | g"));
    }

    #[test]
    fn test_context_lines_empty_source() {
        let loc = CodeLoc::new("", 0);
        let context = loc.context_lines();

        assert_eq!(context.len(), 2);
        assert!(context[1].ends_with("^--- here"));
    }

    #[test]
    fn test_pointer_alignment() {
        let error = CodeLoc::new("2*", 2).error(vec!["digit".into()]);
        let lines: Vec<&str> = error.snippet.lines().collect();

        assert_eq!(lines[0], "  > 1 | 2*");
        assert_eq!(lines[1].find('^'), Some("  > 1 | ".len() + 2));
    }

    #[test]
    fn test_display() {
        let error = CodeLoc::new("2*", 2).error(vec!["digit".into(), "'('".into(), "'-'".into()]);
        let display = error.to_string();

        assert!(display.starts_with(
            "Syntax error at line 1, byte offset 2: expected digit, '(' or '-'"
        ));
        assert!(display.contains("^--- here"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&[]), "valid input");
        assert_eq!(describe(&["digit".to_string()]), "digit");
        assert_eq!(
            describe(&["'a'".to_string(), "'b'".to_string()]),
            "'a' or 'b'"
        );
    }
}
