use crate::cursor::Cursor;
use crate::error::{CodeLoc, ParseError};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Result of running a parser: the value and the remaining input, or a [`Failure`]
pub type Outcome<'code, T> = Result<(T, Cursor<'code>), Failure>;

/// What a parser expected to find, and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub expected: Cow<'static, str>,
    pub position: usize,
}

impl Diagnostic {
    pub fn new(expected: impl Into<Cow<'static, str>>, position: usize) -> Self {
        Diagnostic {
            expected: expected.into(),
            position,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} at byte {}", self.expected, self.position)
    }
}

/// A failed parse attempt
///
/// `consumed` records whether the attempt got past the point of no return.
/// Alternation never tries a sibling branch after a consumed failure, and
/// repetition turns a consumed failure into a hard error instead of stopping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub diagnostics: Vec<Diagnostic>,
    pub consumed: bool,
}

impl Failure {
    pub fn new(diagnostics: Vec<Diagnostic>, consumed: bool) -> Self {
        Failure {
            diagnostics,
            consumed,
        }
    }

    /// A single non-consuming match failure
    pub fn expected(expected: impl Into<Cow<'static, str>>, position: usize) -> Self {
        Failure::new(vec![Diagnostic::new(expected, position)], false)
    }

    /// Mark this failure as committed
    pub fn committed(mut self) -> Self {
        self.consumed = true;
        self
    }

    /// Clear the commit flag so an enclosing alternation may backtrack
    pub fn uncommitted(mut self) -> Self {
        self.consumed = false;
        self
    }

    /// Append the diagnostics of a later alternative.
    /// The later alternative decides whether the result is committed.
    pub fn merge(mut self, later: Failure) -> Self {
        self.diagnostics.extend(later.diagnostics);
        self.consumed = later.consumed;
        self
    }

    /// Furthest position any diagnostic reached
    pub fn position(&self) -> Option<usize> {
        self.diagnostics.iter().map(|d| d.position).max()
    }

    /// The diagnostics at the furthest position, in the order they were produced
    pub fn furthest(&self) -> Vec<&Diagnostic> {
        match self.position() {
            Some(furthest) => self
                .diagnostics
                .iter()
                .filter(|d| d.position == furthest)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Attach line information and a source snippet for display
    pub fn locate(&self, source: &str) -> ParseError {
        let position = self.position().unwrap_or(0).min(source.len());
        let mut expected: Vec<String> = Vec::new();
        for diagnostic in self.furthest() {
            if !expected.iter().any(|e| e.as_str() == diagnostic.expected) {
                expected.push(diagnostic.expected.to_string());
            }
        }
        CodeLoc::new(source, position).error(expected)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diagnostics.as_slice() {
            [] => write!(f, "parse failed"),
            [single] => write!(f, "{}", single),
            many => {
                write!(f, "expected one of: ")?;
                for (i, diagnostic) in many.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} (byte {})", diagnostic.expected, diagnostic.position)?;
                }
                Ok(())
            }
        }
    }
}

impl Error for Failure {}
