use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// A lazy parser that defers the construction of the actual parser until parse time.
///
/// Grammar rules written as functions returning `impl Parser` can call each
/// other through `lazy` without building an infinitely deep parser up front.
/// The inner parser is rebuilt on every parse; use
/// [`recursive`](crate::recursive::recursive) to build it once.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}
