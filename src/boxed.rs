use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::fmt;
use std::sync::Arc;

/// A type-erased parser, cheap to clone and shareable across threads
///
/// Boxing keeps the types of large grammars manageable and is what lets
/// parsers of different concrete types sit in one [`choice`](crate::or::choice).
pub struct BoxedParser<T> {
    parser: Arc<dyn Parser<Output = T> + Send + Sync>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<T> fmt::Debug for BoxedParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedParser")
            .field("parser", &"<parser>")
            .finish()
    }
}

impl<T> BoxedParser<T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<Output = T> + Send + Sync + 'static,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }
}

impl<T> Parser for BoxedParser<T> {
    type Output = T;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        self.parser.parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized + Send + Sync + 'static {
    fn boxed(self) -> BoxedParser<Self::Output> {
        BoxedParser::new(self)
    }
}

impl<P> BoxedExt for P where P: Parser + Send + Sync + 'static {}

/// A parser written directly as a function over the cursor
pub struct FnParser<F> {
    function: F,
}

impl<F, T> Parser for FnParser<F>
where
    F: for<'code> Fn(Cursor<'code>) -> Outcome<'code, T>,
{
    type Output = T;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (self.function)(cursor)
    }
}

/// Create a parser from a function
///
/// Useful for one-off primitives that are awkward to express with combinators.
pub fn from_fn<F, T>(function: F) -> FnParser<F>
where
    F: for<'code> Fn(Cursor<'code>) -> Outcome<'code, T>,
{
    FnParser { function }
}
