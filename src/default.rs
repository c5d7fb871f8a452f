use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser that always succeeds without consuming input and returns the default value of T
pub struct DefaultParser<T> {
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T> DefaultParser<T> {
    pub fn new() -> Self {
        DefaultParser {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> Default for DefaultParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Parser for DefaultParser<T>
where
    T: Default,
{
    type Output = T;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        Ok((T::default(), cursor))
    }
}

/// Convenience function to create a default parser
pub fn default<T>() -> DefaultParser<T>
where
    T: Default,
{
    DefaultParser::new()
}

/// Parser that always succeeds without consuming input and returns a copy of its value
pub struct Pure<T> {
    value: T,
}

impl<T> Parser for Pure<T>
where
    T: Clone,
{
    type Output = T;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        Ok((self.value.clone(), cursor))
    }
}

pub fn pure<T>(value: T) -> Pure<T>
where
    T: Clone,
{
    Pure { value }
}
