use crate::boxed::BoxedParser;
use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use log::trace;
use once_cell::sync::OnceCell;
use std::sync::{Arc, Weak};

type Slot<T> = OnceCell<BoxedParser<T>>;

enum RecursiveInner<T> {
    Owned(Arc<Slot<T>>),
    Unowned(Weak<Slot<T>>),
}

/// A parser that refers to a rule whose definition is supplied later
///
/// This is how self-referential grammars are tied: the rule is handed a
/// reference to itself before it exists, and the reference resolves once the
/// rule has been assigned. The definition is written exactly once.
///
/// Running a `Recursive` before its definition is assigned is a grammar
/// construction bug, not a parse failure, and panics.
pub struct Recursive<T> {
    inner: RecursiveInner<T>,
}

impl<T> Clone for Recursive<T> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            RecursiveInner::Owned(slot) => RecursiveInner::Owned(Arc::clone(slot)),
            RecursiveInner::Unowned(slot) => RecursiveInner::Unowned(Weak::clone(slot)),
        };
        Recursive { inner }
    }
}

impl<T> Recursive<T> {
    /// Declare a rule now and define it later with [`Recursive::define`]
    ///
    /// Clones of a declared rule keep it alive, so rules that refer to each
    /// other through clones form a reference cycle and are never freed. Prefer
    /// [`recursive`] for a rule that only refers to itself.
    pub fn declare() -> Self {
        Recursive {
            inner: RecursiveInner::Owned(Arc::new(OnceCell::new())),
        }
    }

    /// Assign the definition of a declared rule
    ///
    /// Panics if the rule already has a definition.
    pub fn define<P>(&self, parser: P)
    where
        P: Parser<Output = T> + Send + Sync + 'static,
    {
        let slot = self.slot();
        if slot.set(BoxedParser::new(parser)).is_err() {
            panic!("recursive parser defined more than once");
        }
        trace!("recursive rule defined");
    }

    fn slot(&self) -> Arc<Slot<T>> {
        match &self.inner {
            RecursiveInner::Owned(slot) => Arc::clone(slot),
            RecursiveInner::Unowned(slot) => match slot.upgrade() {
                Some(slot) => slot,
                None => panic!("recursive parser invoked after its definition was dropped"),
            },
        }
    }
}

impl<T> Parser for Recursive<T> {
    type Output = T;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let parse_with = |slot: &Slot<T>| match slot.get() {
            Some(parser) => parser.parse(cursor),
            None => panic!("recursive parser invoked before its definition was assigned"),
        };

        match &self.inner {
            RecursiveInner::Owned(slot) => parse_with(slot.as_ref()),
            RecursiveInner::Unowned(_) => parse_with(self.slot().as_ref()),
        }
    }
}

/// Build a self-referential parser
///
/// `build` receives a forwarding parser that stands for the rule being
/// defined and returns the rule's definition. The returned parser runs that
/// definition; the forwarder inside it resolves to the same definition.
///
/// The forwarder only holds a weak reference, so the grammar is freed once the
/// returned parser and its clones are dropped.
///
/// Example:
/// ```
/// use commitcomb::between::surround;
/// use commitcomb::map::MapExt;
/// use commitcomb::or::OrExt;
/// use commitcomb::recursive::recursive;
/// use commitcomb::satisfy::literal;
/// use commitcomb::{Cursor, Parser};
///
/// // Nesting depth of balanced parentheses around an 'x'
/// let nested = recursive(|nested| {
///     surround(literal('('), nested, literal(')'))
///         .map(|depth: usize| depth + 1)
///         .or(literal('x').map(|_| 0))
/// });
///
/// let (depth, _) = nested.parse(Cursor::new("((x))")).unwrap();
/// assert_eq!(depth, 2);
/// ```
pub fn recursive<T, F, P>(build: F) -> Recursive<T>
where
    F: FnOnce(Recursive<T>) -> P,
    P: Parser<Output = T> + Send + Sync + 'static,
{
    let slot = Arc::new(OnceCell::new());
    let forward = Recursive {
        inner: RecursiveInner::Unowned(Arc::downgrade(&slot)),
    };

    let entry = Recursive {
        inner: RecursiveInner::Owned(slot),
    };
    entry.define(build(forward));
    entry
}
