//! ASCII character classes

pub mod digit;
pub mod letter;
pub mod whitespace;

pub use digit::digit;
pub use letter::{alphanumeric, letter};
pub use whitespace::whitespace;
