//! Lexer module.
//!
//! The lexer implementation is split by token class:
//! - `core` - Lexer struct, dispatch, reset, and error reporting
//! - `identifier` - Identifier and reserved word lexing
//! - `number` - Numeric literal lexing
//! - `operator` - Operator and punctuation lexing

mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::Lexer;
