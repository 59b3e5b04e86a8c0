//! flexmc-lex - Lexical Analyzer for flexMC Expressions
//!
//! This crate turns flexMC payoff expressions into a stream of tokens for
//! the parser. Scanning is pull-based: the parser asks for one token at a
//! time and can rewind to the start with [`Lexer::reset`].
//!
//! # Example Usage
//!
//! ```
//! use flexmc_lex::{Lexer, Token, TokenKind};
//! use flexmc_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new("IF S > 100 THEN PAY S - 100", &handler);
//!
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Keyword, "IF"));
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "S"));
//! assert_eq!(lexer.next_token().to_string(), "Tok(t=gt, v=>)");
//!
//! // Or iterate up to end of input
//! lexer.reset();
//! assert_eq!(lexer.count(), 9);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and the token value
//! - [`lexer`] - Main lexer implementation
//! - [`keywords`] - Reserved word table
//! - [`cursor`] - Character cursor for input traversal
//! - [`unicode`] - Character classes
//! - [`config`] - TOML-loadable lexer settings
//! - [`error`] - Errors for the fallible setup APIs
//!
//! # Token Categories
//!
//! ## Words
//!
//! - **Keywords**: `IF`, `THEN`, `ELSE`, `PAY`, `STOP`, plus any registered
//!   with [`Lexer::register_keyword`]
//! - **Functions**: `EXP`, `LOG`, `ABS`, `SQRT`, `SQUARE`, `MIN`, `MAX`,
//!   `SUM`, `PROD`, `ARGMIN`, `ARGMAX`, `LEN`, `APPEND`
//! - **Logical**: `AND`, `OR`, `NOT`
//! - **Identifiers**: everything else matching `[letter_][letter digit _]*`
//!
//! ## Numbers
//!
//! `42`, `5.00`, `.5`, `3.`, `1e-3`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `**`
//! - **Comparison**: `<`, `>`, `<=`, `>=`, `==`, `=`
//! - **Smooth comparison**: `<<`, `>>`
//! - **Assignment**: `:=`, `+=`, `-=`, `*=`, `/=`, `**=`
//! - **Delimiters**: `,`, `(`, `)`, `[`, `]`
//!
//! ## Special
//!
//! - **EOF**: End of input marker, returned forever once reached
//! - **Invalid**: Unrecognized characters and malformed numbers, each
//!   reported to the [`flexmc_util::Handler`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{LexError, Result};
pub use keywords::KeywordTable;
pub use lexer::Lexer;
pub use token::{ParsingContext, Token, TokenKind};
