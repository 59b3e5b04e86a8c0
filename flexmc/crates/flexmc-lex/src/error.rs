//! Error types for flexmc-lex.
//!
//! Scanning itself never fails: bad input becomes an
//! [`Invalid`](crate::TokenKind::Invalid) token plus a diagnostic on the
//! [`Handler`](flexmc_util::Handler). `LexError` covers the fallible setup
//! around it: loading configuration and registering keywords.

use thiserror::Error;

/// Error type for lexer setup.
#[derive(Debug, Error)]
pub enum LexError {
    /// Configuration is missing or inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// A keyword that would not scan as a single word
    #[error("Invalid keyword '{0}': keywords must start with a letter or '_' and contain only letters, digits, or '_'")]
    InvalidKeyword(String),

    /// Reading a configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document is not valid TOML for [`LexerConfig`](crate::LexerConfig)
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using LexError.
pub type Result<T> = std::result::Result<T, LexError>;
