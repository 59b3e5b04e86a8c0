//! Lexer configuration.
//!
//! A [`LexerConfig`] can be built in code or read from TOML:
//!
//! ```toml
//! keywords = ["myKeyword", "BARRIER"]
//! scientific_notation = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LexError, Result};
use crate::keywords::KeywordTable;

/// Settings that change how text is classified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Extra words reserved as [`TokenKind::Keyword`](crate::TokenKind::Keyword),
    /// on top of the language keywords.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Whether `e`/`E` exponents belong to numeric literals (`1e-3`).
    /// When off, `1e3` scans as the number `1` followed by the identifier `e3`.
    #[serde(default = "default_true")]
    pub scientific_notation: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            scientific_notation: true,
        }
    }
}

impl LexerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LexerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// [`LexError::Config`] if the file does not exist, [`LexError::Io`] if
    /// it cannot be read, [`LexError::Toml`] if it does not parse, and
    /// [`LexError::InvalidKeyword`] if a configured keyword is not a word.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LexError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks that every configured keyword scans as a single word.
    pub fn validate(&self) -> Result<()> {
        self.keyword_table().map(|_| ())
    }

    /// The language keyword table extended with [`LexerConfig::keywords`].
    pub fn keyword_table(&self) -> Result<KeywordTable> {
        let mut table = KeywordTable::flexmc();
        for word in &self.keywords {
            table.register_keyword(word)?;
        }
        Ok(table)
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| LexError::Config(format!("Failed to serialize configuration: {}", e)))
    }
}
