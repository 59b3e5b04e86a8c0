//! Reserved words.
//!
//! The flexMC language reserves its statement keywords, the built-in real
//! function names, and the word operators `AND`, `OR`, `NOT`. Matching is
//! exact and case-sensitive: `IF` is a keyword, `If` and `IFX` are
//! identifiers.

use rustc_hash::FxHashMap;

use crate::error::{LexError, Result};
use crate::token::TokenKind;
use crate::unicode::{is_ident_continue, is_ident_start};

/// Statement keywords.
pub const KEYWORDS: &[&str] = &["IF", "THEN", "ELSE", "PAY", "STOP"];

/// Built-in real functions.
pub const FUNCTIONS: &[&str] = &[
    "EXP", "LOG", "ABS", "SQRT", "SQUARE", "MIN", "MAX", "SUM", "PROD", "ARGMIN", "ARGMAX", "LEN",
    "APPEND",
];

/// Word-to-kind table consulted after an identifier-shaped word is scanned.
#[derive(Clone, Debug)]
pub struct KeywordTable {
    words: FxHashMap<String, TokenKind>,
}

impl KeywordTable {
    /// A table with nothing reserved.
    pub fn empty() -> Self {
        Self {
            words: FxHashMap::default(),
        }
    }

    /// The flexMC language words.
    pub fn flexmc() -> Self {
        let mut table = Self::empty();
        for word in KEYWORDS {
            table.words.insert((*word).to_string(), TokenKind::Keyword);
        }
        for word in FUNCTIONS {
            table.words.insert((*word).to_string(), TokenKind::Function);
        }
        table.words.insert("AND".to_string(), TokenKind::And);
        table.words.insert("OR".to_string(), TokenKind::Or);
        table.words.insert("NOT".to_string(), TokenKind::Not);
        table
    }

    /// Reserves `word` as a [`TokenKind::Keyword`].
    ///
    /// Words that are already reserved keep their classification, so
    /// registering `MAX` leaves it a function.
    ///
    /// # Errors
    ///
    /// [`LexError::InvalidKeyword`] if `word` would not scan as a single
    /// identifier-shaped word.
    ///
    /// ```
    /// use flexmc_lex::{KeywordTable, TokenKind};
    ///
    /// let mut table = KeywordTable::flexmc();
    /// table.register_keyword("myKeyword").unwrap();
    /// assert_eq!(table.lookup("myKeyword"), Some(TokenKind::Keyword));
    /// assert!(table.register_keyword("not a word").is_err());
    /// ```
    pub fn register_keyword(&mut self, word: &str) -> Result<()> {
        if !is_word(word) {
            return Err(LexError::InvalidKeyword(word.to_string()));
        }
        self.words
            .entry(word.to_string())
            .or_insert(TokenKind::Keyword);
        Ok(())
    }

    /// Kind of a reserved word, `None` for plain identifiers.
    pub fn lookup(&self, word: &str) -> Option<TokenKind> {
        self.words.get(word).copied()
    }

    /// True if `word` is reserved
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of reserved words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if nothing is reserved
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::flexmc()
    }
}

fn is_word(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => chars.all(is_ident_continue),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flexmc_table_classes() {
        let table = KeywordTable::flexmc();
        assert_eq!(table.lookup("IF"), Some(TokenKind::Keyword));
        assert_eq!(table.lookup("PAY"), Some(TokenKind::Keyword));
        assert_eq!(table.lookup("SQRT"), Some(TokenKind::Function));
        assert_eq!(table.lookup("APPEND"), Some(TokenKind::Function));
        assert_eq!(table.lookup("AND"), Some(TokenKind::And));
        assert_eq!(table.lookup("OR"), Some(TokenKind::Or));
        assert_eq!(table.lookup("NOT"), Some(TokenKind::Not));
        assert_eq!(table.len(), KEYWORDS.len() + FUNCTIONS.len() + 3);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = KeywordTable::flexmc();
        assert_eq!(table.lookup("if"), None);
        assert_eq!(table.lookup("If"), None);
        assert_eq!(table.lookup("IFX"), None);
    }

    #[test]
    fn test_register_keyword() {
        let mut table = KeywordTable::empty();
        assert!(table.is_empty());
        table.register_keyword("myKeyword").unwrap();
        assert!(table.contains("myKeyword"));
        assert_eq!(table.lookup("myKeyword"), Some(TokenKind::Keyword));
    }

    #[test]
    fn test_register_keeps_existing_classification() {
        let mut table = KeywordTable::flexmc();
        let before = table.len();
        table.register_keyword("MAX").unwrap();
        assert_eq!(table.lookup("MAX"), Some(TokenKind::Function));
        assert_eq!(table.len(), before);
    }

    #[test]
    fn test_register_rejects_non_words() {
        let mut table = KeywordTable::empty();
        for bad in ["", "1abc", "a b", "x+y", ":="] {
            assert!(
                matches!(table.register_keyword(bad), Err(LexError::InvalidKeyword(_))),
                "accepted {:?}",
                bad
            );
        }
        assert!(table.is_empty());
    }
}
