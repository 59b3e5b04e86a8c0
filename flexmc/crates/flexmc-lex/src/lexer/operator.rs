//! Operator and punctuation lexing.
//!
//! Symbols come from [`SYMBOLS`]; the first entry the input starts with
//! wins. The table lists longer symbols before their prefixes, so this is
//! always the longest match.

use crate::token::{Token, SYMBOLS};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the symbol at the cursor, if there is one.
    ///
    /// Returns `None` without moving when no symbol matches. A colon not
    /// followed by `=` is one such case.
    pub(crate) fn lex_symbol(&mut self) -> Option<Token> {
        let rest = self.cursor.remaining();
        let (text, kind) = SYMBOLS.iter().find(|(text, _)| rest.starts_with(text))?;
        // every symbol is ASCII, so bytes and characters agree
        self.cursor.advance_n(text.len());
        Some(self.make_token(*kind))
    }
}
