//! Identifier and reserved word lexing.

use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or reserved word.
    ///
    /// Takes the longest run of letters, digits and underscores, then looks
    /// the whole word up in the keyword table. A word that only starts with
    /// a reserved word (`IFX`) stays an identifier.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        let kind = self.keywords.lookup(text).unwrap_or(TokenKind::Ident);
        self.make_token(kind)
    }
}
