//! Number literal lexing.
//!
//! Numbers are real-valued decimal literals:
//!
//! ```text
//! digits [ '.' digits* ] [ exponent ]
//! '.' digits [ exponent ]
//! exponent = ('e' | 'E') [ '+' | '-' ] digits
//! ```
//!
//! The token keeps the literal text exactly as written (`5.00` stays `5.00`).

use flexmc_util::DiagnosticCode;
use tracing::warn;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// The cursor must be on a digit, or on a `.` followed by a digit.
    ///
    /// # Returns
    ///
    /// `TokenKind::Number`, or `TokenKind::Invalid` when a second decimal
    /// point follows the literal (`1.2.3`).
    pub(crate) fn lex_number(&mut self) -> Token {
        self.eat_digits();

        if self.cursor.match_char('.') {
            self.eat_digits();
        }

        if self.scientific_notation {
            self.lex_exponent();
        }

        if self.cursor.current_char() == '.' && !self.cursor.is_at_end() {
            return self.lex_malformed_number();
        }

        self.make_token(TokenKind::Number)
    }

    /// Consumes an exponent suffix if one is present.
    ///
    /// `e` without digits after it is left alone, so `2e` scans as the
    /// number `2` followed by the identifier `e`.
    fn lex_exponent(&mut self) {
        if !matches!(self.cursor.current_char(), 'e' | 'E') {
            return;
        }

        let after_sign = match self.cursor.peek_char(1) {
            '+' | '-' => 2,
            _ => 1,
        };
        if !self.cursor.peek_char(after_sign).is_ascii_digit() {
            return;
        }

        self.cursor.advance_n(after_sign);
        self.eat_digits();
    }

    /// Consumes the rest of a run of digits and dots and reports it.
    fn lex_malformed_number(&mut self) -> Token {
        self.cursor.eat_while(|c| c.is_ascii_digit() || c == '.');

        let token = self.make_token(TokenKind::Invalid);
        warn!(text = token.text(), "malformed number literal");
        self.report_error(
            DiagnosticCode::E_LEXER_INVALID_NUMBER,
            format!("invalid number literal '{}'", token.text()),
            Some("a number has at most one decimal point"),
        );
        token
    }

    fn eat_digits(&mut self) {
        self.cursor.eat_while(|c| c.is_ascii_digit());
    }
}
