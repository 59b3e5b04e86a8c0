//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use flexmc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
use tracing::{debug, trace, warn};

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::keywords::KeywordTable;
use crate::token::{Token, TokenKind};
use crate::unicode::{is_ident_start, is_number_start};

/// Lexer for flexMC expressions.
///
/// Pull-based: every [`Lexer::next_token`] call scans exactly one token from
/// the cursor onwards. Once the input is exhausted every further call returns
/// [`TokenKind::Eof`] without moving. [`Lexer::reset`] rewinds to the start
/// of the same input.
///
/// Lexical errors never abort the scan. The offending text comes back as a
/// [`TokenKind::Invalid`] token, and a diagnostic goes to the handler.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Sink for lexical errors.
    handler: &'a Handler,

    pub(crate) keywords: KeywordTable,

    /// Whether numeric literals may carry an `e`/`E` exponent.
    pub(crate) scientific_notation: bool,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    token_start_line: u32,

    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source` with the flexMC keywords.
    ///
    /// Nothing is validated here; an empty `source` is fine and scans
    /// straight to [`TokenKind::Eof`].
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            keywords: KeywordTable::flexmc(),
            scientific_notation: true,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Creates a lexer that applies `config`.
    ///
    /// # Errors
    ///
    /// Fails if a configured keyword is not a single word.
    pub fn with_config(
        source: &'a str,
        handler: &'a Handler,
        config: &LexerConfig,
    ) -> Result<Self> {
        let mut lexer = Self::new(source, handler);
        lexer.keywords = config.keyword_table()?;
        lexer.scientific_notation = config.scientific_notation;
        debug!(
            extra_keywords = config.keywords.len(),
            scientific_notation = config.scientific_notation,
            "lexer configured"
        );
        Ok(lexer)
    }

    /// Reserves `word` as a keyword for the rest of this lexer's life.
    ///
    /// ```
    /// use flexmc_lex::{Lexer, Token, TokenKind};
    /// use flexmc_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let mut lexer = Lexer::new("myKeyword", &handler);
    /// lexer.register_keyword("myKeyword").unwrap();
    /// assert_eq!(lexer.next_token(), Token::new(TokenKind::Keyword, "myKeyword"));
    /// ```
    pub fn register_keyword(&mut self, word: &str) -> Result<()> {
        self.keywords.register_keyword(word)
    }

    /// The reserved words this lexer recognizes.
    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Returns the next token from the input.
    ///
    /// Skips whitespace, then classifies by the first character: words,
    /// numbers, then symbols by longest match. Anything else is an
    /// unexpected character.
    ///
    /// # Returns
    /// The next token, or `Token::Eof` once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Token::with_span(TokenKind::Eof, "", self.token_span());
        }

        let c = self.cursor.current_char();
        let token = match c {
            c if is_number_start(c, self.cursor.peek_char(1)) => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            c => match self.lex_symbol() {
                Some(token) => token,
                None => self.lex_unexpected(c),
            },
        };

        trace!(
            kind = %token.kind(),
            text = token.text(),
            start = self.token_start,
            end = self.cursor.position(),
            "token"
        );
        token
    }

    /// Scans from the cursor to the end of input.
    ///
    /// The returned tokens always end with exactly one `Eof`.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Rewinds to the start of the input.
    ///
    /// The input and the keyword table are untouched, so the next scan
    /// produces the same tokens as the first one.
    pub fn reset(&mut self) {
        debug!(from = self.cursor.position(), "lexer reset");
        self.cursor.reset();
        self.token_start = 0;
        self.token_start_line = 1;
        self.token_start_column = 1;
    }

    /// Returns the current byte position in the input.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// True once the cursor has reached the end of the input.
    ///
    /// Trailing whitespace counts as unread until the next call skips it.
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// The full input.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Span from the current token start to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Builds a token of `kind` from the text consumed since the token start.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::with_span(kind, self.cursor.slice_from(self.token_start), self.token_span())
    }

    /// Reports a lexical error covering the current token.
    pub(crate) fn report_error(&self, code: DiagnosticCode, message: String, help: Option<&str>) {
        let mut builder = DiagnosticBuilder::error(message)
            .code(code)
            .span(self.token_span());
        if let Some(help) = help {
            builder = builder.help(help);
        }
        builder.emit(self.handler);
    }

    /// Consumes one unrecognized character.
    pub(crate) fn lex_unexpected(&mut self, c: char) -> Token {
        self.cursor.advance();
        warn!(
            character = %c.escape_debug(),
            line = self.token_start_line,
            column = self.token_start_column,
            "unexpected character"
        );
        self.report_error(
            DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            format!("unexpected character '{}'", c.escape_debug()),
            (c == ':').then_some("assignment is written ':='"),
        );
        self.make_token(TokenKind::Invalid)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
