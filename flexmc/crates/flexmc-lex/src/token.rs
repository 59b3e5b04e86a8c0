//! Token type definitions.
//!
//! A [`Token`] is an owned, immutable value: its kind, the exact text it was
//! scanned from, and where that text sits in the input. Tokens compare equal
//! when kind and text match; the span is diagnostic only.

use std::fmt;

use flexmc_util::Span;

/// Classification of a token.
///
/// The set is closed: words and literals get one variant each, and every
/// operator or punctuation symbol of the language has its own variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input
    Eof,
    /// Identifier: `x`, `spot_price`, `_tmp1`
    Ident,
    /// Numeric literal: `5`, `5.00`, `.5`, `1e-3`
    Number,
    /// Statement keyword (`IF`, `THEN`, `ELSE`, `PAY`, `STOP`) or a
    /// keyword registered at runtime
    Keyword,
    /// Built-in real function name: `EXP`, `MAX`, `LEN`, ...
    Function,

    /// `AND`
    And,
    /// `OR`
    Or,
    /// `NOT`
    Not,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `**`
    StarStar,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `<<`, smooth less-than
    SmoothLt,
    /// `>>`, smooth greater-than
    SmoothGt,
    /// `=`
    Eq,
    /// `==`
    EqEq,

    /// `:=`
    Assign,
    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    StarEq,
    /// `/=`
    SlashEq,
    /// `**=`
    StarStarEq,

    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    /// Unrecognized character or malformed literal
    Invalid,
}

/// Every symbol the scanner recognizes, paired with its kind.
///
/// The scanner tries these in order and takes the first that matches, so
/// longer symbols come before their prefixes.
pub const SYMBOLS: &[(&str, TokenKind)] = &[
    ("**=", TokenKind::StarStarEq),
    ("**", TokenKind::StarStar),
    ("*=", TokenKind::StarEq),
    ("+=", TokenKind::PlusEq),
    ("-=", TokenKind::MinusEq),
    ("/=", TokenKind::SlashEq),
    (":=", TokenKind::Assign),
    ("<=", TokenKind::LtEq),
    (">=", TokenKind::GtEq),
    ("<<", TokenKind::SmoothLt),
    (">>", TokenKind::SmoothGt),
    ("==", TokenKind::EqEq),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("<", TokenKind::Lt),
    (">", TokenKind::Gt),
    ("=", TokenKind::Eq),
    (",", TokenKind::Comma),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("[", TokenKind::LBracket),
    ("]", TokenKind::RBracket),
];

impl TokenKind {
    /// Stable short name used in token rendering.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Ident => "id",
            TokenKind::Number => "num",
            TokenKind::Keyword => "keyW",
            TokenKind::Function => "fun",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Star => "mul",
            TokenKind::Slash => "div",
            TokenKind::StarStar => "pow",
            TokenKind::Lt => "lt",
            TokenKind::Gt => "gt",
            TokenKind::LtEq => "le",
            TokenKind::GtEq => "ge",
            TokenKind::SmoothLt => "smooth_lt",
            TokenKind::SmoothGt => "smooth_gt",
            TokenKind::Eq => "eq",
            TokenKind::EqEq => "eq_eq",
            TokenKind::Assign => "assign",
            TokenKind::PlusEq => "plus_assign",
            TokenKind::MinusEq => "minus_assign",
            TokenKind::StarEq => "mul_assign",
            TokenKind::SlashEq => "div_assign",
            TokenKind::StarStarEq => "pow_assign",
            TokenKind::Comma => "comma",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::LBracket => "lbracket",
            TokenKind::RBracket => "rbracket",
            TokenKind::Invalid => "invalid",
        }
    }

    /// True for arithmetic, comparison, logical, and assignment operators.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::StarStar
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::LtEq
                | TokenKind::GtEq
                | TokenKind::SmoothLt
                | TokenKind::SmoothGt
                | TokenKind::Eq
                | TokenKind::EqEq
                | TokenKind::Assign
                | TokenKind::PlusEq
                | TokenKind::MinusEq
                | TokenKind::StarEq
                | TokenKind::SlashEq
                | TokenKind::StarStarEq
        )
    }

    /// True for kinds scanned from a word: identifiers and reserved words.
    pub fn is_word(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Keyword
                | TokenKind::Function
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
        )
    }
}

/// How an operator token binds when expressions are parsed.
///
/// Precedence follows Python's operator table: higher binds tighter.
/// Brackets sit at 0 so nothing pops past an open group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsingContext {
    /// Binding strength
    pub precedence: u8,
    /// Whether `a op b op c` groups as `(a op b) op c`
    pub left_associative: bool,
    /// The token may start an operand (unary `-`, a group)
    pub maybe_prefix: bool,
    /// The token may sit between two operands
    pub maybe_infix: bool,
    /// The token only ever sits between two operands
    pub is_infix: bool,
}

impl ParsingContext {
    const fn infix(precedence: u8, left_associative: bool) -> Self {
        Self {
            precedence,
            left_associative,
            maybe_prefix: false,
            maybe_infix: true,
            is_infix: true,
        }
    }
}

impl TokenKind {
    /// Parsing metadata for operators, commas and opening brackets.
    ///
    /// `None` for words, literals, closing brackets, assignments and `Eof`.
    ///
    /// ```
    /// use flexmc_lex::TokenKind;
    ///
    /// let pow = TokenKind::StarStar.parsing_context().unwrap();
    /// assert_eq!(pow.precedence, 9);
    /// assert!(!pow.left_associative);
    /// assert!(TokenKind::RParen.parsing_context().is_none());
    /// ```
    pub fn parsing_context(self) -> Option<ParsingContext> {
        let context = match self {
            TokenKind::StarStar => ParsingContext::infix(9, false),
            TokenKind::Star | TokenKind::Slash => ParsingContext::infix(7, true),
            TokenKind::Plus | TokenKind::Minus => ParsingContext {
                maybe_prefix: true,
                is_infix: false,
                ..ParsingContext::infix(6, true)
            },
            TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::LtEq
            | TokenKind::GtEq
            | TokenKind::SmoothLt
            | TokenKind::SmoothGt
            | TokenKind::Eq
            | TokenKind::EqEq => ParsingContext::infix(5, false),
            TokenKind::Not => ParsingContext::infix(4, false),
            TokenKind::And => ParsingContext::infix(3, false),
            TokenKind::Or => ParsingContext::infix(2, false),
            TokenKind::Comma => ParsingContext::infix(1, true),
            TokenKind::LParen => ParsingContext {
                maybe_prefix: true,
                is_infix: false,
                ..ParsingContext::infix(0, true)
            },
            TokenKind::LBracket => ParsingContext {
                precedence: 0,
                left_associative: true,
                maybe_prefix: true,
                maybe_infix: false,
                is_infix: false,
            },
            _ => return None,
        };
        Some(context)
    }

    /// Binding strength, `None` where [`TokenKind::parsing_context`] is.
    pub fn precedence(self) -> Option<u8> {
        self.parsing_context().map(|c| c.precedence)
    }

    /// True unless the operator groups right to left.
    pub fn is_left_associative(self) -> bool {
        self.parsing_context().is_none_or(|c| c.left_associative)
    }

    /// True if the token may start an operand.
    pub fn maybe_prefix(self) -> bool {
        self.parsing_context().is_some_and(|c| c.maybe_prefix)
    }

    /// True if the token only ever sits between two operands.
    pub fn is_infix(self) -> bool {
        self.parsing_context().is_some_and(|c| c.is_infix)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexical unit.
#[derive(Clone, Debug)]
pub struct Token {
    kind: TokenKind,
    text: String,
    span: Span,
}

impl Token {
    /// Creates a token without location information.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self::with_span(kind, text, Span::DUMMY)
    }

    /// Creates a token scanned from `span`.
    pub fn with_span(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// The end-of-input token.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// Token classification
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Exact text matched from the input
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the token was scanned from
    pub fn span(&self) -> Span {
        self.span
    }

    /// True for the end-of-input token
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Numeric value of a [`TokenKind::Number`] token.
    ///
    /// ```
    /// use flexmc_lex::{Token, TokenKind};
    ///
    /// assert_eq!(Token::new(TokenKind::Number, "5.00").number_value(), Some(5.0));
    /// assert_eq!(Token::new(TokenKind::Ident, "x").number_value(), None);
    /// ```
    pub fn number_value(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number => self.text.parse().ok(),
            _ => None,
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

/// Renders as `Tok(t=<kind>, v=<text>)`.
///
/// End-of-input has no text, so its value slot repeats the kind name.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self.kind {
            TokenKind::Eof => self.kind.name(),
            _ => self.text.as_str(),
        };
        write!(f, "Tok(t={}, v={})", self.kind.name(), value)
    }
}
