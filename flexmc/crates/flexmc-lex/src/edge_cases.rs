//! Edge case tests for flexmc-lex

use crate::{Lexer, Token, TokenKind};
use flexmc_util::Handler;

fn lex_all(source: &str) -> Vec<Token> {
    let handler = Handler::new();
    let lexer = Lexer::new(source, &handler);
    lexer.collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex_all(source).iter().map(|t| t.kind()).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(lex_all("").is_empty());
}

#[test]
fn test_edge_single_char_ident() {
    assert_eq!(lex_all("x"), vec![Token::new(TokenKind::Ident, "x")]);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let t = lex_all(&format!("{} := 1", name));
    assert_eq!(t[0], Token::new(TokenKind::Ident, name.as_str()));
    assert_eq!(t.len(), 3);
}

#[test]
fn test_edge_long_number() {
    let digits = "9".repeat(5000);
    let t = lex_all(&digits);
    assert_eq!(t, vec![Token::new(TokenKind::Number, digits.as_str())]);
}

#[test]
fn test_edge_no_whitespace() {
    assert_eq!(
        kinds("x:=-1.5e2**y"),
        vec![
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Minus,
            TokenKind::Number,
            TokenKind::StarStar,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn test_edge_minus_is_not_part_of_number() {
    let t = lex_all("-5");
    assert_eq!(t[0].kind(), TokenKind::Minus);
    assert_eq!(t[1], Token::new(TokenKind::Number, "5"));
}

#[test]
fn test_edge_lone_dot() {
    let handler = Handler::new();
    let mut lexer = Lexer::new(". x", &handler);
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Invalid, "."));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "x"));
    assert_eq!(handler.error_count(), 1);
}

#[test]
fn test_edge_dot_then_number() {
    assert_eq!(
        lex_all("x.5"),
        vec![
            Token::new(TokenKind::Ident, "x"),
            Token::new(TokenKind::Number, ".5"),
        ]
    );
}

#[test]
fn test_edge_mixed_whitespace() {
    assert_eq!(
        kinds("\tIF\r\n  x\u{00A0}THEN\n"),
        vec![TokenKind::Keyword, TokenKind::Ident, TokenKind::Keyword]
    );
}

#[test]
fn test_edge_trailing_whitespace_then_eof() {
    let handler = Handler::new();
    let mut lexer = Lexer::new("x   ", &handler);
    lexer.next_token();
    assert!(!lexer.is_exhausted());
    assert!(lexer.next_token().is_eof());
    assert!(lexer.is_exhausted());
    assert_eq!(lexer.position(), 4);
}

#[test]
fn test_edge_eof_is_sticky() {
    let handler = Handler::new();
    let mut lexer = Lexer::new("1", &handler);
    lexer.next_token();
    for _ in 0..5 {
        assert!(lexer.next_token().is_eof());
        assert_eq!(lexer.position(), 1);
    }
}

#[test]
fn test_edge_only_invalid() {
    let handler = Handler::new();
    let mut lexer = Lexer::new("@#$", &handler);
    let tokens = lexer.tokenize();
    assert_eq!(tokens.len(), 4);
    assert!(tokens[..3].iter().all(|t| t.kind() == TokenKind::Invalid));
    assert_eq!(handler.error_count(), 3);
}

#[test]
fn test_edge_underscore_identifier() {
    assert_eq!(lex_all("_"), vec![Token::new(TokenKind::Ident, "_")]);
    assert_eq!(lex_all("__x1"), vec![Token::new(TokenKind::Ident, "__x1")]);
}

#[test]
fn test_edge_multiline_positions() {
    let handler = Handler::new();
    let mut lexer = Lexer::new("x := 1\nPAY x", &handler);
    let tokens = lexer.tokenize();
    let pay = &tokens[3];
    assert_eq!(pay.kind(), TokenKind::Keyword);
    assert_eq!(pay.span().line, 2);
    assert_eq!(pay.span().column, 1);
}
