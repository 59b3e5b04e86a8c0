//! Property-based tests for the lexer over arbitrary input.

use flexmc_lex::{Lexer, Token, TokenKind};
use flexmc_util::Handler;
use proptest::prelude::*;

/// Installs a subscriber so `RUST_LOG=flexmc_lex=trace` shows the scan.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn lex_tokens(source: &str) -> Vec<Token> {
    let handler = Handler::new();
    let mut lexer = Lexer::new(source, &handler);
    lexer.tokenize()
}

#[test]
fn test_property_reset_reproduces_tokens() {
    init_tracing();

    proptest!(|(input in "\\PC{0,64}")| {
        let handler = Handler::new();
        let mut lexer = Lexer::new(&input, &handler);
        let first = lexer.tokenize();
        lexer.reset();
        let second = lexer.tokenize();
        prop_assert_eq!(first, second);
    });
}

#[test]
fn test_property_forward_progress() {
    proptest!(|(input in "\\PC{0,64}")| {
        let handler = Handler::new();
        let mut lexer = Lexer::new(&input, &handler);
        let mut last = lexer.position();
        loop {
            let token = lexer.next_token();
            let position = lexer.position();
            prop_assert!(position <= input.len());
            if token.is_eof() {
                prop_assert_eq!(position, input.len());
                prop_assert!(lexer.next_token().is_eof());
                prop_assert_eq!(lexer.position(), position);
                break;
            }
            prop_assert!(position > last, "no progress on {:?}", token);
            last = position;
        }
    });
}

#[test]
fn test_property_tokens_cover_input() {
    proptest!(|(input in "\\PC{0,64}")| {
        let tokens = lex_tokens(&input);
        prop_assert!(tokens.last().is_some_and(Token::is_eof));

        let mut end = 0;
        for token in &tokens[..tokens.len() - 1] {
            let span = token.span();
            prop_assert!(span.start >= end);
            prop_assert!(span.end > span.start);
            prop_assert_eq!(span.slice(&input), Some(token.text()));
            prop_assert!(input[end..span.start].chars().all(char::is_whitespace));
            end = span.end;
        }
        prop_assert!(input[end..].chars().all(char::is_whitespace));
    });
}

#[test]
fn test_property_arbitrary_identifier_strings() {
    proptest!(|(input in "[a-z_][a-zA-Z0-9_]{0,40}")| {
        let tokens = lex_tokens(&input);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind(), TokenKind::Ident);
        prop_assert_eq!(tokens[0].text(), input.as_str());
    });
}

#[test]
fn test_property_arbitrary_decimal_strings() {
    proptest!(|(input in "[0-9]{1,12}(\\.[0-9]{0,6})?([eE][+-]?[0-9]{1,3})?")| {
        let tokens = lex_tokens(&input);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind(), TokenKind::Number);
        prop_assert!(tokens[0].number_value().is_some());
    });
}

#[test]
fn test_property_invalid_tokens_are_reported() {
    proptest!(|(input in "\\PC{0,64}")| {
        let handler = Handler::new();
        let mut lexer = Lexer::new(&input, &handler);
        let invalid = lexer
            .tokenize()
            .iter()
            .filter(|t| t.kind() == TokenKind::Invalid)
            .count();
        prop_assert_eq!(handler.error_count(), invalid);
    });
}
