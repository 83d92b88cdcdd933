use std::io::Cursor;

use deskcalc::{
    error::LexError,
    interpreter::lexer::{Token, TokenStream},
};
use logos::Logos;

fn number(value: f64) -> Token {
    Token::Number(value.into())
}

fn collect(src: &str) -> Vec<Token> {
    let mut tokens = TokenStream::from_source(src);
    let mut out = Vec::new();
    while let Some(token) = tokens.get().unwrap() {
        out.push(token);
    }
    out
}

#[test]
fn operators_and_punctuation() {
    assert_eq!(collect("+-*/%^R!=(){};?"),
               vec![Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::Percent,
                    Token::Caret,
                    Token::Root,
                    Token::Bang,
                    Token::Equals,
                    Token::LParen,
                    Token::RParen,
                    Token::LBrace,
                    Token::RBrace,
                    Token::Print,
                    Token::Help]);
}

#[test]
fn numeric_literals() {
    assert_eq!(collect("2.75 .5 2. 1e3 2.5E-2 007"),
               vec![number(2.75), number(0.5), number(2.0), number(1000.0), number(0.025),
                    number(7.0)]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(collect("let exit letter exits x1 pi"),
               vec![Token::Let,
                    Token::Quit,
                    Token::Identifier("letter".into()),
                    Token::Identifier("exits".into()),
                    Token::Identifier("x1".into()),
                    Token::Identifier("pi".into())]);
}

#[test]
fn uppercase_r_always_starts_a_root() {
    assert_eq!(collect("8R3"), vec![number(8.0), Token::Root, number(3.0)]);
    assert_eq!(collect("Rate"), vec![Token::Root, Token::Identifier("ate".into())]);
    assert_eq!(collect("xR2"), vec![Token::Identifier("xR2".into())]);
}

#[test]
fn whitespace_and_line_breaks_are_skipped() {
    assert_eq!(collect(" 1\t+\r\n\n  2 ;\n"),
               vec![number(1.0), Token::Plus, number(2.0), Token::Print]);
}

#[test]
fn whitespace_never_becomes_a_token() {
    let mut lexer = Token::lexer(" \t\r\n\x0c ");
    assert_eq!(lexer.next(), None);
    assert!(collect("\n\n   \n").is_empty());
}

#[test]
fn end_of_input_is_not_an_error() {
    let mut tokens = TokenStream::from_source("1");
    assert_eq!(tokens.get().unwrap(), Some(number(1.0)));
    assert_eq!(tokens.get().unwrap(), None);
    assert_eq!(tokens.get().unwrap(), None);
}

#[test]
fn bad_characters_report_their_line_and_are_consumed() {
    let mut tokens = TokenStream::from_source("1\n\n2 $ 3");
    assert_eq!(tokens.get().unwrap(), Some(number(1.0)));
    assert_eq!(tokens.get().unwrap(), Some(number(2.0)));
    match tokens.get() {
        Err(LexError::BadToken { token, line }) => {
            assert_eq!(token, "$");
            assert_eq!(line, 3);
        },
        other => panic!("expected a bad token, got {other:?}"),
    }
    assert_eq!(tokens.get().unwrap(), Some(number(3.0)));
}

#[test]
fn non_ascii_characters_are_bad_tokens() {
    let mut tokens = TokenStream::from_source("é 1");
    assert!(matches!(tokens.get(), Err(LexError::BadToken { ref token, .. }) if token == "é"));
    assert_eq!(tokens.get().unwrap(), Some(number(1.0)));
}

#[test]
fn pushback_returns_the_same_token() {
    let mut tokens = TokenStream::from_source("2");
    tokens.putback(Token::Identifier("v".into())).unwrap();
    assert_eq!(tokens.get().unwrap(), Some(Token::Identifier("v".into())));
    assert_eq!(tokens.get().unwrap(), Some(number(2.0)));
}

#[test]
fn second_pushback_fails() {
    let mut tokens = TokenStream::from_source("");
    tokens.putback(Token::Plus).unwrap();
    assert!(matches!(tokens.putback(Token::Minus), Err(LexError::PutbackFull { .. })));
    assert_eq!(tokens.get().unwrap(), Some(Token::Plus));
    tokens.putback(Token::Minus).unwrap();
    assert_eq!(tokens.get().unwrap(), Some(Token::Minus));
}

#[test]
fn ignore_uses_a_matching_pushed_back_token() {
    let mut tokens = TokenStream::from_source("5;");
    tokens.putback(Token::Print).unwrap();
    tokens.ignore(&Token::Print).unwrap();
    assert_eq!(tokens.get().unwrap(), Some(number(5.0)));
}

#[test]
fn ignore_discards_a_non_matching_pushed_back_token() {
    let mut tokens = TokenStream::from_source("1 ) ; 2");
    tokens.putback(Token::Plus).unwrap();
    tokens.ignore(&Token::Print).unwrap();
    assert_eq!(tokens.get().unwrap(), Some(number(2.0)));
}

#[test]
fn ignore_skips_bad_characters_across_lines() {
    let mut tokens = TokenStream::from_source("1 $ #\n & ;\n4");
    tokens.ignore(&Token::Print).unwrap();
    assert_eq!(tokens.get().unwrap(), Some(number(4.0)));
    assert_eq!(tokens.line(), 3);
}

#[test]
fn ignore_matches_kinds_not_payloads() {
    let mut tokens = TokenStream::from_source("a b 1 c");
    tokens.ignore(&number(0.0)).unwrap();
    assert_eq!(tokens.get().unwrap(), Some(Token::Identifier("c".into())));
}

#[test]
fn ignore_stops_at_end_of_input() {
    let mut tokens = TokenStream::new(Cursor::new("1 + 2"));
    tokens.ignore(&Token::Print).unwrap();
    assert_eq!(tokens.get().unwrap(), None);
}
