//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - One- and two-character operators
//! - Illegal input
//! - Stream exhaustion

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let true false if else return");

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[6].literal, "return");
    assert_eq!(tokens.len(), 7);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar CamelCase lets");

    assert_eq!(tokens[0], Token::new(TokenKind::Ident, "foo"));
    assert_eq!(tokens[1], Token::new(TokenKind::Ident, "bar"));
    assert_eq!(tokens[2], Token::new(TokenKind::Ident, "CamelCase"));
    // Keywords only match whole runs
    assert_eq!(tokens[3], Token::new(TokenKind::Ident, "lets"));
}

#[test]
fn test_identifier_stops_at_non_letter() {
    let tokens = tokenize("abc123");

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Ident, "abc"),
            Token::new(TokenKind::Int, "123"),
        ]
    );
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("42 0 838383");

    assert_eq!(tokens[0], Token::new(TokenKind::Int, "42"));
    assert_eq!(tokens[1], Token::new(TokenKind::Int, "0"));
    assert_eq!(tokens[2], Token::new(TokenKind::Int, "838383"));
}

#[test]
fn test_tokenize_overflowing_integer_is_illegal() {
    let tokens = tokenize("99999999999999999999;");

    assert_eq!(tokens[0], Token::new(TokenKind::Illegal, "99999999999999999999"));
    assert_eq!(tokens[1].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_let_statement() {
    let tokens = tokenize("let five = 5;");

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Let, "let"),
            Token::new(TokenKind::Ident, "five"),
            Token::new(TokenKind::Assign, "="),
            Token::new(TokenKind::Int, "5"),
            Token::new(TokenKind::Semicolon, ";"),
        ]
    );
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("= + - ! * / < >");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
        ]
    );
}

#[test]
fn test_tokenize_two_character_operators() {
    assert_eq!(tokenize("=="), vec![Token::new(TokenKind::Equal, "==")]);
    assert_eq!(tokenize("!="), vec![Token::new(TokenKind::NotEqual, "!=")]);

    // Trailing single characters must not read past the end
    assert_eq!(tokenize("="), vec![Token::new(TokenKind::Assign, "=")]);
    assert_eq!(tokenize("!"), vec![Token::new(TokenKind::Bang, "!")]);

    let tokens = tokenize("10 == 10; 10 != 9; !-x");
    assert_eq!(tokens[1].kind, TokenKind::Equal);
    assert_eq!(tokens[5].kind, TokenKind::NotEqual);
    assert_eq!(tokens[8].kind, TokenKind::Bang);
    assert_eq!(tokens[9].kind, TokenKind::Minus);
}

#[test]
fn test_tokenize_delimiters() {
    let tokens = tokenize("( ) { } , ;");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_tokenize_illegal_character() {
    let tokens = tokenize("let x = @;");

    assert_eq!(tokens[3], Token::new(TokenKind::Illegal, "@"));
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_multibyte_illegal_character() {
    let tokens = tokenize("a € b");

    assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "€"));
    assert_eq!(tokens[2], Token::new(TokenKind::Ident, "b"));
}

#[test]
fn test_advance_stays_on_char_boundary() {
    let mut lexer = Lexer::new("€a");
    lexer.advance_n(1);

    assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Ident, "a")));
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn test_whitespace_only_yields_nothing() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("  \t\r\n  \n").is_empty());
}

#[test]
fn test_exhausted_lexer_stays_exhausted() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Ident, "x")));
    assert!(lexer.at_eof());
    assert_eq!(lexer.next_token(), None);
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let ab == 12;");

    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 6);
    assert_eq!(tokens[2].span.start.0, 7);
    assert_eq!(tokens[2].span.end.0, 9);
    assert_eq!(tokens[3].span.start.0, 10);
    assert_eq!(tokens[3].span.end.0, 12);
}

#[test]
fn test_token_equality_ignores_span() {
    let from_source = tokenize("   five")[0].clone();

    assert_eq!(from_source, Token::new(TokenKind::Ident, "five"));
    assert_ne!(from_source, Token::new(TokenKind::Ident, "six"));
    assert_ne!(from_source, Token::new(TokenKind::Let, "five"));
}

#[test]
fn test_tokenize_program() {
    let source = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
";
    let expected = vec![
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "ten"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "y"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Ident, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Ident, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "result"),
        (TokenKind::Assign, "="),
        (TokenKind::Ident, "add"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "ten"),
        (TokenKind::RParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Bang, "!"),
        (TokenKind::Minus, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "5"),
        (TokenKind::LessThan, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::GreaterThan, ">"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::LParen, "("),
        (TokenKind::Int, "5"),
        (TokenKind::LessThan, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Int, "10"),
        (TokenKind::Equal, "=="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "10"),
        (TokenKind::NotEqual, "!="),
        (TokenKind::Int, "9"),
        (TokenKind::Semicolon, ";"),
    ];

    let tokens = tokenize(source);
    assert_eq!(tokens.len(), expected.len());

    for (token, (kind, literal)) in tokens.iter().zip(expected) {
        assert_eq!(*token, Token::new(kind, literal));
    }
}
