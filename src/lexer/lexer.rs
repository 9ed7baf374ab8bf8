use lazy_static::lazy_static;
use regex::Regex;

use crate::{Span, MK_SYMBOL, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref LETTER_RUN: Regex = Regex::new(r"^\p{Alphabetic}+").expect("letter pattern compiles");
    static ref DIGIT_RUN: Regex = Regex::new(r"^[0-9]+").expect("digit pattern compiles");
}

/// Pull-based tokenizer over an owned source string.
///
/// Each call to [`Lexer::next_token`] scans exactly one token. Once the
/// cursor reaches the end of the source every further call returns `None`.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
        }
    }

    /// Moves the cursor `n` bytes forward, rounding up to a character boundary.
    pub(crate) fn advance_n(&mut self, n: usize) {
        let mut pos = (self.pos + n).min(self.source.len());
        while !self.source.is_char_boundary(pos) {
            pos += 1;
        }
        self.pos = pos;
    }

    pub(crate) fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// The character after the current one, if any.
    pub fn peek_char(&self) -> Option<char> {
        let mut chars = self.remainder().chars();
        chars.next()?;
        chars.next()
    }

    pub(crate) fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.at() {
            self.advance_n(1);
        }
    }

    /// Scans the next token, or returns `None` once the source is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let current = self.at()?;

        let token = match current {
            '=' if self.peek_char() == Some('=') => MK_SYMBOL!(self, TokenKind::Equal, "=="),
            '=' => MK_SYMBOL!(self, TokenKind::Assign, "="),
            '!' if self.peek_char() == Some('=') => MK_SYMBOL!(self, TokenKind::NotEqual, "!="),
            '!' => MK_SYMBOL!(self, TokenKind::Bang, "!"),
            '+' => MK_SYMBOL!(self, TokenKind::Plus, "+"),
            '-' => MK_SYMBOL!(self, TokenKind::Minus, "-"),
            '*' => MK_SYMBOL!(self, TokenKind::Asterisk, "*"),
            '/' => MK_SYMBOL!(self, TokenKind::Slash, "/"),
            '<' => MK_SYMBOL!(self, TokenKind::LessThan, "<"),
            '>' => MK_SYMBOL!(self, TokenKind::GreaterThan, ">"),
            '(' => MK_SYMBOL!(self, TokenKind::LParen, "("),
            ')' => MK_SYMBOL!(self, TokenKind::RParen, ")"),
            '{' => MK_SYMBOL!(self, TokenKind::LBrace, "{"),
            '}' => MK_SYMBOL!(self, TokenKind::RBrace, "}"),
            ',' => MK_SYMBOL!(self, TokenKind::Comma, ","),
            ';' => MK_SYMBOL!(self, TokenKind::Semicolon, ";"),
            c if c.is_alphabetic() => self.lex_word(),
            c if c.is_ascii_digit() => self.lex_integer(),
            c => self.lex_illegal(c),
        };

        Some(token)
    }

    fn lex_word(&mut self) -> Token {
        let Some(word) = LETTER_RUN.find(self.remainder()).map(|m| m.as_str().to_string()) else {
            return self.lex_illegal(self.at().unwrap_or_default());
        };

        let start = self.pos;
        self.advance_n(word.len());

        let kind = RESERVED_LOOKUP
            .get(word.as_str())
            .copied()
            .unwrap_or(TokenKind::Ident);

        MK_TOKEN!(kind, word, Span::new(start, self.pos))
    }

    fn lex_integer(&mut self) -> Token {
        let Some(digits) = DIGIT_RUN.find(self.remainder()).map(|m| m.as_str().to_string()) else {
            return self.lex_illegal(self.at().unwrap_or_default());
        };

        let start = self.pos;
        self.advance_n(digits.len());

        // Runs that overflow i64 cannot become integer literals
        let kind = if digits.parse::<i64>().is_ok() {
            TokenKind::Int
        } else {
            TokenKind::Illegal
        };

        MK_TOKEN!(kind, digits, Span::new(start, self.pos))
    }

    fn lex_illegal(&mut self, c: char) -> Token {
        let start = self.pos;
        self.advance_n(c.len_utf8().max(1));
        MK_TOKEN!(TokenKind::Illegal, c.to_string(), Span::new(start, self.pos))
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Tokenizes the whole source. The result holds no end-of-input marker.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    Lexer::new(source).collect()
}
