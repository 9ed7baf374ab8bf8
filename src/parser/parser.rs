//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level
//! parsing loop. The parser keeps a two-token window (`current` and `peek`)
//! over the token stream and collects diagnostics instead of stopping at
//! the first one.

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{precedence_of, stmt_handler, Precedence},
    stmt::parse_stmt,
};

/// Deepest chain of nested expressions the parser will descend into.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// Once the underlying token stream is exhausted both `current` and `peek`
/// hold an end-of-input token.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    tokens: Box<dyn Iterator<Item = Token>>,
    /// Token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// End offset of the last token pulled, where the end-of-input token is placed
    last_offset: usize,
    /// Number of expressions currently being parsed inside one another
    depth: usize,
}

impl Parser {
    /// Creates a parser reading from `lexer`.
    pub fn new(lexer: Lexer) -> Self {
        Parser::from_tokens(lexer)
    }

    /// Creates a parser over any owned token stream.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
        I::IntoIter: 'static,
    {
        let mut parser = Parser {
            tokens: Box::new(tokens.into_iter()),
            current: Token::eof(0),
            peek: Token::eof(0),
            errors: vec![],
            last_offset: 0,
            depth: 0,
        };

        // Fill current and peek
        parser.advance();
        parser.advance();
        parser
    }

    fn pull(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => {
                self.last_offset = token.span.end.0 as usize;
                token
            }
            None => Token::eof(self.last_offset),
        }
    }

    /// Shifts `peek` into `current` and reads a new `peek`.
    pub fn advance(&mut self) {
        let next = self.pull();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_precedence(&self) -> Precedence {
        precedence_of(self.current.kind)
    }

    pub fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind)
    }

    /// Advances onto `peek` if it has the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or `None` after recording an
    /// "expected next token" error.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Option<Token> {
        if self.peek.kind == expected_kind {
            self.advance();
            Some(self.current.clone())
        } else {
            self.peek_error(expected_kind);
            None
        }
    }

    /// Consumes an optional terminator after a statement.
    pub fn skip_semicolon(&mut self) {
        if self.peek.kind == TokenKind::Semicolon {
            self.advance();
        }
    }

    fn peek_error(&mut self, expected_kind: TokenKind) {
        let position = self.peek.span.start;
        self.push_error(
            ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found: self.peek.kind,
            },
            position,
        );
    }

    pub fn push_error(&mut self, error_impl: ErrorImpl, position: Position) {
        self.errors.push(Error::new(error_impl, position));
    }

    /// Returns the diagnostics collected so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Enters one more level of expression nesting.
    ///
    /// Records an error and returns `false` once [`MAX_NESTING_DEPTH`] is
    /// reached; callers must only call [`Parser::exit_nesting`] on `true`.
    pub fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            let position = self.get_position();
            self.push_error(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                position,
            );
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.current.is(TokenKind::Eof)
    }

    /// Returns the current position in the source.
    pub fn get_position(&self) -> Position {
        self.current.span.start
    }

    /// Skips the rest of a malformed statement.
    ///
    /// Stops on its terminator, or just before a token that begins the next
    /// statement when the terminator is missing.
    fn synchronize(&mut self) {
        while self.has_tokens() && self.current.kind != TokenKind::Semicolon {
            if stmt_handler(self.peek.kind).is_some() {
                break;
            }
            self.advance();
        }
    }

    /// Parses statements until the token stream is exhausted.
    ///
    /// Malformed statements are left out of the program; check
    /// [`Parser::errors`] before trusting the result.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while self.has_tokens() {
            if let Some(statement) = parse_stmt(self) {
                statements.push(statement);
            } else {
                self.synchronize();
            }
            self.advance();
        }

        Program { statements }
    }
}

/// Parses source text into a Program.
///
/// This is the main entry point for parsing. It creates a lexer and a
/// parser over it and parses all statements.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding any errors found
/// - The parsed Program
pub fn parse(source: impl Into<String>) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
