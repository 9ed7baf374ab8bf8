//! Static dispatch tables for the Pratt parser.
//!
//! Each table is a `match` over [`TokenKind`] returning a named handler,
//! so every lookup is resolved at compile time.

use crate::{
    ast::ast::{Expression, Statement},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding power of an operator, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Option<Statement>;
pub type PrefixHandler = fn(&mut Parser) -> Option<Expression>;
pub type InfixHandler = fn(&mut Parser, Expression, Precedence) -> Option<Expression>;

pub fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Equal | TokenKind::NotEqual => Precedence::Equals,
        TokenKind::LessThan | TokenKind::GreaterThan => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
        _ => Precedence::Lowest,
    }
}

/// Statements with a dedicated leading keyword. Anything else is parsed as
/// an expression statement.
pub fn stmt_handler(kind: TokenKind) -> Option<StmtHandler> {
    match kind {
        TokenKind::Let => Some(parse_let_stmt as StmtHandler),
        TokenKind::Return => Some(parse_return_stmt as StmtHandler),
        _ => None,
    }
}

pub fn prefix_handler(kind: TokenKind) -> Option<PrefixHandler> {
    match kind {
        // Literals and symbols
        TokenKind::Ident => Some(parse_identifier as PrefixHandler),
        TokenKind::Int => Some(parse_integer_literal as PrefixHandler),
        TokenKind::True | TokenKind::False => Some(parse_boolean as PrefixHandler),

        TokenKind::Bang | TokenKind::Minus => Some(parse_prefix_expr as PrefixHandler),
        TokenKind::LParen => Some(parse_grouping_expr as PrefixHandler),
        _ => None,
    }
}

pub fn infix_handler(kind: TokenKind) -> Option<InfixHandler> {
    match kind {
        TokenKind::Equal
        | TokenKind::NotEqual
        | TokenKind::LessThan
        | TokenKind::GreaterThan
        | TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Asterisk
        | TokenKind::Slash => Some(parse_infix_expr as InfixHandler),
        _ => None,
    }
}
