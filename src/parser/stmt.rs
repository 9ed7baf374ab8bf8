use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    lookups::{stmt_handler, Precedence},
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    if let Some(handler) = stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Ident)?;
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;
    parser.skip_semicolon();

    Some(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    parser.advance();

    let return_value = parse_expr(parser, Precedence::Lowest)?;
    parser.skip_semicolon();

    Some(Statement::Return(ReturnStatement {
        token,
        return_value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, Precedence::Lowest)?;
    // The terminator is optional so a trailing expression still parses
    parser.skip_semicolon();

    Some(Statement::Expression(ExpressionStatement { token, expression }))
}
