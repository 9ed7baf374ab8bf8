use crate::{
    ast::{
        ast::Expression,
        expressions::{BooleanLiteral, Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{infix_handler, prefix_handler, Precedence},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    if !parser.enter_nesting() {
        return None;
    }

    let expr = parse_nested_expr(parser, precedence);
    parser.exit_nesting();
    expr
}

fn parse_nested_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    // First parse the prefix position
    let token_kind = parser.current_token_kind();
    let Some(prefix) = prefix_handler(token_kind) else {
        let position = parser.get_position();
        let literal = parser.current_token().literal.clone();
        parser.push_error(
            ErrorImpl::NoPrefixParseFn {
                token: token_kind,
                literal,
            },
            position,
        );
        return None;
    };

    let mut left = prefix(parser)?;

    // While the next operator binds tighter than the caller, fold it into lhs
    while parser.peek_token_kind() != TokenKind::Semicolon
        && precedence < parser.peek_precedence()
    {
        let Some(infix) = infix_handler(parser.peek_token_kind()) else {
            return Some(left);
        };

        parser.advance();
        let operator_precedence = parser.current_precedence();
        left = infix(parser, left, operator_precedence)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    Some(Expression::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
        Err(_) => {
            parser.push_error(
                ErrorImpl::IntegerParseError {
                    literal: token.literal.clone(),
                },
                token.span.start,
            );
            None
        }
    }
}

pub fn parse_boolean(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    Some(Expression::Boolean(BooleanLiteral {
        value: token.kind == TokenKind::True,
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Some(Expression::Prefix(PrefixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expression> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    Some(expr)
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expression,
    precedence: Precedence,
) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, precedence)?;

    Some(Expression::Infix(InfixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}
