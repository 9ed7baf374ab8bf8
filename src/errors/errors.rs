use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => {
                if *found == TokenKind::Eof {
                    ErrorTip::Suggestion(format!("Input ended where `{}` was expected", expected))
                } else {
                    ErrorTip::Suggestion(format!(
                        "Expected `{}` here, found `{}`",
                        expected, found
                    ))
                }
            }
            ErrorImpl::NoPrefixParseFn { token, .. } => match token {
                TokenKind::Illegal => ErrorTip::Suggestion(String::from(
                    "Unrecognised character, it cannot start an expression",
                )),
                TokenKind::Eof => ErrorTip::Suggestion(String::from(
                    "Input ended in the middle of an expression",
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::IntegerParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "Split the expression up using let bindings",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("no prefix parse function for {} found", describe_token(.token, .literal))]
    NoPrefixParseFn { token: TokenKind, literal: String },
    #[error("could not parse '{literal}' as integer")]
    IntegerParseError { literal: String },
    #[error("expression nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Names a token kind, adding its text when the kind alone does not spell it.
fn describe_token(kind: &TokenKind, literal: &str) -> String {
    let name = kind.to_string();
    if literal.is_empty() || literal == name {
        name
    } else {
        format!("{} '{}'", name, literal)
    }
}
