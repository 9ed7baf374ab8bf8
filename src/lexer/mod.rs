//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - On-demand scanning, one token per call
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Token span tracking for error reporting
//! - Illegal characters, which become tokens rather than errors

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
