//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with operator precedence and handles:
//!
//! - Statement parsing (`let`, `return` and expression statements)
//! - Expression parsing (prefix and infix operators, literals, grouping)
//! - Error collection and best-effort recovery
//!
//! Prefix and infix handlers are looked up per token kind, and binding
//! power decides how far each infix loop extends.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
