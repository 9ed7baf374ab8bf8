//! Error types and error handling for the parser.
//!
//! This module defines the diagnostics collected while parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of parse failure
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
