//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SYMBOL!` - Creates a fixed-text token at the lexer's cursor and advances past it

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), Span::new(0, 2));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $span:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a token for an operator or delimiter with a fixed spelling.
///
/// The token starts at the lexer's cursor; the cursor is moved past the
/// whole spelling before the token is returned.
///
/// # Example
///
/// ```ignore
/// '=' if lexer.peek_char() == Some('=') => MK_SYMBOL!(lexer, TokenKind::Equal, "=="),
/// ```
#[macro_export]
macro_rules! MK_SYMBOL {
    ($lexer:expr, $kind:expr, $literal:literal) => {{
        let start = $lexer.pos;
        $lexer.advance_n($literal.len());
        MK_TOKEN!($kind, String::from($literal), Span::new(start, $lexer.pos))
    }};
}
