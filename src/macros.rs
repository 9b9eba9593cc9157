//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Emits a fixed-text token at the lexer position
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), Span::new(0, 2));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            text: $value,
            span: $span,
        }
    };
}

/// Creates a token whose text is a fixed literal, starting at the lexer's
/// current position, and advances the lexer past it.
///
/// # Arguments
///
/// * `$lexer` - The lexer being scanned
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal text (used for length calculation)
///
/// # Example
///
/// ```ignore
/// '+' => MK_DEFAULT_HANDLER!(self, TokenKind::Plus, "+"),
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($lexer:expr, $kind:expr, $value:literal) => {{
        let start = $lexer.pos;
        $lexer.advance_n($value.len());
        $crate::MK_TOKEN!(
            $kind,
            String::from($value),
            $crate::Span::new(start, start + $value.len())
        )
    }};
}
