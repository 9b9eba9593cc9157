use crate::{ast::ast::ExprWrapper, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Operator precedence, lowest to highest.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Arrow,
    Assignment,
    Logical,
    Equality,
    Comparison,
    Additive,
    Multiplicative,
    Prefix,
    Call,
}

pub type NUDHandler = fn(&mut Parser) -> Result<ExprWrapper, Error>;
pub type LEDHandler = fn(&mut Parser, ExprWrapper) -> Result<ExprWrapper, Error>;

/// Prefix (null denotation) handler for a token kind.
pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    let handler: NUDHandler = match kind {
        // Literals and symbols
        TokenKind::Int => parse_integer_expr,
        TokenKind::Float => parse_float_expr,
        TokenKind::True | TokenKind::False => parse_boolean_expr,
        TokenKind::Identifier
        | TokenKind::Src
        | TokenKind::Dest
        | TokenKind::Env
        | TokenKind::Var => parse_symbol_expr,
        TokenKind::String => parse_string_expr,

        TokenKind::OpenParen => parse_grouping_expr,
        TokenKind::Dash | TokenKind::Not => parse_prefix_expr,
        TokenKind::If => parse_if_expr,
        _ => return None,
    };

    Some(handler)
}

/// Infix (left denotation) handler for a token kind.
///
/// `.`, `[` and `=` carry a binding power but have no handler here, so
/// expression parsing stops in front of them.
pub fn led_lookup(kind: TokenKind) -> Option<LEDHandler> {
    let handler: LEDHandler = match kind {
        TokenKind::Arrow => parse_arrow_function_expr,

        // Logical
        TokenKind::And | TokenKind::Or => parse_binary_expr,

        // Equality and comparison
        TokenKind::Equals | TokenKind::NotEquals => parse_binary_expr,
        TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals => parse_binary_expr,

        // Additive and multiplicative
        TokenKind::Plus | TokenKind::Dash => parse_binary_expr,
        TokenKind::Star | TokenKind::Slash => parse_binary_expr,

        TokenKind::OpenParen => parse_call_expr,
        _ => return None,
    };

    Some(handler)
}

/// Binding power of a token in infix position; anything that is not an
/// operator binds at `Default`.
pub fn bp_lookup(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Arrow => BindingPower::Arrow,
        TokenKind::Assignment => BindingPower::Assignment,
        TokenKind::And | TokenKind::Or => BindingPower::Logical,
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equality,
        TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals => BindingPower::Comparison,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Additive,
        TokenKind::Star | TokenKind::Slash => BindingPower::Multiplicative,
        TokenKind::Dot | TokenKind::OpenParen | TokenKind::OpenBracket => BindingPower::Call,
        _ => BindingPower::Default,
    }
}
