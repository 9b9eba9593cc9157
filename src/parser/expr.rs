use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{
            ArrowFunctionExpr, BinaryExpr, BooleanExpr, CallExpr, FloatExpr, IfAlternative,
            IfExpr, IntegerExpr, PrefixExpr, StringExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{bp_lookup, led_lookup, nud_lookup, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    parser.enter_nesting()?;
    let result = parse_nested_expr(parser, bp);
    parser.leave_nesting();

    result
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    // First parse NUD
    let token = parser.current_token().clone();
    if token.kind == TokenKind::Illegal {
        return Err(parser.illegal_token_error(token));
    }

    let Some(nud) = nud_lookup(token.kind) else {
        return Err(parser.error(
            ErrorImpl::NoPrefixParser {
                kind: token.kind,
                token: token.display_text().to_string(),
            },
            token,
        ));
    };

    let mut left = nud(parser)?;

    // While the upcoming operator binds tighter than `bp`, keep extending lhs
    while bp < bp_lookup(parser.peek_token_kind()) {
        let Some(led) = led_lookup(parser.peek_token_kind()) else {
            return Ok(left);
        };

        parser.advance();
        left = led(parser, left)?;
    }

    Ok(left)
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    match token.text.parse::<i64>() {
        Ok(value) => Ok(ExprWrapper::new(IntegerExpr { value, token })),
        Err(_) => Err(parser.error(
            ErrorImpl::NumberParseError {
                token: token.text.clone(),
            },
            token,
        )),
    }
}

pub fn parse_float_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    match token.text.parse::<f64>() {
        Ok(value) => Ok(ExprWrapper::new(FloatExpr { value, token })),
        Err(_) => Err(parser.error(
            ErrorImpl::NumberParseError {
                token: token.text.clone(),
            },
            token,
        )),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    let value = match token.text.as_str() {
        "true" => true,
        "false" => false,
        _ => {
            return Err(parser.error(
                ErrorImpl::InvalidBoolean {
                    token: token.text.clone(),
                },
                token,
            ))
        }
    };

    Ok(ExprWrapper::new(BooleanExpr { value, token }))
}

pub fn parse_symbol_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    Ok(ExprWrapper::new(SymbolExpr {
        value: token.text.clone(),
        token,
    }))
}

pub fn parse_string_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    Ok(ExprWrapper::new(StringExpr {
        value: token.text.clone(),
        token,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator = parser.current_token().clone();
    parser.advance();

    let right_expr = parse_expr(parser, BindingPower::Prefix)?;

    Ok(ExprWrapper::new(PrefixExpr {
        span: Span::new(operator.span.start, right_expr.get_span().end),
        operator,
        right_expr,
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: ExprWrapper) -> Result<ExprWrapper, Error> {
    let operator = parser.current_token().clone();
    let bp = bp_lookup(operator.kind);
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(BinaryExpr {
        span: Span::new(left.get_span().start, right.get_span().end),
        left,
        operator,
        right,
    }))
}

/// Requires `left` to be a bare identifier, for call names and arrow
/// parameters.
fn expect_symbol(
    parser: &Parser,
    left: &ExprWrapper,
    context: &'static str,
) -> Result<SymbolExpr, Error> {
    match left.as_any().downcast_ref::<SymbolExpr>() {
        Some(symbol) => Ok(symbol.clone()),
        None => Err(parser.error(
            ErrorImpl::ExpectedIdentifier {
                context,
                token: left.to_string(),
            },
            left.get_token().clone(),
        )),
    }
}

pub fn parse_call_expr(parser: &mut Parser, left: ExprWrapper) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();
    let callee = expect_symbol(parser, &left, "call expression name")?;

    let mut arguments = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
    } else {
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        while parser.peek_token_kind() == TokenKind::Comma {
            parser.advance();
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Default)?);
        }

        parser.expect_peek(TokenKind::CloseParen)?;
    }

    let close_token = parser.current_token().clone();

    Ok(ExprWrapper::new(CallExpr {
        span: Span::new(callee.token.span.start, close_token.span.end),
        token,
        callee,
        arguments,
        close_token,
    }))
}

pub fn parse_arrow_function_expr(
    parser: &mut Parser,
    left: ExprWrapper,
) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();
    let param = expect_symbol(parser, &left, "arrow function parameter")?;
    parser.advance();

    // The body extends as far right as possible
    let body = parse_expr(parser, BindingPower::Default)?;

    Ok(ExprWrapper::new(ArrowFunctionExpr {
        span: Span::new(param.token.span.start, body.get_span().end),
        token,
        param,
        body,
    }))
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    Ok(ExprWrapper::new(parse_if(parser)?))
}

/// Parses `if <condition> { ... }` plus an optional `else { ... }` or
/// `else if ...` chain, with the current token on the `if`. Each link of
/// an `else if` chain counts as one level of nesting.
fn parse_if(parser: &mut Parser) -> Result<IfExpr, Error> {
    parser.enter_nesting()?;
    let result = parse_if_chain(parser);
    parser.leave_nesting();

    result
}

fn parse_if_chain(parser: &mut Parser) -> Result<IfExpr, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.advance();

        let next = parser.current_token().clone();
        match next.kind {
            TokenKind::If => Some(IfAlternative::ElseIf(Box::new(parse_if(parser)?))),
            TokenKind::OpenCurly => Some(IfAlternative::Block(parse_block_stmt(parser)?)),
            TokenKind::Illegal => return Err(parser.illegal_token_error(next)),
            _ => {
                return Err(parser.error(
                    ErrorImpl::UnexpectedToken {
                        token: next.display_text().to_string(),
                    },
                    next,
                ))
            }
        }
    } else {
        None
    };

    Ok(IfExpr::new(token, condition, consequence, alternative))
}
