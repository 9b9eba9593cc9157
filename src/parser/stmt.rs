use crate::{
    ast::{
        ast::StmtWrapper,
        expressions::SymbolExpr,
        statements::{AssignStmt, BlockStmt, ExpressionStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use tracing::trace;

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Parses the statement starting at the current token.
///
/// Pipeline heads (`pipe`, `|`) are recognized but produce no statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<StmtWrapper>, Error> {
    match parser.current_token_kind() {
        TokenKind::PipeDef | TokenKind::Pipe => Ok(None),
        TokenKind::Identifier if parser.peek_token_kind() == TokenKind::Assignment => {
            parse_assign_stmt(parser).map(Some)
        }
        _ => parse_expression_stmt(parser).map(Some),
    }
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let name_token = parser.current_token().clone();
    let name = SymbolExpr {
        value: name_token.text.clone(),
        token: name_token,
    };

    let token = parser.advance().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.skip_semicolon();

    Ok(StmtWrapper::new(AssignStmt::new(token, name, value)))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    // Only bare identifiers reach `parse_assign_stmt`
    if parser.peek_token_kind() == TokenKind::Assignment {
        return Err(parser.error(
            ErrorImpl::ExpectedIdentifier {
                context: "assignment target",
                token: expression.to_string(),
            },
            token,
        ));
    }

    parser.skip_semicolon();

    Ok(StmtWrapper::new(ExpressionStmt::new(token, expression)))
}

/// Parses `{ ... }` with the current token on the `{`, leaving the
/// current token on the matching `}`.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.enter_nesting()?;
    let result = parse_block_body(parser);
    parser.leave_nesting();

    result
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let open_token = parser.current_token().clone();
    let mut body = vec![];

    parser.advance();

    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::EOF {
            let token = parser.current_token().clone();
            return Err(parser.error(ErrorImpl::UnexpectedEof, token));
        }

        if let Some(stmt) = parse_stmt(parser)? {
            body.push(stmt);
        }

        parser.advance();
    }

    let close_token = parser.current_token().clone();
    let block = BlockStmt::new(open_token, close_token, body);

    trace!(statements = block.body.len(), span = ?block.span, "parsed block");
    Ok(block)
}
