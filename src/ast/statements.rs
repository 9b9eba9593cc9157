use std::{any::Any, fmt::Display};

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{write_joined, Expr, ExprWrapper, Stmt, StmtType, StmtWrapper},
    expressions::SymbolExpr,
};

/// Block Statement
/// Statements between `{` and `}`. The span runs brace to brace.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub open_token: Token,
    pub close_token: Token,
    pub body: Vec<StmtWrapper>,
    pub span: Span,
}

impl BlockStmt {
    pub fn new(open_token: Token, close_token: Token, body: Vec<StmtWrapper>) -> Self {
        let span = Span::new(open_token.span.start, close_token.span.end);
        BlockStmt {
            open_token,
            close_token,
            body,
            span,
        }
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_joined(f, &self.body, "\n")
    }
}

/// Expression Statement
/// A bare expression used as a statement; `token` is its first token.
/// The span is the expression's, so grouping parentheses stay outside it.
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: ExprWrapper,
    pub span: Span,
}

impl ExpressionStmt {
    pub fn new(token: Token, expression: ExprWrapper) -> Self {
        let span = *expression.get_span();
        ExpressionStmt {
            token,
            expression,
            span,
        }
    }
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Assign Statement
/// `name = value`; `token` is the `=` operator.
#[derive(Debug, Clone)]
pub struct AssignStmt {
    pub token: Token,
    pub name: SymbolExpr,
    pub value: ExprWrapper,
    pub span: Span,
}

impl AssignStmt {
    pub fn new(token: Token, name: SymbolExpr, value: ExprWrapper) -> Self {
        let span = Span::new(name.get_span().start, value.get_span().end);
        AssignStmt {
            token,
            name,
            value,
            span,
        }
    }
}

impl Stmt for AssignStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::AssignStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for AssignStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}
