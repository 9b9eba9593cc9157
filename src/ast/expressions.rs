use std::{any::Any, fmt::Display};

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{write_joined, Expr, ExprType, ExprWrapper},
    statements::BlockStmt,
};

// LITERALS

/// Integer Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub value: i64,
    pub token: Token,
}

impl Expr for IntegerExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Integer
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
    fn get_token(&self) -> &Token {
        &self.token
    }
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.text)
    }
}

/// Float Expression
/// Represents a decimal literal in the AST.
#[derive(Debug, Clone)]
pub struct FloatExpr {
    pub value: f64,
    pub token: Token,
}

impl Expr for FloatExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Float
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
    fn get_token(&self) -> &Token {
        &self.token
    }
}

impl Display for FloatExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.text)
    }
}

/// Boolean Expression
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub value: bool,
    pub token: Token,
}

impl Expr for BooleanExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
    fn get_token(&self) -> &Token {
        &self.token
    }
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.text)
    }
}

/// String Expression
/// Represents a string literal in the AST. `value` excludes the quotes.
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub value: String,
    pub token: Token,
}

impl Expr for StringExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::String
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
    fn get_token(&self) -> &Token {
        &self.token
    }
}

impl Display for StringExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}

/// Symbol Expression
/// Represents an identifier in the AST, sigil identifiers included.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub value: String,
    pub token: Token,
}

impl Expr for SymbolExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
    fn get_token(&self) -> &Token {
        &self.token
    }
}

impl Display for SymbolExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// COMPOUND

/// Arrow Function Expression
/// `param ~> body`, a single-parameter function.
#[derive(Debug, Clone)]
pub struct ArrowFunctionExpr {
    pub token: Token,
    pub param: SymbolExpr,
    pub body: ExprWrapper,
    pub span: Span,
}

impl Expr for ArrowFunctionExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::ArrowFunction
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_token(&self) -> &Token {
        &self.param.token
    }
}

impl Display for ArrowFunctionExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ~> {}", self.param, self.body)
    }
}

/// Call Expression
/// `callee(arguments...)`; only bare identifiers can be called.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub token: Token,
    pub callee: SymbolExpr,
    pub arguments: Vec<ExprWrapper>,
    pub close_token: Token,
    pub span: Span,
}

impl Expr for CallExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_token(&self) -> &Token {
        &self.callee.token
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.callee)?;
        write_joined(f, &self.arguments, ", ")?;
        write!(f, ")")
    }
}

/// The `else` branch of an if expression.
#[derive(Debug, Clone)]
pub enum IfAlternative {
    Block(BlockStmt),
    ElseIf(Box<IfExpr>),
}

impl IfAlternative {
    pub fn get_span(&self) -> &Span {
        match self {
            IfAlternative::Block(block) => &block.span,
            IfAlternative::ElseIf(if_expr) => &if_expr.span,
        }
    }
}

/// If Expression
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub token: Token,
    pub condition: ExprWrapper,
    pub consequence: BlockStmt,
    pub alternative: Option<IfAlternative>,
    pub span: Span,
}

impl IfExpr {
    pub fn new(
        token: Token,
        condition: ExprWrapper,
        consequence: BlockStmt,
        alternative: Option<IfAlternative>,
    ) -> Self {
        let end = match &alternative {
            Some(alternative) => alternative.get_span().end,
            None => consequence.span.end,
        };
        let span = Span::new(token.span.start, end);

        IfExpr {
            token,
            condition,
            consequence,
            alternative,
            span,
        }
    }
}

impl Expr for IfExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::If
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_token(&self) -> &Token {
        &self.token
    }
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if {} {{ {} }}", self.condition, self.consequence)?;

        match &self.alternative {
            Some(IfAlternative::Block(block)) => write!(f, " else {{ {} }}", block),
            Some(IfAlternative::ElseIf(if_expr)) => write!(f, " else {}", if_expr),
            None => Ok(()),
        }
    }
}

/// Prefix Expression
/// Unary `-` or `!` applied to the right operand.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: ExprWrapper,
    pub span: Span,
}

impl Expr for PrefixExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_token(&self) -> &Token {
        &self.operator
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator.text, self.right_expr)
    }
}

/// Binary Expression
/// Represents an infix operator application in the AST.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for BinaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_token(&self) -> &Token {
        self.left.get_token()
    }
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.text, self.right)
    }
}
