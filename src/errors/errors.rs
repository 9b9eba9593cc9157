use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    line_and_column,
};

/// A syntax error anchored to the token that triggered it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("parse error at {line}:{column}: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    token: Token,
    line: usize,
    column: usize,
}

impl Error {
    /// Builds an error for `token`, resolving its line and column by
    /// rescanning `source` up to the token's start.
    pub fn new(error_impl: ErrorImpl, token: Token, source: &str) -> Self {
        let (line, column) = line_and_column(source, token.span.start);

        Error {
            internal_error: error_impl,
            token,
            line,
            column,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_token(&self) -> &Token {
        &self.token
    }

    /// 1-indexed `(line, column)` of the offending token.
    pub fn get_position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalToken { .. } => "IllegalToken",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParser { .. } => "NoPrefixParser",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidBoolean { .. } => "InvalidBoolean",
            ErrorImpl::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ErrorImpl::UnexpectedEof => "UnexpectedEof",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalToken { token } => {
                if token.starts_with('$') {
                    ErrorTip::Suggestion(format!(
                        "`{}` is not one of `$src`, `$dest`, `$env` or `$var`",
                        token
                    ))
                } else {
                    ErrorTip::None
                }
            }
            ErrorImpl::UnterminatedString { quote } => {
                ErrorTip::Suggestion(format!("add a closing `{}`", quote))
            }
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("unexpected sequence: `{}`", token))
            }
            ErrorImpl::NoPrefixParser { kind, .. } => ErrorTip::Suggestion(format!(
                "a {} token cannot start an expression",
                kind
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::InvalidBoolean { .. } => ErrorTip::None,
            ErrorImpl::ExpectedIdentifier { context, .. } => {
                ErrorTip::Suggestion(format!("{} must be a plain identifier", context))
            }
            ErrorImpl::UnexpectedEof => {
                ErrorTip::Suggestion(String::from("a block is missing its closing `}`"))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "split the expression up, at most {} levels may be nested",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("illegal token: {token}")]
    IllegalToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString { quote: char },
    #[error("unexpected sequence: {token}")]
    UnexpectedToken { token: String },
    #[error("no prefix parser for {kind}: {token}")]
    NoPrefixParser { kind: TokenKind, token: String },
    #[error("parse number: {token:?} is not a valid number")]
    NumberParseError { token: String },
    #[error("parse boolean: {token:?} is not a boolean")]
    InvalidBoolean { token: String },
    #[error("expected identifier for {context}: {token}")]
    ExpectedIdentifier { context: &'static str, token: String },
    #[error("unexpected end of file")]
    UnexpectedEof,
    #[error("nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}
