//! Parser implementation for building the Abstract Syntax Tree.
//!
//! The parser pulls tokens from a [`Lexer`] on demand and keeps a
//! two-token window: the current token and one token of lookahead.
//! Handlers leave the current token on the last token of whatever they
//! parsed, and the program loop advances past it.

use tracing::debug;

use crate::{
    ast::ast::{Program, Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_stmt;

/// Deepest nesting of expressions and blocks accepted before parsing fails.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    lexer: Lexer,
    /// Token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Current expression and block nesting
    depth: usize,
}

impl Parser {
    /// Creates a new Parser and preloads the current and peek tokens.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            depth: 0,
        }
    }

    /// Shifts the window one token forward and returns the new current token.
    pub fn advance(&mut self) -> &Token {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        &self.current
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Advances onto the peek token if it has the expected kind.
    ///
    /// Otherwise the parser stays put and the peek token is reported, as
    /// an illegal token when the lexer could not classify it.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<&Token, Error> {
        if self.peek.kind == expected_kind {
            return Ok(self.advance());
        }

        let token = self.peek.clone();
        if token.kind == TokenKind::Illegal {
            return Err(self.illegal_token_error(token));
        }

        Err(self.error(
            ErrorImpl::UnexpectedToken {
                token: token.display_text().to_string(),
            },
            token,
        ))
    }

    /// Enters one level of nesting, failing at the current token once
    /// [`MAX_NESTING_DEPTH`] is exceeded. Every successful call must be
    /// paired with [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            let token = self.current.clone();
            return Err(self.error(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                token,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Consumes an optional trailing `;`.
    pub fn skip_semicolon(&mut self) {
        if self.peek.kind == TokenKind::Semicolon {
            self.advance();
        }
    }

    /// Builds an error anchored at `token`.
    pub fn error(&self, error_impl: ErrorImpl, token: Token) -> Error {
        let error = Error::new(error_impl, token, self.lexer.source());
        debug!(%error, "parse failed");
        error
    }

    /// Reports an ILLEGAL token, singling out strings that never closed.
    pub fn illegal_token_error(&self, token: Token) -> Error {
        let error_impl = match token.text.chars().next() {
            Some(quote) if token.is_unterminated_string() => {
                ErrorImpl::UnterminatedString { quote }
            }
            _ => ErrorImpl::IllegalToken {
                token: token.text.clone(),
            },
        };

        self.error(error_impl, token)
    }

    /// Parses statements until EOF, stopping at the first error.
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let mut program = Program::default();

        while self.current_token_kind() != TokenKind::EOF {
            if let Some(stmt) = parse_stmt(self)? {
                debug!(kind = ?stmt.get_stmt_type(), span = ?stmt.get_span(), "parsed statement");
                program.statements.push(stmt);
            }

            self.advance();
        }

        debug!(statements = program.statements.len(), "parsed program");
        Ok(program)
    }
}

/// Parses a complete source unit into a [`Program`].
pub fn parse(source: &str) -> Result<Program, Error> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_program()
}
