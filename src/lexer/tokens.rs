use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("pipe", TokenKind::PipeDef);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("null", TokenKind::Null);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("$src", TokenKind::Src);
        map.insert("$dest", TokenKind::Dest);
        map.insert("$env", TokenKind::Env);
        map.insert("$var", TokenKind::Var);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    String,
    Int,
    Float,

    // Sigils
    Src,
    Dest,
    Env,
    Var,

    Assignment, // =
    Plus,
    Dash,
    Star,
    Slash,
    Not,        // !
    Equals,     // ==
    NotEquals,  // !=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    And,        // &&
    Or,         // ||
    Arrow,      // ~>

    Dot,
    Comma,
    Colon,
    Semicolon,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    Pipe, // |

    // Reserved
    PipeDef,
    If,
    Else,
    Null,
    True,
    False,

    Illegal,
    EOF,
}

impl TokenKind {
    /// Whether a line break after this kind ends the statement.
    ///
    /// Literals, identifiers (sigils included) and closing brackets qualify.
    /// Operators, opening brackets and keywords never do.
    pub fn ends_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::String
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::Src
                | TokenKind::Dest
                | TokenKind::Env
                | TokenKind::Var
                | TokenKind::CloseParen
                | TokenKind::CloseBracket
                | TokenKind::CloseCurly
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENT",
            TokenKind::String => "STRING",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Src => "SRC",
            TokenKind::Dest => "DEST",
            TokenKind::Env => "ENV",
            TokenKind::Var => "VAR",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "MINUS",
            TokenKind::Star => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Not => "EXCLAMATION",
            TokenKind::Equals => "EQ",
            TokenKind::NotEquals => "NOT_EQ",
            TokenKind::Less => "LT",
            TokenKind::LessEquals => "LTEQ",
            TokenKind::Greater => "GT",
            TokenKind::GreaterEquals => "GTEQ",
            TokenKind::And => "LOGIC_AND",
            TokenKind::Or => "LOGIC_OR",
            TokenKind::Arrow => "ARROW",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::OpenBracket => "LSQUARE",
            TokenKind::CloseBracket => "RSQUARE",
            TokenKind::OpenCurly => "LCURLY",
            TokenKind::CloseCurly => "RCURLY",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::Pipe => "PIPECHAR",
            TokenKind::PipeDef => "PIPEDEF",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Null => "NULL",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EOF => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}) @ {}..{}", self.kind, self.text, self.span.start, self.span.end)
    }
}

impl Token {
    /// Text to quote in diagnostics; end of input reads as `EOF`.
    pub fn display_text(&self) -> &str {
        if self.kind == TokenKind::EOF {
            "EOF"
        } else {
            &self.text
        }
    }

    /// ILLEGAL tokens that start with a quote are strings that never closed.
    pub fn is_unterminated_string(&self) -> bool {
        self.kind == TokenKind::Illegal && self.text.starts_with(['"', '\''])
    }
}
