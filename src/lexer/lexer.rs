use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap();
    static ref SYMBOL_PATTERN: Regex = Regex::new(r"^\$?[A-Za-z][A-Za-z0-9_-]*").unwrap();
    static ref WORD_TAIL_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9_-]*").unwrap();
}

/// On-demand tokenizer over a single source unit.
///
/// Each call to [`Lexer::next_token`] scans exactly one token. Once the
/// input is exhausted every further call returns EOF.
///
/// A line break that follows a token able to end an expression yields a
/// synthetic `;` with a zero-width span at the break. The break offset is
/// recorded as a pending terminator and handed out by the next call, so
/// the source text itself is never modified.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    pending_terminator: Option<usize>,
    last_kind: Option<TokenKind>,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            pending_terminator: None,
            last_kind: None,
        }
    }

    /// The full source text; token spans index into it.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn next_token(&mut self) -> Token {
        if let Some(offset) = self.pending_terminator.take() {
            trace!(offset, "inserted statement terminator at line break");
            return self.emit(MK_TOKEN!(
                TokenKind::Semicolon,
                String::from(";"),
                Span::point(offset)
            ));
        }

        self.skip_whitespace();

        let Some(c) = self.at() else {
            return self.end_of_input();
        };

        let token = match c {
            ';' => MK_DEFAULT_HANDLER!(self, TokenKind::Semicolon, ";"),
            '.' => MK_DEFAULT_HANDLER!(self, TokenKind::Dot, "."),
            ',' => MK_DEFAULT_HANDLER!(self, TokenKind::Comma, ","),
            ':' => MK_DEFAULT_HANDLER!(self, TokenKind::Colon, ":"),
            '[' => MK_DEFAULT_HANDLER!(self, TokenKind::OpenBracket, "["),
            ']' => MK_DEFAULT_HANDLER!(self, TokenKind::CloseBracket, "]"),
            '{' => MK_DEFAULT_HANDLER!(self, TokenKind::OpenCurly, "{"),
            '}' => MK_DEFAULT_HANDLER!(self, TokenKind::CloseCurly, "}"),
            '(' => MK_DEFAULT_HANDLER!(self, TokenKind::OpenParen, "("),
            ')' => MK_DEFAULT_HANDLER!(self, TokenKind::CloseParen, ")"),
            '+' => MK_DEFAULT_HANDLER!(self, TokenKind::Plus, "+"),
            '-' => MK_DEFAULT_HANDLER!(self, TokenKind::Dash, "-"),
            '*' => MK_DEFAULT_HANDLER!(self, TokenKind::Star, "*"),
            '/' => MK_DEFAULT_HANDLER!(self, TokenKind::Slash, "/"),
            '=' => match self.peek() {
                Some('=') => MK_DEFAULT_HANDLER!(self, TokenKind::Equals, "=="),
                _ => MK_DEFAULT_HANDLER!(self, TokenKind::Assignment, "="),
            },
            '!' => match self.peek() {
                Some('=') => MK_DEFAULT_HANDLER!(self, TokenKind::NotEquals, "!="),
                _ => MK_DEFAULT_HANDLER!(self, TokenKind::Not, "!"),
            },
            '<' => match self.peek() {
                Some('=') => MK_DEFAULT_HANDLER!(self, TokenKind::LessEquals, "<="),
                _ => MK_DEFAULT_HANDLER!(self, TokenKind::Less, "<"),
            },
            '>' => match self.peek() {
                Some('=') => MK_DEFAULT_HANDLER!(self, TokenKind::GreaterEquals, ">="),
                _ => MK_DEFAULT_HANDLER!(self, TokenKind::Greater, ">"),
            },
            '&' => match self.peek() {
                Some('&') => MK_DEFAULT_HANDLER!(self, TokenKind::And, "&&"),
                _ => self.illegal_char(c),
            },
            '|' => match self.peek() {
                Some('|') => MK_DEFAULT_HANDLER!(self, TokenKind::Or, "||"),
                _ => MK_DEFAULT_HANDLER!(self, TokenKind::Pipe, "|"),
            },
            '~' => match self.peek() {
                Some('>') => MK_DEFAULT_HANDLER!(self, TokenKind::Arrow, "~>"),
                _ => self.illegal_char(c),
            },
            '"' | '\'' => self.read_string(c),
            c if c.is_ascii_digit() => self.read_number(),
            c if c.is_ascii_alphabetic() || c == '$' => self.read_symbol(),
            _ => self.illegal_char(c),
        };

        self.emit(token)
    }

    fn emit(&mut self, token: Token) -> Token {
        if token.kind == TokenKind::Illegal {
            debug!(text = %token.text, start = token.span.start, "illegal token");
        }

        if token.kind.ends_statement() {
            self.scan_line_break();
        }

        self.last_kind = Some(token.kind);
        token
    }

    fn end_of_input(&mut self) -> Token {
        let end = self.source.len();

        if self.last_kind.is_some_and(|kind| kind.ends_statement()) {
            trace!(offset = end, "inserted statement terminator at end of input");
            return self.emit(MK_TOKEN!(
                TokenKind::Semicolon,
                String::from(";"),
                Span::point(end)
            ));
        }

        self.last_kind = Some(TokenKind::EOF);
        MK_TOKEN!(TokenKind::EOF, String::from("EOF"), Span::point(end))
    }

    /// Looks through trailing blanks for a line break and records it as a
    /// pending terminator. Stops at the first non-whitespace character.
    fn scan_line_break(&mut self) {
        if let Some(offset) = self.find_line_break() {
            self.pending_terminator = Some(self.pos + offset);
        }
    }

    fn find_line_break(&self) -> Option<usize> {
        let mut chars = self.remainder().char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            match c {
                ' ' | '\t' => continue,
                '\n' => return Some(i),
                '\r' => {
                    if let Some((_, '\n')) = chars.peek() {
                        return Some(i);
                    }
                }
                _ => return None,
            }
        }

        None
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.at() {
            if !matches!(c, '\r' | '\n' | '\t' | ' ') {
                break;
            }
            self.advance_n(c.len_utf8());
        }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn peek(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn illegal_char(&mut self, c: char) -> Token {
        let start = self.pos;
        self.advance_n(c.len_utf8());

        MK_TOKEN!(TokenKind::Illegal, c.to_string(), Span::new(start, self.pos))
    }

    /// Consumes a word directly attached to a malformed literal, so the
    /// whole run reports as one ILLEGAL token.
    fn illegal_word(&mut self, start: usize) -> Token {
        let tail = WORD_TAIL_PATTERN.find(self.remainder()).map_or(0, |m| m.end());
        self.advance_n(tail);

        MK_TOKEN!(
            TokenKind::Illegal,
            self.source[start..self.pos].to_string(),
            Span::new(start, self.pos)
        )
    }

    fn read_number(&mut self) -> Token {
        let start = self.pos;
        let matched = NUMBER_PATTERN.find(self.remainder()).map_or(0, |m| m.end());
        self.advance_n(matched);

        if self.at().is_some_and(|c| c.is_ascii_alphabetic()) {
            return self.illegal_word(start);
        }

        let text = self.source[start..self.pos].to_string();
        let kind = if text.contains('.') {
            TokenKind::Float
        } else {
            TokenKind::Int
        };

        MK_TOKEN!(kind, text, Span::new(start, self.pos))
    }

    fn read_symbol(&mut self) -> Token {
        let start = self.pos;

        let Some(matched) = SYMBOL_PATTERN.find(self.remainder()).map(|m| m.end()) else {
            // `$` not followed by a letter
            self.advance_n(1);
            return self.illegal_word(start);
        };
        self.advance_n(matched);

        let text = self.source[start..self.pos].to_string();
        let span = Span::new(start, self.pos);

        match RESERVED_LOOKUP.get(text.as_str()) {
            Some(kind) => MK_TOKEN!(*kind, text, span),
            None if text.starts_with('$') => MK_TOKEN!(TokenKind::Illegal, text, span),
            None => MK_TOKEN!(TokenKind::Identifier, text, span),
        }
    }

    fn read_string(&mut self, delimiter: char) -> Token {
        let start = self.pos;
        self.advance_n(1);

        match self.remainder().find(delimiter) {
            Some(len) => {
                let text = self.remainder()[..len].to_string();
                self.advance_n(len + 1);
                MK_TOKEN!(TokenKind::String, text, Span::new(start, self.pos))
            }
            None => {
                self.advance_n(self.remainder().len());
                MK_TOKEN!(
                    TokenKind::Illegal,
                    self.source[start..].to_string(),
                    Span::new(start, self.pos)
                )
            }
        }
    }
}

/// Drains a lexer over `source`, up to and including the EOF token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
