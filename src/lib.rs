#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use lexer::lexer::{tokenize, Lexer};
pub use parser::parser::{parse, Parser};

/// Half-open `[start, end)` byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Zero-width span used for synthetic tokens.
    pub fn point(offset: usize) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// 1-indexed line and column of `offset`, counting code points for the column.
pub fn line_and_column(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;

    let end = offset.min(source.len());
    for c in source[..end].chars() {
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    (line, column)
}

/// Returns the line number, the line text and the offset inside that line
/// for a byte position. Positions at or past the end map onto the last line.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return (line_number, line.to_string(), position - start);
        }

        last = (line_number, line.to_string(), line.len());
        start = end;
        line_number += 1;
    }

    if source.ends_with('\n') {
        return (line_number, String::new(), 0);
    }

    last
}

/// Renders an error the way the driver prints it:
///
/// ```text
/// Error: NoPrefixParser (a RPAREN token cannot start an expression)
/// -> main.pipe
///   |
/// 2 | b = (1 + )
///   | ---------^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let position = error.get_token().span.start;
    let (line, line_text, line_pos) = get_line_at_position(source, position);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let column = line_text[..line_pos.min(line_text.len())].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
