//! Lexical analysis.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Recognition of keywords, sigil identifiers, identifiers and literals
//! - One- and two-character operators with single-character lookahead
//! - Automatic statement terminators at line breaks
//! - Byte-offset spans on every token for error reporting

pub mod lexer;
pub mod tokens;
