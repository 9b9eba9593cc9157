//! Error types for the front end.
//!
//! The lexer never fails; it hands ILLEGAL tokens to the parser. Every
//! error therefore originates in the parser and carries:
//!
//! - The offending token (its kind, text and span)
//! - The 1-indexed line and column of that token
//! - A name and an optional tip for rendering diagnostics

pub mod errors;
