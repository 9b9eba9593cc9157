//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! A Pratt parser over the lazy token stream. Statements are dispatched
//! on the current token; expressions combine NUD (null denotation) and
//! LED (left denotation) handlers with binding powers for precedence.
//! Parsing stops at the first error.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
