//! Abstract Syntax Tree definitions.
//!
//! Statements and expressions are trait objects behind `StmtWrapper` and
//! `ExprWrapper`. Every node keeps the token(s) it was built from and
//! exposes its source span through `get_span`. Composite spans run from
//! the first child to the last.

pub mod ast;
pub mod expressions;
pub mod statements;
