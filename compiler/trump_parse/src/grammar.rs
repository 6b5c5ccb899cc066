//! Grammar productions, split by statement and expression.

mod expr;
mod operators;
mod stmt;
