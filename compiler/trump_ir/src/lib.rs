//! TRUMP IR - tokens and syntax tree
//!
//! This crate holds the data shared by every phase of the toolchain:
//! - [`Token`] / [`TokenKind`] produced by the lexer
//! - [`Position`] for 1-based line/column locations
//! - The AST ([`Program`], [`Statement`], [`Expression`]) built by the parser
//!
//! AST nodes are immutable once built. Function bodies sit behind `Rc` so a
//! runtime function value shares, rather than copies, its body.
//!
//! Every AST node implements `Display`, printing source text that parses
//! back to an equivalent tree.

pub mod ast;
mod token;

pub use ast::{
    Block, Expression, ForLoop, FunctionLiteral, InfixOp, LetKeyword, PrefixOp, Program, Rating,
    Statement,
};
pub use token::{Position, Token, TokenKind};
