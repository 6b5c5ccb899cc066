//! Centralized error constructors for the evaluator.
//!
//! Runtime errors carry no taxonomy code, only a message. Each constructor
//! returns the `Object::Error` sentinel ready to be raised through the
//! interpreter's `Err` channel, so every message string lives here.

use trump_ir::{InfixOp, PrefixOp};

use crate::Object;

#[inline]
fn error(message: String) -> Object {
    Object::Error(message)
}

// Names

#[cold]
pub fn identifier_not_found(name: &str) -> Object {
    error(format!("identifier not found: {name}"))
}

/// The occasional alternative to [`identifier_not_found`].
#[cold]
pub fn covfefe(name: &str) -> Object {
    error(format!(
        "Nobody knows what this '{name}' covfefe means, but it's provocative!"
    ))
}

// Operators

#[cold]
pub fn type_mismatch(left: &str, op: InfixOp, right: &str) -> Object {
    error(format!("type mismatch: {left} {op} {right}"))
}

#[cold]
pub fn unknown_infix_operator(left: &str, op: InfixOp, right: &str) -> Object {
    error(format!("unknown operator: {left} {op} {right}"))
}

#[cold]
pub fn unknown_prefix_operator(op: PrefixOp, operand: &str) -> Object {
    error(format!("unknown operator: {op}{operand}"))
}

#[cold]
pub fn division_by_zero() -> Object {
    error("division by zero".to_string())
}

// Calls and indexing

#[cold]
pub fn not_a_function(type_name: &str) -> Object {
    error(format!("not a function: {type_name}"))
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> Object {
    error(format!("maximum recursion depth exceeded (limit: {limit})"))
}

#[cold]
pub fn index_not_supported(type_name: &str) -> Object {
    error(format!("index operator not supported: {type_name}"))
}

#[cold]
pub fn array_index_not_integer(type_name: &str) -> Object {
    error(format!("array index must be INTEGER, got {type_name}"))
}

// Loops

/// Which loop ran into the iteration cap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopKind {
    While,
    For,
}

#[cold]
pub fn loop_limit_exceeded(kind: LoopKind) -> Object {
    let name = match kind {
        LoopKind::While => "While",
        LoopKind::For => "For",
    };
    error(format!(
        "{name} loop exceeded maximum iterations (possible infinite loop)"
    ))
}

// Built-in arguments

#[cold]
pub fn wrong_arg_count(builtin: &str, got: usize, want: usize) -> Object {
    error(format!(
        "wrong number of arguments for {builtin}. got={got}, want={want}"
    ))
}

#[cold]
pub fn argument_not_supported(builtin: &str, type_name: &str) -> Object {
    error(format!(
        "argument to `{builtin}` not supported, got {type_name}"
    ))
}

#[cold]
pub fn argument_must_be_array(builtin: &str, type_name: &str) -> Object {
    error(format!(
        "argument to `{builtin}` must be ARRAY, got {type_name}"
    ))
}

#[cold]
pub fn cannot_sort(builtin: &str, left: &str, right: &str) -> Object {
    error(format!("{builtin} cannot compare {left} with {right}"))
}
