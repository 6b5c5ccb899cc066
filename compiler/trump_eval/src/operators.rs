//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over operand pairs. The order of the match
//! arms is the language's coercion order: integer pairs, float pairs,
//! mixed numeric pairs (the integer is promoted), string pairs, and only
//! then the identity fallback for `==`/`!=`.

use trump_ir::InfixOp;

use crate::errors::{division_by_zero, type_mismatch, unknown_infix_operator};
use crate::value::Object;
use crate::EvalResult;

/// Evaluate a binary operation.
///
/// Failures come back as `Err(Object::Error(..))`, ready to propagate.
#[allow(clippy::cast_precision_loss)]
pub fn evaluate_binary(left: &Object, op: InfixOp, right: &Object) -> EvalResult {
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => eval_int_binary(*a, op, *b),
        (Object::Float(a), Object::Float(b)) => eval_float_binary(*a, op, *b),
        (Object::Integer(a), Object::Float(b)) => eval_float_binary(*a as f64, op, *b),
        (Object::Float(a), Object::Integer(b)) => eval_float_binary(*a, op, *b as f64),
        (Object::String(a), Object::String(b)) => match op {
            InfixOp::Add => Ok(Object::string(format!("{a}{b}"))),
            InfixOp::Eq => Ok(Object::Boolean(a == b)),
            InfixOp::NotEq => Ok(Object::Boolean(a != b)),
            _ => Err(unknown_infix_operator("STRING", op, "STRING")),
        },
        _ => match op {
            InfixOp::Eq => Ok(Object::Boolean(left.is_identical(right))),
            InfixOp::NotEq => Ok(Object::Boolean(!left.is_identical(right))),
            _ if left.type_name() != right.type_name() => {
                Err(type_mismatch(left.type_name(), op, right.type_name()))
            }
            _ => Err(unknown_infix_operator(left.type_name(), op, right.type_name())),
        },
    }
}

/// Integer arithmetic wraps on overflow; division truncates.
fn eval_int_binary(a: i64, op: InfixOp, b: i64) -> EvalResult {
    let value = match op {
        InfixOp::Add => Object::Integer(a.wrapping_add(b)),
        InfixOp::Sub => Object::Integer(a.wrapping_sub(b)),
        InfixOp::Mul => Object::Integer(a.wrapping_mul(b)),
        InfixOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            Object::Integer(a.wrapping_div(b))
        }
        InfixOp::Eq => Object::Boolean(a == b),
        InfixOp::NotEq => Object::Boolean(a != b),
        InfixOp::Lt => Object::Boolean(a < b),
        InfixOp::Gt => Object::Boolean(a > b),
        InfixOp::LtEq => Object::Boolean(a <= b),
        InfixOp::GtEq => Object::Boolean(a >= b),
    };
    Ok(value)
}

#[allow(clippy::float_cmp)]
fn eval_float_binary(a: f64, op: InfixOp, b: f64) -> EvalResult {
    let value = match op {
        InfixOp::Add => Object::Float(a + b),
        InfixOp::Sub => Object::Float(a - b),
        InfixOp::Mul => Object::Float(a * b),
        InfixOp::Div => {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            Object::Float(a / b)
        }
        InfixOp::Eq => Object::Boolean(a == b),
        InfixOp::NotEq => Object::Boolean(a != b),
        InfixOp::Lt => Object::Boolean(a < b),
        InfixOp::Gt => Object::Boolean(a > b),
        InfixOp::LtEq => Object::Boolean(a <= b),
        InfixOp::GtEq => Object::Boolean(a >= b),
    };
    Ok(value)
}
