//! Prefix operator implementations for the evaluator.

use trump_ir::PrefixOp;

use crate::errors::unknown_prefix_operator;
use crate::value::Object;
use crate::EvalResult;

/// Evaluate a prefix operation.
///
/// `!` works on every value through truthiness; `-` only on numbers.
pub fn evaluate_unary(op: PrefixOp, operand: &Object) -> EvalResult {
    match (op, operand) {
        (PrefixOp::Not, _) => Ok(Object::Boolean(!operand.is_truthy())),
        (PrefixOp::Neg, Object::Integer(n)) => Ok(Object::Integer(n.wrapping_neg())),
        (PrefixOp::Neg, Object::Float(f)) => Ok(Object::Float(-f)),
        (PrefixOp::Neg, _) => Err(unknown_prefix_operator(op, operand.type_name())),
    }
}
