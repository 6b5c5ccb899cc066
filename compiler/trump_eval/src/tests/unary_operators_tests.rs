//! Tests for prefix operator implementations.

use crate::unary_operators::evaluate_unary;
use crate::{Object, FALSE, NULL, TRUE};
use pretty_assertions::assert_eq;
use trump_ir::PrefixOp;

#[test]
fn test_bang_follows_truthiness() {
    assert_eq!(evaluate_unary(PrefixOp::Not, &TRUE), Ok(FALSE));
    assert_eq!(evaluate_unary(PrefixOp::Not, &FALSE), Ok(TRUE));
    assert_eq!(evaluate_unary(PrefixOp::Not, &NULL), Ok(TRUE));
    assert_eq!(evaluate_unary(PrefixOp::Not, &Object::Integer(0)), Ok(FALSE));
    assert_eq!(evaluate_unary(PrefixOp::Not, &Object::string("")), Ok(FALSE));
}

#[test]
fn test_negation() {
    assert_eq!(
        evaluate_unary(PrefixOp::Neg, &Object::Integer(5)),
        Ok(Object::Integer(-5))
    );
    assert_eq!(
        evaluate_unary(PrefixOp::Neg, &Object::Float(2.5)),
        Ok(Object::Float(-2.5))
    );
    assert_eq!(
        evaluate_unary(PrefixOp::Neg, &Object::Integer(i64::MIN)),
        Ok(Object::Integer(i64::MIN))
    );
}

#[test]
fn test_negation_of_non_numbers() {
    assert_eq!(
        evaluate_unary(PrefixOp::Neg, &TRUE),
        Err(Object::Error("unknown operator: -BOOLEAN".into()))
    );
    assert_eq!(
        evaluate_unary(PrefixOp::Neg, &Object::string("wall")),
        Err(Object::Error("unknown operator: -STRING".into()))
    );
}
