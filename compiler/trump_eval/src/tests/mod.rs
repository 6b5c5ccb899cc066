//! Operator tests, kept apart from the implementation files.

mod unary_operators_tests;
