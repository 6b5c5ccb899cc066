//! Operator matching helpers.

use trump_ir::{InfixOp, PrefixOp, TokenKind};

use crate::Parser;

impl Parser {
    pub(crate) fn match_prefix_op(&self) -> Option<PrefixOp> {
        match self.current.kind {
            TokenKind::Bang => Some(PrefixOp::Not),
            TokenKind::Minus => Some(PrefixOp::Neg),
            _ => None,
        }
    }

    pub(crate) fn match_infix_op(&self) -> Option<InfixOp> {
        match self.current.kind {
            TokenKind::Plus => Some(InfixOp::Add),
            TokenKind::Minus => Some(InfixOp::Sub),
            TokenKind::Star => Some(InfixOp::Mul),
            TokenKind::Slash => Some(InfixOp::Div),
            TokenKind::EqEq => Some(InfixOp::Eq),
            TokenKind::NotEq => Some(InfixOp::NotEq),
            TokenKind::Lt => Some(InfixOp::Lt),
            TokenKind::Gt => Some(InfixOp::Gt),
            TokenKind::LtEq => Some(InfixOp::LtEq),
            TokenKind::GtEq => Some(InfixOp::GtEq),
            _ => None,
        }
    }
}
