use std::fmt;

use trump_ir::Position;

use crate::ErrorCode;

/// A lexer or parser error at a source position.
///
/// Displays as `CODE at LINE:COL: message`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SyntaxError {
    pub code: ErrorCode,
    pub position: Position,
    pub message: String,
}

impl SyntaxError {
    pub fn new(code: ErrorCode, position: Position, message: impl Into<String>) -> Self {
        SyntaxError {
            code,
            position,
            message: message.into(),
        }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.code, self.position, self.message)
    }
}

impl std::error::Error for SyntaxError {}

#[cfg(test)]
mod tests;
