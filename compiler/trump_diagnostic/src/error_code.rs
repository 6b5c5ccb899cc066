//! Error codes for every diagnostic the toolchain can report.

use std::fmt;

/// Error categories.
///
/// The first five are produced by the lexer and parser and always come
/// with a source position. The rest are raised by the driver.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer / parser
    /// Character that starts no token
    IllegalCharacter,
    /// String literal without its closing quote
    UnterminatedString,
    /// Token that does not fit the grammar at this point
    UnexpectedToken,
    /// Name required (declaration, parameter list)
    ExpectedIdentifier,
    /// Structural error such as an unterminated block comment
    SyntaxError,

    // Driver
    FileNotFound,
    FileWriteError,
    InvalidFileType,
    MissingArgument,
    RuntimeError,
}

impl ErrorCode {
    /// All codes, in declaration order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::IllegalCharacter,
        ErrorCode::UnterminatedString,
        ErrorCode::UnexpectedToken,
        ErrorCode::ExpectedIdentifier,
        ErrorCode::SyntaxError,
        ErrorCode::FileNotFound,
        ErrorCode::FileWriteError,
        ErrorCode::InvalidFileType,
        ErrorCode::MissingArgument,
        ErrorCode::RuntimeError,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::IllegalCharacter => "ILLEGAL_CHARACTER",
            ErrorCode::UnterminatedString => "UNTERMINATED_STRING",
            ErrorCode::UnexpectedToken => "UNEXPECTED_TOKEN",
            ErrorCode::ExpectedIdentifier => "EXPECTED_IDENTIFIER",
            ErrorCode::SyntaxError => "SYNTAX_ERROR",
            ErrorCode::FileNotFound => "FILE_NOT_FOUND",
            ErrorCode::FileWriteError => "FILE_WRITE_ERROR",
            ErrorCode::InvalidFileType => "INVALID_FILE_TYPE",
            ErrorCode::MissingArgument => "MISSING_ARGUMENT",
            ErrorCode::RuntimeError => "RUNTIME_ERROR",
        }
    }

    /// Whether the code comes from the lexer or parser.
    pub const fn is_syntax(self) -> bool {
        matches!(
            self,
            ErrorCode::IllegalCharacter
                | ErrorCode::UnterminatedString
                | ErrorCode::UnexpectedToken
                | ErrorCode::ExpectedIdentifier
                | ErrorCode::SyntaxError
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a code from its upper-case spelling, e.g. `"SYNTAX_ERROR"`.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}
