//! Diagnostics for the TRUMP toolchain.
//!
//! Two kinds of failure reach a user:
//! - [`SyntaxError`]: collected (never thrown) by the lexer and parser, each
//!   carrying an [`ErrorCode`] and the 1-based position it was found at.
//! - Driver failures (missing files, bad extensions, runtime errors), which
//!   reuse [`ErrorCode`] for their category but have no source position.

mod error_code;
mod syntax_error;

pub use error_code::ErrorCode;
pub use syntax_error::SyntaxError;
