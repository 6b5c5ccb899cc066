//! The TRUMP language driver.
//!
//! Wires the phases together for the `trumpc` binary:
//!
//! ```text
//! source ──► trump_lexer ──► trump_parse ──► Program
//!                                              │
//!               build: printed to <file>.djt ◄─┤
//!               inspect: token/statement report ◄─┤
//!               run: trump_eval::Interpreter ◄─┘
//! ```
//!
//! Every command returns `Result<_, DriverError>`; the binary turns an error
//! into a themed headline (see [`headlines`]) and exit code 1.

pub mod commands;
pub mod headlines;
mod tracing_setup;

pub use commands::DriverError;
pub use tracing_setup::init_tracing;
