//! Command implementations for the `trumpc` CLI.

mod build;
mod create;
mod inspect;
mod run;

pub use build::{build_file, parse_build_options, BuildOptions};
pub use create::{create_project, README_TEMPLATE, SAMPLE_PROGRAM};
pub use inspect::{
    inspect_file, statement_stats, token_preview, token_stats, StatementStats, TokenStats,
};
pub use run::{parse_run_options, resolve_source_path, run_path, run_source, RunOptions};

use std::io;
use std::path::Path;

use rand::Rng;
use thiserror::Error;
use trump_diagnostic::{ErrorCode, SyntaxError};

use crate::headlines::headline;

/// Everything that can stop a command.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("please specify {0}")]
    MissingArgument(&'static str),
    #[error("invalid argument '{0}'")]
    InvalidArgument(String),
    #[error("expected a .trump file, got '{0}'")]
    InvalidFileType(String),
    #[error("cannot find file '{0}'")]
    FileNotFound(String),
    #[error("no main.trump found in directory '{0}'")]
    NoMainFile(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error("'{0}' already exists")]
    AlreadyExists(String),
    #[error("cannot write '{path}': {source}")]
    Write { path: String, source: io::Error },
    #[error("{} syntax error(s)", .0.len())]
    Syntax(Vec<SyntaxError>),
    #[error("{0}")]
    Runtime(String),
}

impl DriverError {
    /// Category used to pick the headline. Syntax failures take the code of
    /// the first error reported.
    pub fn code(&self) -> ErrorCode {
        match self {
            DriverError::MissingArgument(_) | DriverError::InvalidArgument(_) => {
                ErrorCode::MissingArgument
            }
            DriverError::InvalidFileType(_) => ErrorCode::InvalidFileType,
            DriverError::FileNotFound(_)
            | DriverError::NoMainFile(_)
            | DriverError::PermissionDenied(_)
            | DriverError::InvalidUtf8(_)
            | DriverError::Read { .. } => ErrorCode::FileNotFound,
            DriverError::AlreadyExists(_) | DriverError::Write { .. } => ErrorCode::FileWriteError,
            DriverError::Syntax(errors) => errors
                .first()
                .map_or(ErrorCode::SyntaxError, |error| error.code),
            DriverError::Runtime(_) => ErrorCode::RuntimeError,
        }
    }
}

/// Print `error` to stderr: code and themed headline, then the details.
pub fn report<R: Rng + ?Sized>(error: &DriverError, rng: &mut R) {
    let code = error.code();
    eprintln!("{code}: {}", headline(code, rng));
    match error {
        DriverError::Syntax(errors) => {
            for error in errors {
                eprintln!("    {error}");
            }
        }
        other => eprintln!("    {other}"),
    }
}

/// Read a source file, turning I/O failures into user-facing errors.
pub(crate) fn read_file(path: &Path) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|e| {
        let shown = path.display().to_string();
        match e.kind() {
            io::ErrorKind::NotFound => DriverError::FileNotFound(shown),
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied(shown),
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8(shown),
            _ => DriverError::Read {
                path: shown,
                source: e,
            },
        }
    })
}

/// Reject anything without the `.trump` extension.
pub(crate) fn require_trump_extension(path: &Path) -> Result<(), DriverError> {
    if path.extension().is_some_and(|ext| ext == "trump") {
        Ok(())
    } else {
        Err(DriverError::InvalidFileType(path.display().to_string()))
    }
}
