//! `trumpc run`: parse and evaluate a program.

use std::path::{Path, PathBuf};

use tracing::debug;
use trump_eval::{Interpreter, Object};

use super::{read_file, require_trump_extension, DriverError};

/// Environment variable consulted when no `--seed` is given.
const SEED_ENV_VAR: &str = "TRUMP_SEED";

/// Options for `trumpc run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub path: String,
    pub verbose: bool,
    pub seed: Option<u64>,
    pub no_chaos: bool,
}

/// Parse `[--verbose] [--seed=N] [--no-chaos] <file.trump | dir>`.
///
/// Flags may come before or after the path.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, DriverError> {
    let mut options = RunOptions::default();
    let mut path = None;

    for arg in args {
        if arg == "--verbose" || arg == "-v" {
            options.verbose = true;
        } else if arg == "--no-chaos" {
            options.no_chaos = true;
        } else if let Some(seed) = arg.strip_prefix("--seed=") {
            options.seed = Some(parse_seed(seed, arg)?);
        } else if arg.starts_with('-') {
            return Err(DriverError::InvalidArgument(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        }
    }

    options.path = path.ok_or(DriverError::MissingArgument("a .trump file to run"))?;
    Ok(options)
}

fn parse_seed(text: &str, shown: &str) -> Result<u64, DriverError> {
    text.parse()
        .map_err(|_| DriverError::InvalidArgument(shown.to_string()))
}

fn seed_from_env() -> Result<Option<u64>, DriverError> {
    match std::env::var(SEED_ENV_VAR) {
        Ok(value) => parse_seed(&value, &format!("{SEED_ENV_VAR}={value}")).map(Some),
        Err(_) => Ok(None),
    }
}

/// A directory stands for its `main.trump`.
pub fn resolve_source_path(path: &Path) -> Result<PathBuf, DriverError> {
    let file = if path.is_dir() {
        let main = path.join("main.trump");
        if !main.is_file() {
            return Err(DriverError::NoMainFile(path.display().to_string()));
        }
        main
    } else {
        path.to_path_buf()
    };
    require_trump_extension(&file)?;
    Ok(file)
}

/// Run the program named by `options`, printing to stdout.
pub fn run_path(options: &RunOptions) -> Result<(), DriverError> {
    let file = resolve_source_path(Path::new(&options.path))?;
    let source = read_file(&file)?;

    let seed = match options.seed {
        Some(seed) => Some(seed),
        None => seed_from_env()?,
    };
    let mut builder = Interpreter::builder().maybe_seed(seed);
    if options.no_chaos {
        builder = builder.no_chaos();
    }
    let mut interpreter = builder.build();

    debug!(file = %file.display(), ?seed, no_chaos = options.no_chaos, "running");
    let result = run_source(&source, &mut interpreter)?;

    if options.verbose && !matches!(result, Object::Null) {
        println!();
        println!("Program result: {result}");
    }
    Ok(())
}

/// Parse and evaluate `source` with `interpreter`.
///
/// Nothing runs if the source has syntax errors. A runtime error comes back
/// as [`DriverError::Runtime`] holding the inspected error object.
pub fn run_source(source: &str, interpreter: &mut Interpreter) -> Result<Object, DriverError> {
    let output = trump_parse::parse(source);
    if output.has_errors() {
        return Err(DriverError::Syntax(output.all_errors().cloned().collect()));
    }

    let result = interpreter.eval_program(&output.program);
    if result.is_error() {
        return Err(DriverError::Runtime(result.inspect()));
    }
    Ok(result)
}
