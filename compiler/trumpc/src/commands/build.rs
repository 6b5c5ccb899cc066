//! `trumpc build`: write the parsed program back out as a `.djt` file.
//!
//! The output is the printed AST, one top-level statement per line.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use super::{read_file, require_trump_extension, DriverError};

/// Options for `trumpc build`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    pub path: String,
    pub verbose: bool,
    /// Plain status lines instead of the usual boasting.
    pub no_fake_news: bool,
}

/// Parse `[--verbose] [--no-fake-news] <file.trump>`.
pub fn parse_build_options(args: &[String]) -> Result<BuildOptions, DriverError> {
    let mut options = BuildOptions::default();
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--verbose" | "-v" => options.verbose = true,
            "--no-fake-news" => options.no_fake_news = true,
            flag if flag.starts_with('-') => {
                return Err(DriverError::InvalidArgument(arg.clone()));
            }
            _ if path.is_none() => path = Some(arg.clone()),
            _ => {}
        }
    }

    options.path = path.ok_or(DriverError::MissingArgument("a .trump file to build"))?;
    Ok(options)
}

/// Build one file, returning the path written.
pub fn build_file(options: &BuildOptions) -> Result<PathBuf, DriverError> {
    let start = Instant::now();
    let input = Path::new(&options.path);
    require_trump_extension(input)?;
    let source = read_file(input)?;

    let parsed = trump_parse::parse(&source);
    if parsed.has_errors() {
        return Err(DriverError::Syntax(parsed.all_errors().cloned().collect()));
    }

    let output = input.with_extension("djt");
    std::fs::write(&output, parsed.program.to_string()).map_err(|source| DriverError::Write {
        path: output.display().to_string(),
        source,
    })?;
    debug!(input = %input.display(), output = %output.display(), "build finished");

    let (input_shown, output_shown) = (input.display(), output.display());
    if options.no_fake_news {
        println!("Compiled {input_shown} -> {output_shown}");
    } else {
        println!("TREMENDOUS SUCCESS! {input_shown} -> {output_shown}");
    }
    if options.verbose {
        println!("  Statements: {}", parsed.program.len());
        println!("  Comments: {}", parsed.comments);
        if !options.no_fake_news {
            println!("No problems found. BELIEVE ME, this code is PERFECT!");
        }
        println!("Compilation finished in {:.2?}", start.elapsed());
    }
    Ok(output)
}
