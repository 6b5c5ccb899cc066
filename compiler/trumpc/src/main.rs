//! TRUMP language CLI.

use std::path::Path;

use trumpc::commands::{
    build_file, create_project, inspect_file, parse_build_options, parse_run_options, report,
    run_path,
};
use trumpc::DriverError;

fn main() {
    trumpc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    let result = match command.as_str() {
        "run" => parse_run_options(&args[2..]).and_then(|options| run_path(&options)),
        "build" => parse_build_options(&args[2..])
            .and_then(|options| build_file(&options))
            .map(|_| ()),
        "create" => match args.get(2) {
            Some(project) => create_project(Path::new(project)),
            None => Err(DriverError::MissingArgument("a project name")),
        },
        "inspect" => match args.get(2) {
            Some(path) => inspect_file(path),
            None => Err(DriverError::MissingArgument("a .trump file to inspect")),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("trumpc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(error) = result {
        report(&error, &mut rand::thread_rng());
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("TRUMP - the programming language that makes coding great again");
    println!();
    println!("Usage: trumpc <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.trump | dir>  Run a program (a directory runs its main.trump)");
    println!("  build <file.trump>      Write the parsed program to <file>.djt");
    println!("  inspect <file.trump>    Report tokens and statements without running");
    println!("  create <project>        Create a new project with a sample program");
    println!("  help                    Show this help message");
    println!("  version                 Show version information");
    println!();
    println!("Run options:");
    println!("  --verbose               Print the program result");
    println!("  --seed=<n>              Seed the random source (or set TRUMP_SEED)");
    println!("  --no-chaos              Turn off condition flips, covfefe and sort swaps");
    println!();
    println!("Build options:");
    println!("  --verbose               Print build details");
    println!("  --no-fake-news          Plain status output");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=trump_eval=debug) to trace the phases.");
}
