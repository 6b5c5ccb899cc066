//! `trumpc create`: scaffold a new project directory.

use std::io;
use std::path::Path;

use super::DriverError;

/// The `main.trump` written into every new project.
pub const SAMPLE_PROGRAM: &str = r#"// main.trump
// A TREMENDOUS program written in TRUMP.

/*
 * Multi-line comments work too.
 * The best comments, believe me.
 */

TWEET "Hello, World! It's going to be TREMENDOUS!";

// A yuge function with a tremendous rating
YUGE FUNCTION greet(name) RATED 10/10 {
    TWEET "Hello, " + name + "! You're doing a FANTASTIC job!";
    RETURN "Greeted " + name;
}

greet("America");

YUGE value = 45;
BUILD WALL IF (value == 45) {
    RALLY "that's the best number";
} ELSE {
    TWEET "Not a great number. SAD!";
}

YUGE counter = 0;
MAKE DEALS WHILE (counter < 3) {
    TWEET counter;
    counter = counter + 1;
}

MAKE AMERICA GREAT AGAIN FOR (YUGE i = 0; i < 3; i = i + 1) {
    TWEET i;
}

FAKE NEWS: this line is a comment as well

YUGE numbers = [3, 1, 2, 45, 6];
TWEET numbers;
TWEET TREMENDOUS_SORT(numbers);
TWEET AMERICA_FIRST(numbers);
"#;

/// README for a new project; `{project}` is replaced by the project name.
pub const README_TEMPLATE: &str = "# {project}

A tremendous project written in the TRUMP programming language!

## Running your program

    trumpc run {project}

Or directly with:

    trumpc run main.trump

To build your program:

    trumpc build main.trump

This writes the parsed program to main.djt.

## Language features

- Variable declarations with YUGE and TREMENDOUS
- Function definitions with FUNCTION
- Conditionals with BUILD WALL IF/ELSE
- Loops with MAKE DEALS WHILE and MAKE AMERICA GREAT AGAIN FOR
- Output with TWEET, RALLY and EXECUTIVE_ORDER
- Built-in functions like TREMENDOUS_SORT and AMERICA_FIRST
- Comments with //, /* ... */ and FAKE NEWS:
";

/// Create `dir` holding `main.trump` and `README.md`.
///
/// Fails if `dir` already exists; nothing is overwritten.
pub fn create_project(dir: &Path) -> Result<(), DriverError> {
    let shown = dir.display().to_string();
    std::fs::create_dir(dir).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            DriverError::AlreadyExists(shown.clone())
        } else {
            DriverError::Write {
                path: shown.clone(),
                source,
            }
        }
    })?;

    let project = dir
        .file_name()
        .map_or_else(|| shown.clone(), |name| name.to_string_lossy().into_owned());

    let main_path = dir.join("main.trump");
    write_file(&main_path, SAMPLE_PROGRAM)?;
    let readme_path = dir.join("README.md");
    write_file(&readme_path, &README_TEMPLATE.replace("{project}", &project))?;

    println!("TREMENDOUS SUCCESS! Created new project: {project}");
    println!("  - Sample program: {}", main_path.display());
    println!("  - README: {}", readme_path.display());
    println!();
    println!("To run your program:");
    println!("  trumpc run {shown}");
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), DriverError> {
    std::fs::write(path, contents).map_err(|source| DriverError::Write {
        path: path.display().to_string(),
        source,
    })
}
