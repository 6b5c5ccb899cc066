//! Themed error headlines.
//!
//! The driver opens every error report with one line picked at random from
//! the pool for its [`ErrorCode`]. The underlying message follows it
//! unchanged, so nothing is lost to the theatrics.

use rand::seq::SliceRandom;
use rand::Rng;
use trump_diagnostic::ErrorCode;

const ILLEGAL_CHARACTER: &[&str] = &[
    "BAD CHARACTER! We need EXTREME VETTING for every symbol!",
    "THIS SYMBOL DOES NOT BELONG HERE. We need a WALL around our syntax!",
    "NOBODY HAS EVER SEEN A CHARACTER LIKE THIS. NOT GOOD!",
];

const UNTERMINATED_STRING: &[&str] = &[
    "SAD! You open quotes but don't close them. TOTAL CHAOS!",
    "WHERE'S THE CLOSING QUOTE? People say I know the best quotes. These are terrible quotes!",
    "YOUR QUOTES ARE A DISASTER! Worse than anyone has ever seen!",
];

const UNEXPECTED_TOKEN: &[&str] = &[
    "WRONG TOKEN! It's like showing up to a DEAL with NO LEVERAGE!",
    "UNEXPECTED TOKEN! This token is a TOTAL LOSER. We only accept the BEST tokens.",
    "YOUR TOKEN IS FIRED! It's not doing the job. We need TREMENDOUS tokens!",
];

const EXPECTED_IDENTIFIER: &[&str] = &[
    "WHERE'S THE NAME? You can't make a deal without proper NAMING!",
    "NO IDENTIFIER FOUND! How can we know what we're talking about?",
    "NAMELESS DISASTER! I identify the BEST variables, believe me!",
];

const SYNTAX_ERROR: &[&str] = &[
    "FAKE SYNTAX! Your code is a MESS!",
    "YOUR SYNTAX IS TERRIBLE! Whoever taught you to code should be FIRED!",
    "THIS SYNTAX IS A DISASTER. Get the BEST people to help you!",
];

const FILE_NOT_FOUND: &[&str] = &[
    "WHERE'S THE FILE? It's gone missing. TOTALLY WIPED!",
    "YOUR FILE IS A HOAX! It claims to exist, but nobody can find it. SAD!",
    "FILE NOT FOUND! Many people are looking. Nobody can find it!",
];

const FILE_WRITE_ERROR: &[&str] = &[
    "CAN'T WRITE TO FILE! The system is RIGGED against your code!",
    "WRITE DISASTER! Can't save your beautiful code. It's a WITCH HUNT!",
    "FILE WRITE FAILURE! Very unfair to your tremendous code!",
];

const INVALID_FILE_TYPE: &[&str] = &[
    "BAD FILE! We only accept the BEST file types, like .trump!",
    "WRONG FILE TYPE! That's not a TRUMP file!",
    "FILE TYPE REJECTED! EXTREME VETTING for all files!",
];

const MISSING_ARGUMENT: &[&str] = &[
    "DISASTER DETECTED! That's like making a deal with NO LEVERAGE!",
    "WHERE ARE THE ARGUMENTS? You can't be GREAT without proper INPUTS!",
    "NO ARGUMENTS FOUND! I know arguments, I have the BEST arguments!",
];

const RUNTIME_ERROR: &[&str] = &[
    "RUNTIME DISASTER! Your program is CRASHING!",
    "EXECUTION FAILURE! This program is falling apart faster than anyone's ever seen!",
    "PROGRAM COLLAPSE! Your code is having a total MELTDOWN!",
];

/// Every headline available for `code`.
pub fn pool(code: ErrorCode) -> &'static [&'static str] {
    match code {
        ErrorCode::IllegalCharacter => ILLEGAL_CHARACTER,
        ErrorCode::UnterminatedString => UNTERMINATED_STRING,
        ErrorCode::UnexpectedToken => UNEXPECTED_TOKEN,
        ErrorCode::ExpectedIdentifier => EXPECTED_IDENTIFIER,
        ErrorCode::SyntaxError => SYNTAX_ERROR,
        ErrorCode::FileNotFound => FILE_NOT_FOUND,
        ErrorCode::FileWriteError => FILE_WRITE_ERROR,
        ErrorCode::InvalidFileType => INVALID_FILE_TYPE,
        ErrorCode::MissingArgument => MISSING_ARGUMENT,
        ErrorCode::RuntimeError => RUNTIME_ERROR,
    }
}

/// Pick a headline for `code`.
pub fn headline<R: Rng + ?Sized>(code: ErrorCode, rng: &mut R) -> &'static str {
    pool(code).choose(rng).copied().unwrap_or("DISASTER!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_code_has_headlines() {
        for &code in ErrorCode::ALL {
            assert!(!pool(code).is_empty(), "no headlines for {code}");
        }
    }

    #[test]
    fn headline_comes_from_the_code_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for &code in ErrorCode::ALL {
            for _ in 0..10 {
                let line = headline(code, &mut rng);
                assert!(pool(code).contains(&line));
            }
        }
    }

    #[test]
    fn same_seed_same_headline() {
        let a = headline(ErrorCode::RuntimeError, &mut StdRng::seed_from_u64(45));
        let b = headline(ErrorCode::RuntimeError, &mut StdRng::seed_from_u64(45));
        assert_eq!(a, b);
    }
}
