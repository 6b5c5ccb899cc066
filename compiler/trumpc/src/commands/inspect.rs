//! `trumpc inspect`: static report on a program, nothing is evaluated.
//!
//! Phase 1 lexes the file and summarises the token stream; phase 2 parses it
//! and counts top-level statements by kind.

use std::path::Path;

use trump_ir::{Program, Statement, Token, TokenKind};

use super::{read_file, require_trump_extension, DriverError};

/// Tokens shown in the preview.
const PREVIEW_LIMIT: usize = 10;

/// Counts over a token stream. The trailing `Eof` is not counted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStats {
    pub total: usize,
    pub identifiers: usize,
    pub keywords: usize,
    /// Numbers, strings, `WINNING` and `LOSER`.
    pub literals: usize,
    pub comments: usize,
}

/// Counts of top-level statements by kind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StatementStats {
    pub total: usize,
    pub declarations: usize,
    pub assignments: usize,
    pub returns: usize,
    pub conditionals: usize,
    pub loops: usize,
    pub tweets: usize,
    pub rallies: usize,
    pub executive_orders: usize,
    /// Expression statements and bare blocks.
    pub expressions: usize,
}

pub fn token_stats(tokens: &[Token], comments: usize) -> TokenStats {
    let mut stats = TokenStats {
        comments,
        ..TokenStats::default()
    };
    for token in tokens.iter().filter(|t| !t.is(TokenKind::Eof)) {
        stats.total += 1;
        if token.is(TokenKind::Ident) {
            stats.identifiers += 1;
        } else if token.kind.is_literal() {
            stats.literals += 1;
        } else if token.kind.is_keyword() {
            stats.keywords += 1;
        }
    }
    stats
}

pub fn statement_stats(program: &Program) -> StatementStats {
    let mut stats = StatementStats {
        total: program.len(),
        ..StatementStats::default()
    };
    for statement in &program.statements {
        let slot = match statement {
            Statement::Let { .. } => &mut stats.declarations,
            Statement::Assign { .. } => &mut stats.assignments,
            Statement::Return(_) => &mut stats.returns,
            Statement::If { .. } => &mut stats.conditionals,
            Statement::While { .. } | Statement::For(_) => &mut stats.loops,
            Statement::Tweet(_) => &mut stats.tweets,
            Statement::Rally(_) => &mut stats.rallies,
            Statement::ExecutiveOrder(_) => &mut stats.executive_orders,
            Statement::Expression(_) | Statement::Block(_) => &mut stats.expressions,
        };
        *slot += 1;
    }
    stats
}

/// The first few tokens as `literal (KIND)`.
pub fn token_preview(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .take(PREVIEW_LIMIT)
        .map(|t| format!("{} ({})", t.literal, t.kind))
        .collect()
}

/// Print the inspection report for one file.
///
/// Syntax errors are listed in the report and then returned, so the
/// command still exits with failure.
pub fn inspect_file(path: &str) -> Result<(), DriverError> {
    let path = Path::new(path);
    require_trump_extension(path)?;
    let source = read_file(path)?;

    println!("INSPECTING FILE: {}", path.display());
    println!("==========================");
    println!("PHASE 1: LEXICAL ANALYSIS");

    let lexed = trump_lexer::lex(&source);
    println!("Token preview:");
    for (i, token) in token_preview(&lexed.tokens).iter().enumerate() {
        println!("  {}. {token}", i + 1);
    }
    if lexed.tokens.len() > PREVIEW_LIMIT {
        println!("  ...");
    }

    let tokens = token_stats(&lexed.tokens, lexed.comments);
    println!();
    println!("Token statistics:");
    println!("  Total tokens: {}", tokens.total);
    println!("  Identifiers: {}", tokens.identifiers);
    println!("  Keywords: {}", tokens.keywords);
    println!("  Literals: {}", tokens.literals);
    println!("  Comments: {}", tokens.comments);

    println!();
    println!("PHASE 2: SYNTAX ANALYSIS");
    let parsed = trump_parse::parse(&source);
    if parsed.has_errors() {
        println!("Syntax errors found:");
        for (i, error) in parsed.all_errors().enumerate() {
            println!("  {}. {error}", i + 1);
        }
        return Err(DriverError::Syntax(parsed.all_errors().cloned().collect()));
    }
    println!("No syntax errors found!");

    let statements = statement_stats(&parsed.program);
    println!();
    println!("Statement statistics:");
    println!("  Total statements: {}", statements.total);
    println!("  Variable declarations: {}", statements.declarations);
    println!("  Assignments: {}", statements.assignments);
    println!("  Return statements: {}", statements.returns);
    println!("  If statements: {}", statements.conditionals);
    println!("  Loop statements: {}", statements.loops);
    println!("  Tweet statements: {}", statements.tweets);
    println!("  Rally statements: {}", statements.rallies);
    println!("  Executive orders: {}", statements.executive_orders);
    println!("  Expression statements: {}", statements.expressions);

    println!();
    println!("OVERALL ASSESSMENT");
    for line in assessment(&tokens, &statements) {
        println!("{line}");
    }
    println!();
    println!("Inspection complete. This program is PERFECT!");
    Ok(())
}

/// Closing remarks, depending on what the program contains.
fn assessment(tokens: &TokenStats, statements: &StatementStats) -> Vec<&'static str> {
    let mut lines = vec![
        "THIS CODE IS TREMENDOUS! No errors found. BELIEVE ME!",
        "It's ready to MAKE PROGRAMMING GREAT AGAIN!",
    ];
    if tokens.comments > 0 {
        lines.push("Great documentation with comments. THE MOST TRANSPARENT EVER!");
    }
    if statements.tweets > 0 {
        lines.push("Lots of tweets in this program. GREAT COMMUNICATION!");
    }
    if statements.conditionals > 0 {
        lines.push("Building walls with conditional statements. VERY SECURE!");
    }
    if statements.loops > 0 {
        lines.push("Making great deals in loops. THE BEST DEALS!");
    }
    lines
}
