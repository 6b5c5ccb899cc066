//! Parser for the TRUMP language.
//!
//! A Pratt (precedence-climbing) recursive-descent parser with two tokens
//! of lookahead. Errors are collected rather than returned: a full pass
//! always completes and yields a [`Program`] holding every statement that
//! parsed, alongside the list of [`SyntaxError`]s.
//!
//! # Grammar sketch
//!
//! ```text
//! statement := (YUGE | TREMENDOUS) IDENT '=' expr
//!            | (YUGE | TREMENDOUS) FUNCTION IDENT '(' params ')' rating? block
//!            | IDENT '=' expr
//!            | RETURN expr | TWEET expr | RALLY expr | EXECUTIVE_ORDER expr
//!            | BUILD WALL IF '(' expr ')' block (ELSE block)?
//!            | MAKE DEALS WHILE '(' expr ')' block
//!            | MAKE AMERICA GREAT AGAIN FOR '(' statement ';' expr ';' statement ')' block
//!            | block | expr
//! ```
//!
//! A `;` after a simple statement is optional.

mod grammar;
mod precedence;

use tracing::{debug, trace};
use trump_diagnostic::{ErrorCode, SyntaxError};
use trump_ir::{Position, Program, Token, TokenKind};
use trump_lexer::Lexer;

pub use precedence::Precedence;

/// Result of parsing a whole source.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub program: Program,
    /// Parser errors.
    pub errors: Vec<SyntaxError>,
    /// Lexer errors, kept separate from parser errors.
    pub lex_errors: Vec<SyntaxError>,
    /// Comments skipped by the lexer.
    pub comments: usize,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || !self.lex_errors.is_empty()
    }

    /// Lexer errors followed by parser errors.
    pub fn all_errors(&self) -> impl Iterator<Item = &SyntaxError> {
        self.lex_errors.iter().chain(&self.errors)
    }
}

/// Lex and parse `source`.
pub fn parse(source: &str) -> ParseOutput {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let comments = parser.lexer.comment_count();
    ParseOutput {
        program,
        errors: parser.errors,
        lex_errors: parser.lexer.errors().to_vec(),
        comments,
    }
}

pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    errors: Vec<SyntaxError>,
    /// Position of the `}` that closed the most recent block.
    closed_block: Option<Position>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
            closed_block: None,
        }
    }

    /// Parse statements until end of input.
    ///
    /// Every iteration advances at least one token, so this terminates on
    /// any input.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.check(TokenKind::Eof) {
            match self.parse_statement() {
                Some(stmt) => statements.push(stmt),
                None => self.recover(),
            }
            self.advance();
        }
        debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        Program::new(statements)
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Errors rendered as `CODE at LINE:COL: message`.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    // Token navigation

    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    fn check_peek(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance if the next token is `kind`; otherwise record one error at
    /// the offending token and stay put.
    fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.check_peek(kind) {
            self.advance();
            return Some(());
        }
        self.peek_error(kind.as_str());
        None
    }

    /// Like [`Self::expect_peek`] for identifiers, reporting
    /// `EXPECTED_IDENTIFIER` and returning the name.
    fn expect_peek_ident(&mut self, what: &str) -> Option<String> {
        if self.check_peek(TokenKind::Ident) {
            self.advance();
            return Some(self.current.literal.clone());
        }
        let message = format!("expected {what}, got {} instead", self.peek.kind);
        self.error_at(ErrorCode::ExpectedIdentifier, self.peek.position(), message);
        None
    }

    /// Skip the rest of a statement that failed to parse.
    ///
    /// Stops on a `;` or `}`, or just before a `}` or a statement keyword,
    /// so the caller's advance lands on the next statement. A `}` that closed
    /// a block nested inside the failed statement is stepped over.
    fn recover(&mut self) {
        trace!(at = %self.current.position(), "recovering");
        if self.check(TokenKind::RBrace) && self.closed_block == Some(self.current.position()) {
            self.advance();
        }
        while !matches!(
            self.current.kind,
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        ) {
            if self.check_peek(TokenKind::RBrace) || starts_statement(self.peek.kind) {
                return;
            }
            self.advance();
        }
    }

    fn skip_optional_semicolon(&mut self) {
        if self.check_peek(TokenKind::Semicolon) {
            self.advance();
        }
    }

    fn peek_error(&mut self, expected: &str) {
        let message = format!(
            "expected next token to be {expected}, got {} instead",
            self.peek.kind
        );
        self.error_at(ErrorCode::UnexpectedToken, self.peek.position(), message);
    }

    fn error_at(&mut self, code: ErrorCode, position: Position, message: String) {
        trace!(%code, %position, %message, "parse error");
        self.errors.push(SyntaxError::new(code, position, message));
    }
}

fn starts_statement(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Yuge
            | TokenKind::Tremendous
            | TokenKind::Return
            | TokenKind::Build
            | TokenKind::Make
            | TokenKind::Tweet
            | TokenKind::Rally
            | TokenKind::ExecutiveOrder
    )
}

#[cfg(test)]
mod tests;
