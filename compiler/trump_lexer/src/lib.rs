//! Lexer for the TRUMP language.
//!
//! [`Lexer::next_token`] produces one token at a time and never fails:
//! problems are recorded as [`SyntaxError`]s and lexing carries on. Once the
//! input is exhausted every further call returns an `Eof` token.
//!
//! Comments (`// ...`, `/* ... */` and `FAKE NEWS: ...`) produce no tokens
//! but are counted, see [`Lexer::comment_count`].

mod cursor;

use cursor::Cursor;
use trump_diagnostic::{ErrorCode, SyntaxError};
use trump_ir::{Position, Token, TokenKind};

pub struct Lexer {
    cursor: Cursor,
    errors: Vec<SyntaxError>,
    comments: usize,
}

/// Everything produced by lexing a whole source.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    /// All tokens, ending with a single `Eof`.
    pub tokens: Vec<Token>,
    pub errors: Vec<SyntaxError>,
    pub comments: usize,
}

/// Lex `source` to completion.
pub fn lex(source: &str) -> LexOutput {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token();
        let done = tok.is(TokenKind::Eof);
        tokens.push(tok);
        if done {
            break;
        }
    }
    LexOutput {
        tokens,
        errors: lexer.errors,
        comments: lexer.comments,
    }
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            errors: Vec::new(),
            comments: 0,
        }
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Errors rendered as `CODE at LINE:COL: message`.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Number of comments skipped so far.
    pub fn comment_count(&self) -> usize {
        self.comments
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            let start = self.cursor.position();
            let Some(c) = self.cursor.current() else {
                return Token::new(TokenKind::Eof, "", start);
            };

            match c {
                '/' if self.cursor.peek() == Some('/') => {
                    self.skip_line_comment();
                    continue;
                }
                '/' if self.cursor.peek() == Some('*') => {
                    self.skip_block_comment(start);
                    continue;
                }
                '"' => return self.lex_string(start),
                c if c.is_ascii_digit() => return self.lex_number(start),
                c if is_letter(c) => {
                    let word = self.cursor.eat_while(|c| is_letter(c) || c.is_ascii_digit());
                    if word == "FAKE" && self.skip_fake_news_comment() {
                        continue;
                    }
                    let kind = TokenKind::keyword(&word).unwrap_or(TokenKind::Ident);
                    return Token::new(kind, word, start);
                }
                _ => return self.lex_punct(c, start),
            }
        }
    }

    fn lex_punct(&mut self, c: char, start: Position) -> Token {
        self.cursor.bump();
        let followed_by_eq = self.cursor.current() == Some('=');
        let (kind, literal) = match c {
            '=' if followed_by_eq => (TokenKind::EqEq, "=="),
            '!' if followed_by_eq => (TokenKind::NotEq, "!="),
            '<' if followed_by_eq => (TokenKind::LtEq, "<="),
            '>' if followed_by_eq => (TokenKind::GtEq, ">="),
            '=' => (TokenKind::Assign, "="),
            '!' => (TokenKind::Bang, "!"),
            '<' => (TokenKind::Lt, "<"),
            '>' => (TokenKind::Gt, ">"),
            '+' => (TokenKind::Plus, "+"),
            '-' => (TokenKind::Minus, "-"),
            '*' => (TokenKind::Star, "*"),
            '/' => (TokenKind::Slash, "/"),
            ',' => (TokenKind::Comma, ","),
            ';' => (TokenKind::Semicolon, ";"),
            '(' => (TokenKind::LParen, "("),
            ')' => (TokenKind::RParen, ")"),
            '{' => (TokenKind::LBrace, "{"),
            '}' => (TokenKind::RBrace, "}"),
            '[' => (TokenKind::LBracket, "["),
            ']' => (TokenKind::RBracket, "]"),
            other => {
                self.error(
                    ErrorCode::IllegalCharacter,
                    start,
                    format!("Illegal character found: {other:?}"),
                );
                return Token::new(TokenKind::Illegal, other.to_string(), start);
            }
        };
        if literal.len() == 2 {
            self.cursor.bump();
        }
        Token::new(kind, literal, start)
    }

    /// String contents are kept raw: a backslash only stops the next
    /// character from closing the literal.
    fn lex_string(&mut self, start: Position) -> Token {
        self.cursor.bump();
        let mut text = String::new();
        loop {
            match self.cursor.bump() {
                Some('"') => break,
                Some('\\') => {
                    text.push('\\');
                    if let Some(escaped) = self.cursor.bump() {
                        text.push(escaped);
                    }
                }
                Some(c) => text.push(c),
                None => {
                    self.error(ErrorCode::UnterminatedString, start, "Unterminated string");
                    break;
                }
            }
        }
        Token::new(TokenKind::String, text, start)
    }

    fn lex_number(&mut self, start: Position) -> Token {
        let mut text = self.cursor.eat_while(|c| c.is_ascii_digit());
        let fraction_follows = self.cursor.current() == Some('.')
            && self.cursor.peek().is_some_and(|c| c.is_ascii_digit());
        if !fraction_follows {
            return Token::new(TokenKind::Int, text, start);
        }
        self.cursor.bump();
        text.push('.');
        text.push_str(&self.cursor.eat_while(|c| c.is_ascii_digit()));
        Token::new(TokenKind::Float, text, start)
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(char::is_whitespace);
    }

    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
        self.comments += 1;
    }

    fn skip_block_comment(&mut self, start: Position) {
        self.cursor.bump();
        self.cursor.bump();
        loop {
            match self.cursor.bump() {
                Some('*') if self.cursor.current() == Some('/') => {
                    self.cursor.bump();
                    break;
                }
                Some(_) => {}
                None => {
                    self.error(
                        ErrorCode::SyntaxError,
                        start,
                        "Unterminated multi-line comment",
                    );
                    break;
                }
            }
        }
        self.comments += 1;
    }

    /// Called just after the word `FAKE`. Consumes a `NEWS:` comment if one
    /// follows; otherwise leaves the cursor untouched and returns `false`.
    fn skip_fake_news_comment(&mut self) -> bool {
        let saved = self.cursor.snapshot();
        self.skip_whitespace();
        let next = self.cursor.eat_while(|c| is_letter(c) || c.is_ascii_digit());
        if next == "NEWS" && self.cursor.current() == Some(':') {
            self.skip_line_comment();
            return true;
        }
        self.cursor.restore(saved);
        false
    }

    fn error(&mut self, code: ErrorCode, position: Position, message: impl Into<String>) {
        self.errors.push(SyntaxError::new(code, position, message));
    }
}

#[inline]
fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}
