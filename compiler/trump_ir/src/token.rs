//! Lexical tokens.

use std::fmt;

/// A 1-based line/column location in source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Token kinds.
///
/// Keywords are matched case-sensitively; `yuge` is an identifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Special
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,
    Float,
    String,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Star,
    Slash,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Delimiters
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Keywords
    Function,
    Yuge,
    Tremendous,
    Build,
    Wall,
    If,
    Else,
    Return,
    Make,
    Deals,
    While,
    Tweet,
    Rally,
    ExecutiveOrder,
    Winning,
    Loser,
    Bigly,
    Billions,
    FakeNews,
    Rated,
    Border,
    For,
    America,
    Great,
    Again,
}

impl TokenKind {
    /// Every keyword kind, in declaration order.
    pub const KEYWORDS: &'static [TokenKind] = &[
        TokenKind::Function,
        TokenKind::Yuge,
        TokenKind::Tremendous,
        TokenKind::Build,
        TokenKind::Wall,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
        TokenKind::Make,
        TokenKind::Deals,
        TokenKind::While,
        TokenKind::Tweet,
        TokenKind::Rally,
        TokenKind::ExecutiveOrder,
        TokenKind::Winning,
        TokenKind::Loser,
        TokenKind::Bigly,
        TokenKind::Billions,
        TokenKind::FakeNews,
        TokenKind::Rated,
        TokenKind::Border,
        TokenKind::For,
        TokenKind::America,
        TokenKind::Great,
        TokenKind::Again,
    ];

    /// Resolve an identifier to its keyword kind, if it is one.
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        TokenKind::KEYWORDS
            .iter()
            .copied()
            .find(|kind| kind.as_str() == ident)
    }

    /// The name used for this kind in diagnostics.
    ///
    /// Operators and delimiters render as their source symbol, keywords as
    /// their spelling, everything else as an upper-case tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Function => "FUNCTION",
            TokenKind::Yuge => "YUGE",
            TokenKind::Tremendous => "TREMENDOUS",
            TokenKind::Build => "BUILD",
            TokenKind::Wall => "WALL",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Make => "MAKE",
            TokenKind::Deals => "DEALS",
            TokenKind::While => "WHILE",
            TokenKind::Tweet => "TWEET",
            TokenKind::Rally => "RALLY",
            TokenKind::ExecutiveOrder => "EXECUTIVE_ORDER",
            TokenKind::Winning => "WINNING",
            TokenKind::Loser => "LOSER",
            TokenKind::Bigly => "BIGLY",
            TokenKind::Billions => "BILLIONS",
            TokenKind::FakeNews => "FAKE_NEWS",
            TokenKind::Rated => "RATED",
            TokenKind::Border => "BORDER",
            TokenKind::For => "FOR",
            TokenKind::America => "AMERICA",
            TokenKind::Great => "GREAT",
            TokenKind::Again => "AGAIN",
        }
    }

    pub fn is_keyword(self) -> bool {
        TokenKind::KEYWORDS.contains(&self)
    }

    /// Literal tokens: numbers, strings and the two boolean keywords.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Winning
                | TokenKind::Loser
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its source text and start position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            literal: literal.into(),
            line: position.line,
            column: position.column,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<16} {:?} @ {}", self.kind.as_str(), self.literal, self.position())
    }
}

#[cfg(test)]
mod tests;
