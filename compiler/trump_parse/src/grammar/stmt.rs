//! Statement productions.

use tracing::trace;
use trump_diagnostic::ErrorCode;
use trump_ir::{Block, Expression, ForLoop, LetKeyword, Statement, TokenKind};
use trump_stack::ensure_sufficient_stack;

use crate::{Parser, Precedence};

impl Parser {
    /// Parse one statement starting at the current token.
    ///
    /// Leaves the current token on the last token of the statement.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Yuge | TokenKind::Tremendous => self.parse_let(),
            TokenKind::Return => self
                .parse_keyword_operand()
                .map(Statement::Return),
            // `BUILD(...)` is the built-in constructor, not a conditional.
            TokenKind::Build if !self.check_peek(TokenKind::LParen) => self.parse_if(),
            TokenKind::Make if self.check_peek(TokenKind::Deals) => self.parse_while(),
            TokenKind::Make if self.check_peek(TokenKind::America) => self.parse_for(),
            TokenKind::Tweet => self.parse_keyword_operand().map(Statement::Tweet),
            TokenKind::Rally => self.parse_keyword_operand().map(Statement::Rally),
            TokenKind::ExecutiveOrder => self
                .parse_keyword_operand()
                .map(Statement::ExecutiveOrder),
            TokenKind::LBrace => Some(Statement::Block(self.parse_block())),
            // Empty statement.
            TokenKind::Semicolon => None,
            TokenKind::Ident if self.check_peek(TokenKind::Assign) => self.parse_assign(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `YUGE name = value` or `YUGE FUNCTION name(...) { ... }`
    fn parse_let(&mut self) -> Option<Statement> {
        let keyword = if self.check(TokenKind::Yuge) {
            LetKeyword::Yuge
        } else {
            LetKeyword::Tremendous
        };

        if self.check_peek(TokenKind::Function) {
            self.advance();
            let name = self.expect_peek_ident("function name after FUNCTION")?;
            self.expect_peek(TokenKind::LParen)?;
            let literal = self.parse_function_tail(Some(name.clone()))?;
            trace!(%name, "named function declaration");
            return Some(Statement::Let {
                keyword,
                name,
                value: Expression::function(literal),
            });
        }

        let name = self.expect_peek_ident(&format!("identifier after {}", keyword.as_str()))?;
        self.expect_peek(TokenKind::Assign)?;
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(Statement::Let {
            keyword,
            name,
            value,
        })
    }

    /// `name = value`
    fn parse_assign(&mut self) -> Option<Statement> {
        let name = self.current.literal.clone();
        self.advance();
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(Statement::Assign { name, value })
    }

    /// The operand of `RETURN`, `TWEET`, `RALLY` and `EXECUTIVE_ORDER`.
    fn parse_keyword_operand(&mut self) -> Option<Expression> {
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(value)
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(Statement::Expression(expr))
    }

    /// `BUILD WALL IF (condition) { ... } [ELSE { ... }]`
    fn parse_if(&mut self) -> Option<Statement> {
        self.expect_peek(TokenKind::Wall)?;
        self.expect_peek(TokenKind::If)?;
        let condition = self.parse_parenthesized_condition()?;
        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block();

        let alternative = if self.check_peek(TokenKind::Else) {
            self.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block())
        } else {
            None
        };

        Some(Statement::If {
            condition,
            consequence,
            alternative,
        })
    }

    /// `MAKE DEALS WHILE (condition) { ... }`
    fn parse_while(&mut self) -> Option<Statement> {
        self.expect_peek(TokenKind::Deals)?;
        self.expect_peek(TokenKind::While)?;
        let condition = self.parse_parenthesized_condition()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block();
        Some(Statement::While { condition, body })
    }

    /// `MAKE AMERICA GREAT AGAIN FOR (init; condition; update) { ... }`
    ///
    /// Each header clause may be empty.
    fn parse_for(&mut self) -> Option<Statement> {
        for keyword in [
            TokenKind::America,
            TokenKind::Great,
            TokenKind::Again,
            TokenKind::For,
            TokenKind::LParen,
        ] {
            self.expect_peek(keyword)?;
        }
        self.advance();

        let init = if self.check(TokenKind::Semicolon) {
            None
        } else {
            let init = self.parse_statement();
            // A declaration swallows its own `;`.
            if !self.check(TokenKind::Semicolon) {
                self.expect_peek(TokenKind::Semicolon)?;
            }
            init
        };
        self.advance();

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            let condition = self.parse_expression(Precedence::Lowest);
            self.expect_peek(TokenKind::Semicolon)?;
            condition
        };
        self.advance();

        let update = if self.check(TokenKind::RParen) {
            None
        } else {
            let update = self.parse_statement();
            self.expect_peek(TokenKind::RParen)?;
            update
        };

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block();

        Some(Statement::For(Box::new(ForLoop {
            init,
            condition,
            update,
            body,
        })))
    }

    /// `( expr )` following a keyword, leaving the current token on `)`.
    fn parse_parenthesized_condition(&mut self) -> Option<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Some(condition)
    }

    /// Parse `{ ... }` with the current token on `{`, leaving it on `}`.
    pub(crate) fn parse_block(&mut self) -> Block {
        let open = self.current.position();
        self.advance();
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.check(TokenKind::Eof) {
            match self.parse_statement() {
                Some(stmt) => statements.push(stmt),
                None => {
                    self.recover();
                    if self.check(TokenKind::RBrace) {
                        break;
                    }
                }
            }
            self.advance();
        }
        if self.check(TokenKind::Eof) {
            self.error_at(
                ErrorCode::UnexpectedToken,
                open,
                "block opened here is never closed, expected }".to_string(),
            );
        } else {
            self.closed_block = Some(self.current.position());
        }
        Block::new(statements)
    }
}
