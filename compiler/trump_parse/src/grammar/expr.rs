//! Expression productions (Pratt loop, prefix and infix handlers).

use trump_diagnostic::ErrorCode;
use trump_ir::{Expression, FunctionLiteral, Rating, TokenKind};
use trump_stack::ensure_sufficient_stack;

use crate::{Parser, Precedence};

impl Parser {
    /// Parse an expression whose operators bind tighter than `precedence`.
    ///
    /// Starts on the first token of the expression and leaves the current
    /// token on its last token.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        ensure_sufficient_stack(|| {
            let mut left = self.parse_prefix()?;
            while !self.check_peek(TokenKind::Semicolon) && precedence < Precedence::of(self.peek.kind)
            {
                self.advance();
                left = self.parse_infix(left)?;
            }
            Some(left)
        })
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.kind {
            TokenKind::Ident => Some(Expression::Identifier(self.current.literal.clone())),
            TokenKind::Build => Some(Expression::Identifier(TokenKind::Build.as_str().to_string())),
            TokenKind::Int => self.parse_integer(),
            TokenKind::Float => self.parse_float(),
            TokenKind::String => Some(Expression::String(self.current.literal.clone())),
            TokenKind::Winning => Some(Expression::Boolean(true)),
            TokenKind::Loser => Some(Expression::Boolean(false)),
            TokenKind::Bang | TokenKind::Minus => {
                let operator = self.match_prefix_op()?;
                self.advance();
                let right = self.parse_expression(Precedence::Prefix)?;
                Some(Expression::prefix(operator, right))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression(Precedence::Lowest)?;
                self.expect_peek(TokenKind::RParen)?;
                Some(inner)
            }
            TokenKind::LBracket => self
                .parse_expression_list(TokenKind::RBracket)
                .map(Expression::Array),
            TokenKind::Function => {
                self.expect_peek(TokenKind::LParen)?;
                self.parse_function_tail(None).map(Expression::function)
            }
            kind => {
                let message = format!("no prefix parse function for {kind} found");
                self.error_at(ErrorCode::UnexpectedToken, self.current.position(), message);
                None
            }
        }
    }

    /// Parse the operator at the current token with `left` as its left operand.
    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match self.current.kind {
            TokenKind::LParen => {
                let arguments = self.parse_expression_list(TokenKind::RParen)?;
                Some(Expression::call(left, arguments))
            }
            TokenKind::LBracket => {
                self.advance();
                let index = self.parse_expression(Precedence::Lowest)?;
                self.expect_peek(TokenKind::RBracket)?;
                Some(Expression::index(left, index))
            }
            kind => {
                let operator = self.match_infix_op()?;
                let precedence = Precedence::of(kind);
                self.advance();
                let right = self.parse_expression(precedence)?;
                Some(Expression::infix(left, operator, right))
            }
        }
    }

    fn parse_integer(&mut self) -> Option<Expression> {
        if let Ok(value) = self.current.literal.parse::<i64>() {
            return Some(Expression::Integer(value));
        }
        let message = format!("could not parse {:?} as integer", self.current.literal);
        self.error_at(ErrorCode::UnexpectedToken, self.current.position(), message);
        None
    }

    fn parse_float(&mut self) -> Option<Expression> {
        let literal = self.current.literal.clone();
        if let Ok(value) = literal.parse::<f64>() {
            return Some(Expression::Float { value, literal });
        }
        let message = format!("could not parse {literal:?} as float");
        self.error_at(ErrorCode::UnexpectedToken, self.current.position(), message);
        None
    }

    /// Comma-separated expressions up to `end`, with the current token on
    /// the opening delimiter. Leaves the current token on `end`.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut items = Vec::new();
        if self.check_peek(end) {
            self.advance();
            return Some(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.check_peek(TokenKind::Comma) {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Some(items)
    }

    /// Everything after `FUNCTION [name]`, with the current token on `(`.
    pub(crate) fn parse_function_tail(&mut self, name: Option<String>) -> Option<FunctionLiteral> {
        let parameters = self.parse_parameters()?;

        let rating = if self.check_peek(TokenKind::Rated) {
            self.advance();
            Some(self.parse_rating()?)
        } else {
            None
        };

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block();

        Some(FunctionLiteral {
            name,
            parameters,
            rating,
            body,
        })
    }

    fn parse_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();
        if self.check_peek(TokenKind::RParen) {
            self.advance();
            return Some(parameters);
        }

        parameters.push(self.expect_peek_ident("parameter name")?);
        while self.check_peek(TokenKind::Comma) {
            self.advance();
            parameters.push(self.expect_peek_ident("parameter name")?);
        }

        self.expect_peek(TokenKind::RParen)?;
        Some(parameters)
    }

    /// `RATED 10`, `RATED 9.5`, `RATED "BEST"` or `RATED 10/10`, with the
    /// current token on `RATED`.
    fn parse_rating(&mut self) -> Option<Rating> {
        let mut text = self.expect_rating_literal()?;
        if self.check_peek(TokenKind::Slash) {
            self.advance();
            text.push('/');
            text.push_str(&self.expect_rating_literal()?);
        }
        Some(Rating::new(text))
    }

    fn expect_rating_literal(&mut self) -> Option<String> {
        match self.peek.kind {
            TokenKind::Int | TokenKind::Float => {
                self.advance();
                Some(self.current.literal.clone())
            }
            TokenKind::String => {
                self.advance();
                Some(format!("\"{}\"", self.current.literal))
            }
            _ => {
                self.peek_error("a rating value (number or string)");
                None
            }
        }
    }
}
