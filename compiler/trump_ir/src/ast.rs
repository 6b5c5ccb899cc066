//! Abstract syntax tree.
//!
//! The tree is built once by the parser and never mutated. Statements
//! whose required parts failed to parse are dropped by the parser, so every
//! node here is complete; the only optional pieces are the ones the grammar
//! makes optional (an `ELSE` branch, a `RATED` clause, the three clauses of a
//! `FOR` header when they could not be parsed).

use std::rc::Rc;

mod operators;
mod printer;

pub use operators::{InfixOp, PrefixOp};

/// Root of a parsed source file.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

/// The keyword that introduced a declaration.
///
/// Both keywords behave identically; the distinction is kept so the
/// printer reproduces what the author wrote.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LetKeyword {
    Yuge,
    Tremendous,
}

impl LetKeyword {
    pub const fn as_str(self) -> &'static str {
        match self {
            LetKeyword::Yuge => "YUGE",
            LetKeyword::Tremendous => "TREMENDOUS",
        }
    }
}

/// A `{ ... }` statement sequence.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Block { statements }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    /// `YUGE name = value` / `TREMENDOUS name = value`
    Let {
        keyword: LetKeyword,
        name: String,
        value: Expression,
    },
    /// `name = value`, rebinding an existing variable.
    Assign { name: String, value: Expression },
    Return(Expression),
    Expression(Expression),
    Block(Block),
    /// `BUILD WALL IF (condition) { ... } ELSE { ... }`
    If {
        condition: Expression,
        consequence: Block,
        alternative: Option<Block>,
    },
    /// `MAKE DEALS WHILE (condition) { ... }`
    While { condition: Expression, body: Block },
    /// `MAKE AMERICA GREAT AGAIN FOR (init; condition; update) { ... }`
    For(Box<ForLoop>),
    Tweet(Expression),
    Rally(Expression),
    ExecutiveOrder(Expression),
}

impl Statement {
    /// Compound statements end in a block and take no `;` when printed.
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            Statement::Block(_) | Statement::If { .. } | Statement::While { .. } | Statement::For(_)
        )
    }
}

/// Header and body of a counted loop.
#[derive(Clone, Debug, PartialEq)]
pub struct ForLoop {
    pub init: Option<Statement>,
    pub condition: Option<Expression>,
    pub update: Option<Statement>,
    pub body: Block,
}

/// The decorative `RATED` clause of a function literal, kept as source text.
///
/// String ratings keep their quotes and fractional ratings keep their
/// slash, so `RATED "BEST"` and `RATED 10/10` print back unchanged.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rating(String);

impl Rating {
    pub fn new(text: impl Into<String>) -> Self {
        Rating(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `FUNCTION(params) [RATED r] { body }`
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionLiteral {
    /// Set when declared with `YUGE FUNCTION name(...)`.
    pub name: Option<String>,
    pub parameters: Vec<String>,
    pub rating: Option<Rating>,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Identifier(String),
    Integer(i64),
    /// A float with the exact text it was written as.
    Float { value: f64, literal: String },
    /// Raw string contents between the quotes; escapes are not decoded.
    String(String),
    Boolean(bool),
    Function(Rc<FunctionLiteral>),
    Prefix {
        operator: PrefixOp,
        right: Box<Expression>,
    },
    Infix {
        left: Box<Expression>,
        operator: InfixOp,
        right: Box<Expression>,
    },
    Array(Vec<Expression>),
    Index {
        left: Box<Expression>,
        index: Box<Expression>,
    },
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    pub fn function(literal: FunctionLiteral) -> Self {
        Expression::Function(Rc::new(literal))
    }

    pub fn prefix(operator: PrefixOp, right: Expression) -> Self {
        Expression::Prefix {
            operator,
            right: Box::new(right),
        }
    }

    pub fn infix(left: Expression, operator: InfixOp, right: Expression) -> Self {
        Expression::Infix {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn index(left: Expression, index: Expression) -> Self {
        Expression::Index {
            left: Box::new(left),
            index: Box::new(index),
        }
    }

    pub fn call(function: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call {
            function: Box::new(function),
            arguments,
        }
    }
}

#[cfg(test)]
mod tests;
