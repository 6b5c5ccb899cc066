//! Source printer for the AST.
//!
//! Output is valid TRUMP source: simple statements end in `;`, compound
//! statements end in their block, and program statements are separated by
//! newlines. Infix, prefix and index expressions are fully parenthesised.

use std::fmt::{self, Display, Formatter};

use super::{Block, Expression, ForLoop, FunctionLiteral, Program, Rating, Statement};

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        for stmt in &self.statements {
            write!(f, "{stmt} ")?;
        }
        f.write_str("}")
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_statement(f, self)?;
        if self.is_compound() {
            Ok(())
        } else {
            f.write_str(";")
        }
    }
}

/// Print a statement without its `;` terminator (for `FOR` headers).
fn write_statement(f: &mut Formatter<'_>, stmt: &Statement) -> fmt::Result {
    match stmt {
        Statement::Let {
            keyword,
            name,
            value,
        } => write!(f, "{} {name} = {value}", keyword.as_str()),
        Statement::Assign { name, value } => write!(f, "{name} = {value}"),
        Statement::Return(value) => write!(f, "RETURN {value}"),
        // A bare `BUILD` opening a statement reads as `BUILD WALL IF`.
        Statement::Expression(expr @ Expression::Identifier(name)) if name == "BUILD" => {
            write!(f, "({expr})")
        }
        Statement::Expression(expr) => write!(f, "{expr}"),
        Statement::Block(block) => write!(f, "{block}"),
        Statement::If {
            condition,
            consequence,
            alternative,
        } => {
            write!(f, "BUILD WALL IF ({condition}) {consequence}")?;
            if let Some(alt) = alternative {
                write!(f, " ELSE {alt}")?;
            }
            Ok(())
        }
        Statement::While { condition, body } => {
            write!(f, "MAKE DEALS WHILE ({condition}) {body}")
        }
        Statement::For(for_loop) => write!(f, "{for_loop}"),
        Statement::Tweet(value) => write!(f, "TWEET {value}"),
        Statement::Rally(value) => write!(f, "RALLY {value}"),
        Statement::ExecutiveOrder(value) => write!(f, "EXECUTIVE_ORDER {value}"),
    }
}

impl Display for ForLoop {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("MAKE AMERICA GREAT AGAIN FOR (")?;
        if let Some(init) = &self.init {
            write_statement(f, init)?;
        }
        f.write_str("; ")?;
        if let Some(condition) = &self.condition {
            write!(f, "{condition}")?;
        }
        f.write_str("; ")?;
        if let Some(update) = &self.update {
            write_statement(f, update)?;
        }
        write!(f, ") {}", self.body)
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FUNCTION({})", self.parameters.join(", "))?;
        if let Some(rating) = &self.rating {
            write!(f, " RATED {rating}")?;
        }
        write!(f, " {}", self.body)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(name) => f.write_str(name),
            Expression::Integer(value) => write!(f, "{value}"),
            Expression::Float { literal, .. } => f.write_str(literal),
            Expression::String(value) => write!(f, "\"{value}\""),
            Expression::Boolean(true) => f.write_str("WINNING"),
            Expression::Boolean(false) => f.write_str("LOSER"),
            Expression::Function(literal) => write!(f, "{literal}"),
            Expression::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Expression::Infix {
                left,
                operator,
                right,
            } => write!(f, "({left} {operator} {right})"),
            Expression::Array(elements) => {
                f.write_str("[")?;
                write_list(f, elements)?;
                f.write_str("]")
            }
            Expression::Index { left, index } => write!(f, "({left}[{index}])"),
            Expression::Call {
                function,
                arguments,
            } => {
                write!(f, "{function}(")?;
                write_list(f, arguments)?;
                f.write_str(")")
            }
        }
    }
}

fn write_list(f: &mut Formatter<'_>, items: &[Expression]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
