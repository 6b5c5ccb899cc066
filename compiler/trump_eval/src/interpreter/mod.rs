//! Tree-walking interpreter for TRUMP.
//!
//! Evaluation is a pair of recursive dispatchers, one per AST sum type:
//! [`Interpreter::eval_statement`] and [`Interpreter::eval_expression`].
//! Helper modules split out the larger node kinds:
//!
//! - `control`: conditionals and the two loop forms
//! - `function_call`: user function and built-in application
//! - `output`: `TWEET`, `RALLY`, `EXECUTIVE_ORDER`
//!
//! # Sentinels
//!
//! `ReturnValue` and `Error` travel in the `Err` side of [`EvalResult`], so
//! `?` stops a statement sequence the moment either appears. A function call
//! turns a `ReturnValue` back into an ordinary value; the program boundary
//! does the same and hands errors back as plain `Object::Error` values.

mod builder;
mod control;
mod function_call;
mod output;
mod scope_guard;

pub use builder::{InterpreterBuilder, DEFAULT_LOOP_LIMIT, DEFAULT_MAX_CALL_DEPTH};
pub use scope_guard::ScopedInterpreter;

use std::rc::Rc;

use tracing::debug;
use trump_ir::{Block, Expression, Program, Statement};
use trump_stack::ensure_sufficient_stack;

use crate::builtins::Builtins;
use crate::chaos::Chaos;
use crate::environment::{AssignError, Environment};
use crate::errors::{
    array_index_not_integer, covfefe, identifier_not_found, index_not_supported,
};
use crate::print_handler::SharedPrintHandler;
use crate::value::{Function, Object, NULL};
use crate::{evaluate_binary, evaluate_unary, EvalResult};

/// One evaluation run: a top-level scope, the built-in table, the random
/// source and where output goes.
pub struct Interpreter {
    pub(crate) env: Environment,
    builtins: Builtins,
    pub(crate) chaos: Chaos,
    print_handler: SharedPrintHandler,
    loop_limit: usize,
    max_call_depth: Option<usize>,
    call_depth: usize,
}

impl Interpreter {
    /// An interpreter with default settings: entropy-seeded chaos, stdout
    /// output, the default loop and recursion limits.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Run a whole program.
    ///
    /// Returns the value of the last statement executed, the value of a
    /// top-level `RETURN`, or the first runtime error. An empty program
    /// yields Null.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn eval_program(&mut self, program: &Program) -> Object {
        let result = match self.eval_statements(&program.statements) {
            Ok(value) => value,
            Err(Object::ReturnValue(value)) => *value,
            Err(error) => error,
        };
        debug!(result = result.type_name(), "program finished");
        result
    }

    /// Run a block in the current scope, handing sentinels back unchanged:
    /// a `RETURN` inside yields `Object::ReturnValue`.
    pub fn eval_block(&mut self, block: &Block) -> Object {
        self.eval_statements(&block.statements)
            .unwrap_or_else(|sentinel| sentinel)
    }

    /// Current binding of `name`, ignoring built-ins.
    pub fn lookup(&self, name: &str) -> Option<Object> {
        self.env.lookup(name)
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn chaos(&self) -> &Chaos {
        &self.chaos
    }

    pub(crate) fn eval_statements(&mut self, statements: &[Statement]) -> EvalResult {
        let mut result = NULL;
        for statement in statements {
            result = self.eval_statement(statement)?;
        }
        Ok(result)
    }

    pub(crate) fn eval_statement(&mut self, statement: &Statement) -> EvalResult {
        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval_expression(value)?;
                self.env.define(name.clone(), value);
                Ok(NULL)
            }
            Statement::Assign { name, value } => {
                let value = self.eval_expression(value)?;
                self.env
                    .assign(name, value)
                    .map_err(|AssignError::Undefined| identifier_not_found(name))?;
                Ok(NULL)
            }
            Statement::Return(value) => {
                let value = self.eval_expression(value)?;
                Err(Object::ReturnValue(Box::new(value)))
            }
            Statement::Expression(expr) => self.eval_expression(expr),
            Statement::Block(block) => self.eval_statements(&block.statements),
            Statement::If {
                condition,
                consequence,
                alternative,
            } => self.eval_if(condition, consequence, alternative.as_ref()),
            Statement::While { condition, body } => self.eval_while(condition, body),
            Statement::For(for_loop) => self.eval_for(for_loop),
            Statement::Tweet(value) => self.eval_tweet(value),
            Statement::Rally(value) => self.eval_rally(value),
            Statement::ExecutiveOrder(value) => self.eval_executive_order(value),
        }
    }

    pub(crate) fn eval_expression(&mut self, expr: &Expression) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr))
    }

    fn eval_expression_inner(&mut self, expr: &Expression) -> EvalResult {
        match expr {
            Expression::Identifier(name) => self.eval_identifier(name),
            Expression::Integer(value) => Ok(Object::Integer(*value)),
            Expression::Float { value, .. } => Ok(Object::Float(*value)),
            Expression::String(text) => Ok(Object::string(text.as_str())),
            Expression::Boolean(value) => Ok(Object::Boolean(*value)),
            Expression::Function(literal) => Ok(Object::Function(Rc::new(Function::new(
                Rc::clone(literal),
                self.env.current_scope(),
            )))),
            Expression::Prefix { operator, right } => {
                let right = self.eval_expression(right)?;
                evaluate_unary(*operator, &right)
            }
            Expression::Infix {
                left,
                operator,
                right,
            } => {
                let left = self.eval_expression(left)?;
                let right = self.eval_expression(right)?;
                evaluate_binary(&left, *operator, &right)
            }
            Expression::Array(elements) => Ok(Object::array(self.eval_expressions(elements)?)),
            Expression::Index { left, index } => {
                let left = self.eval_expression(left)?;
                let index = self.eval_expression(index)?;
                eval_index(&left, &index)
            }
            Expression::Call {
                function,
                arguments,
            } => {
                let callee = self.eval_expression(function)?;
                let args = self.eval_expressions(arguments)?;
                self.apply_function(&callee, &args)
            }
        }
    }

    /// Evaluate left to right, stopping at the first failure.
    fn eval_expressions(&mut self, exprs: &[Expression]) -> Result<Vec<Object>, Object> {
        exprs.iter().map(|e| self.eval_expression(e)).collect()
    }

    /// Built-ins first, then the scope chain.
    fn eval_identifier(&mut self, name: &str) -> EvalResult {
        if let Some(builtin) = self.builtins.get(name) {
            return Ok(Object::Builtin(builtin));
        }
        if let Some(value) = self.env.lookup(name) {
            return Ok(value);
        }
        if self.chaos.covfefe() {
            return Err(covfefe(name));
        }
        Err(identifier_not_found(name))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Array indexing. Out-of-range indices, negative ones included, give Null.
fn eval_index(left: &Object, index: &Object) -> EvalResult {
    match (left, index) {
        (Object::Array(elements), Object::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(NULL)),
        (Object::Array(_), other) => Err(array_index_not_integer(other.type_name())),
        (other, _) => Err(index_not_supported(other.type_name())),
    }
}
