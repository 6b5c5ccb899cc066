//! Trump Eval - tree-walking interpreter for the TRUMP language.
//!
//! # Architecture
//!
//! - `Object`: the closed set of runtime values
//! - `Environment`: shared, parent-linked scopes; closures capture by handle
//! - `Builtins`: the native function table, consulted before any scope
//! - `Chaos`: the injected random source behind the language's surprises
//! - `Interpreter`: recursive evaluation of a parsed `Program`
//!
//! ```text
//! let output = trump_parse::parse(source);
//! let mut interpreter = Interpreter::builder().seed(45).build();
//! let result = interpreter.eval_program(&output.program);
//! ```

mod builtins;
mod chaos;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use builtins::{Builtin, BuiltinFn, Builtins};
pub use chaos::{Chaos, ChaosSettings};
pub use environment::{AssignError, Environment, LocalScope, Scope};
pub use interpreter::{
    Interpreter, InterpreterBuilder, ScopedInterpreter, DEFAULT_LOOP_LIMIT,
    DEFAULT_MAX_CALL_DEPTH,
};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{Function, Object, BEST_NUMBER, FALSE, NULL, TRUE};

/// Result of evaluating one node. `Err` carries a sentinel:
/// `Object::ReturnValue` or `Object::Error`.
pub type EvalResult = Result<Object, Object>;

#[cfg(test)]
mod tests;
