//! Function application.

use tracing::trace;

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::not_a_function;
use crate::value::{Function, Object, NULL};
use crate::EvalResult;

impl Interpreter {
    /// Call `callee` with already-evaluated arguments.
    pub(crate) fn apply_function(&mut self, callee: &Object, args: &[Object]) -> EvalResult {
        match callee {
            Object::Function(function) => self.call_user_function(function, args),
            Object::Builtin(builtin) => {
                trace!(name = builtin.name(), args = args.len(), "builtin call");
                match builtin.call(args, &mut self.chaos) {
                    error @ Object::Error(_) => Err(error),
                    value => Ok(value),
                }
            }
            other => Err(not_a_function(other.type_name())),
        }
    }

    /// Parameters bind positionally in a fresh scope under the captured
    /// one. Missing arguments bind to Null; extra ones are ignored.
    fn call_user_function(&mut self, function: &Function, args: &[Object]) -> EvalResult {
        let mut env = Environment::enclosed(function.env.clone());
        for (i, parameter) in function.literal.parameters.iter().enumerate() {
            env.define(parameter.clone(), args.get(i).cloned().unwrap_or(NULL));
        }
        trace!(
            name = function.name().unwrap_or("<anonymous>"),
            args = args.len(),
            depth = self.call_depth(),
            "call"
        );

        let mut frame = self.enter_call(env)?;
        match frame.eval_block(&function.literal.body) {
            Object::ReturnValue(value) => Ok(*value),
            error @ Object::Error(_) => Err(error),
            value => Ok(value),
        }
    }
}
