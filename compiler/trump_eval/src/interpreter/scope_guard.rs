//! RAII guards for Interpreter environment management.
//!
//! Two guards, both restoring the environment when dropped, including
//! during unwinding and on early `?` returns:
//!
//! - [`ScopedInterpreter`] pushes one scope and pops it again (`FOR` loops).
//! - [`CallFrame`] swaps in a call environment rooted at a closure's
//!   captured scope and puts the caller's environment back.
//!
//! Both implement `Deref`/`DerefMut` to `Interpreter`, so the guarded code
//! calls interpreter methods directly on the guard.
//!
//! ```text
//! let mut scoped = interpreter.scoped();
//! scoped.env.define(name, value);
//! scoped.eval_statements(body)?;
//! // scope popped here
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::recursion_limit_exceeded;
use crate::value::Object;

/// Guard that pops the scope it pushed.
pub struct ScopedInterpreter<'a> {
    interpreter: &'a mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

/// Guard for one user-function call.
pub struct CallFrame<'a> {
    interpreter: &'a mut Interpreter,
    caller_env: Option<Environment>,
}

impl Drop for CallFrame<'_> {
    fn drop(&mut self) {
        if let Some(env) = self.caller_env.take() {
            self.interpreter.env = env;
        }
        self.interpreter.call_depth = self.interpreter.call_depth.saturating_sub(1);
    }
}

impl Deref for CallFrame<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for CallFrame<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a scope that is popped when the guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Enter a call with `env` as the active environment.
    ///
    /// Fails with a runtime error, leaving everything untouched, when the
    /// call depth limit is reached.
    pub(crate) fn enter_call(&mut self, env: Environment) -> Result<CallFrame<'_>, Object> {
        if let Some(limit) = self.max_call_depth {
            if self.call_depth >= limit {
                return Err(recursion_limit_exceeded(limit));
            }
        }
        self.call_depth += 1;
        let caller_env = std::mem::replace(&mut self.env, env);
        Ok(CallFrame {
            interpreter: self,
            caller_env: Some(caller_env),
        })
    }

    /// Current user-function nesting.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }
}
