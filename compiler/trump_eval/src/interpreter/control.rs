//! Conditionals and loops.

use tracing::trace;
use trump_ir::{Block, Expression, ForLoop};

use super::Interpreter;
use crate::errors::{loop_limit_exceeded, LoopKind};
use crate::value::{Object, NULL};
use crate::EvalResult;

impl Interpreter {
    /// `BUILD WALL IF`. The chosen branch may be flipped by chaos.
    pub(super) fn eval_if(
        &mut self,
        condition: &Expression,
        consequence: &Block,
        alternative: Option<&Block>,
    ) -> EvalResult {
        let mut taken = self.eval_expression(condition)?.is_truthy();
        if self.chaos.flip_condition() {
            trace!(was = taken, "condition flipped");
            taken = !taken;
        }
        if taken {
            self.eval_statements(&consequence.statements)
        } else if let Some(alternative) = alternative {
            self.eval_statements(&alternative.statements)
        } else {
            Ok(NULL)
        }
    }

    /// `MAKE DEALS WHILE`. Yields the last body value, Null if the body
    /// never ran.
    pub(super) fn eval_while(&mut self, condition: &Expression, body: &Block) -> EvalResult {
        let mut result = NULL;
        let mut iterations = 0usize;
        while self.eval_expression(condition)?.is_truthy() {
            if iterations == self.loop_limit {
                trace!(iterations, "while loop hit the iteration cap");
                return Err(loop_limit_exceeded(LoopKind::While));
            }
            iterations += 1;
            result = self.eval_statements(&body.statements)?;
        }
        Ok(result)
    }

    /// `MAKE AMERICA GREAT AGAIN FOR`. The header and body share one scope
    /// nested under the current one; it is discarded on every exit path.
    pub(super) fn eval_for(&mut self, for_loop: &ForLoop) -> EvalResult {
        let mut scoped = self.scoped();
        scoped.run_for(for_loop)
    }

    fn run_for(&mut self, for_loop: &ForLoop) -> EvalResult {
        if let Some(init) = &for_loop.init {
            self.eval_statement(init)?;
        }
        let mut result = NULL;
        let mut iterations = 0usize;
        while self.for_condition(for_loop.condition.as_ref())? {
            if iterations == self.loop_limit {
                trace!(iterations, "for loop hit the iteration cap");
                return Err(loop_limit_exceeded(LoopKind::For));
            }
            iterations += 1;
            result = self.eval_statements(&for_loop.body.statements)?;
            if let Some(update) = &for_loop.update {
                self.eval_statement(update)?;
            }
        }
        Ok(result)
    }

    /// A missing condition loops until the iteration cap.
    fn for_condition(&mut self, condition: Option<&Expression>) -> Result<bool, Object> {
        match condition {
            Some(condition) => Ok(self.eval_expression(condition)?.is_truthy()),
            None => Ok(true),
        }
    }
}
