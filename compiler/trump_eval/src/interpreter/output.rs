//! The three output statements.

use trump_ir::Expression;

use super::Interpreter;
use crate::value::NULL;
use crate::EvalResult;

/// Endings `RALLY` picks from.
pub(crate) const RALLY_EMPHASES: &[&str] = &[
    ", BELIEVE ME!",
    " - TREMENDOUS!",
    ", IT'S TRUE!",
    " - THE BEST!",
    ", FOLKS!",
    " - BIGLY!",
    ", OKAY?",
    " - SO TRUE!",
    ", THAT I CAN TELL YOU!",
    " - EVERYBODY KNOWS IT!",
];

impl Interpreter {
    /// `TWEET expr`: plain print.
    pub(super) fn eval_tweet(&mut self, value: &Expression) -> EvalResult {
        let value = self.eval_expression(value)?;
        self.print_handler
            .println(&format!("🐦 {}", value.inspect()));
        Ok(NULL)
    }

    /// `RALLY expr`: uppercased, with a random emphasis.
    pub(super) fn eval_rally(&mut self, value: &Expression) -> EvalResult {
        let value = self.eval_expression(value)?;
        let emphasis = self.chaos.pick(RALLY_EMPHASES).copied().unwrap_or_default();
        self.print_handler.println(&format!(
            "🔊 {}{emphasis} 👐",
            value.inspect().to_uppercase()
        ));
        Ok(NULL)
    }

    /// `EXECUTIVE_ORDER expr`: goes to the error channel.
    pub(super) fn eval_executive_order(&mut self, value: &Expression) -> EvalResult {
        let value = self.eval_expression(value)?;
        self.print_handler
            .eprintln(&format!("⚠️ EXECUTIVE ORDER: {} ⚠️", value.inspect()));
        Ok(NULL)
    }
}
