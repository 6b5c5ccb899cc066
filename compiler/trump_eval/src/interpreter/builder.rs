//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::builtins::Builtins;
use crate::chaos::{Chaos, ChaosSettings};
use crate::environment::Environment;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Iterations a single `WHILE` or `FOR` may run before it is reported as
/// a probable infinite loop.
pub const DEFAULT_LOOP_LIMIT: usize = 10_000;

/// Nested user-function calls allowed before evaluation is abandoned.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Builder for creating Interpreter instances with various configurations.
///
/// Defaults: entropy-seeded RNG, [`ChaosSettings::DEFAULT`], stdout output,
/// [`DEFAULT_LOOP_LIMIT`] and [`DEFAULT_MAX_CALL_DEPTH`].
pub struct InterpreterBuilder {
    seed: Option<u64>,
    chaos: ChaosSettings,
    print_handler: Option<SharedPrintHandler>,
    loop_limit: usize,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            seed: None,
            chaos: ChaosSettings::DEFAULT,
            print_handler: None,
            loop_limit: DEFAULT_LOOP_LIMIT,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Seed the random source, making every chaotic decision reproducible.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed only when `seed` is `Some`.
    #[must_use]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn chaos(mut self, settings: ChaosSettings) -> Self {
        self.chaos = settings;
        self
    }

    /// Switch every chaotic behaviour off.
    #[must_use]
    pub fn no_chaos(self) -> Self {
        self.chaos(ChaosSettings::NONE)
    }

    /// Set the print handler for `TWEET`, `RALLY` and `EXECUTIVE_ORDER`.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn loop_limit(mut self, limit: usize) -> Self {
        self.loop_limit = limit;
        self
    }

    /// `None` removes the limit; deep recursion then only stops when memory
    /// runs out.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        let chaos = match self.seed {
            Some(seed) => Chaos::seeded(seed, self.chaos),
            None => Chaos::from_entropy(self.chaos),
        };
        Interpreter {
            env: Environment::new(),
            builtins: Builtins::new(),
            chaos,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            loop_limit: self.loop_limit,
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
