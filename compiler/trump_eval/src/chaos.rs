//! The language's deliberate unpredictability.
//!
//! Every random decision the interpreter makes goes through [`Chaos`], which
//! owns an injected, seedable RNG. Production seeds from entropy; tests pin
//! a seed or switch the probabilities off with [`ChaosSettings::NONE`].

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Probabilities of each chaotic behaviour, in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChaosSettings {
    /// `BUILD WALL IF` takes the other branch.
    pub condition_flip: f64,
    /// An unknown identifier reports the covfefe message.
    pub covfefe: f64,
    /// `TREMENDOUS_SORT` swaps two positions after sorting.
    pub sort_swap: f64,
}

impl ChaosSettings {
    pub const DEFAULT: ChaosSettings = ChaosSettings {
        condition_flip: 0.05,
        covfefe: 0.10,
        sort_swap: 0.10,
    };

    pub const NONE: ChaosSettings = ChaosSettings {
        condition_flip: 0.0,
        covfefe: 0.0,
        sort_swap: 0.0,
    };

    /// Every behaviour fires on every opportunity.
    pub const ALWAYS: ChaosSettings = ChaosSettings {
        condition_flip: 1.0,
        covfefe: 1.0,
        sort_swap: 1.0,
    };
}

impl Default for ChaosSettings {
    fn default() -> Self {
        ChaosSettings::DEFAULT
    }
}

pub struct Chaos {
    rng: StdRng,
    settings: ChaosSettings,
}

impl Chaos {
    pub fn from_entropy(settings: ChaosSettings) -> Self {
        Chaos {
            rng: StdRng::from_entropy(),
            settings,
        }
    }

    pub fn seeded(seed: u64, settings: ChaosSettings) -> Self {
        Chaos {
            rng: StdRng::seed_from_u64(seed),
            settings,
        }
    }

    pub fn settings(&self) -> ChaosSettings {
        self.settings
    }

    pub fn flip_condition(&mut self) -> bool {
        self.roll(self.settings.condition_flip)
    }

    pub fn covfefe(&mut self) -> bool {
        self.roll(self.settings.covfefe)
    }

    pub fn swap_after_sort(&mut self) -> bool {
        self.roll(self.settings.sort_swap)
    }

    /// A uniformly random index below `len`, which must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    // A zero probability never draws, so disabled chaos leaves the RNG untouched.
    fn roll(&mut self, probability: f64) -> bool {
        probability > 0.0 && self.rng.gen::<f64>() < probability
    }
}

#[cfg(test)]
mod tests;
