//! Random sources for combat and content generation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform rolls in `[0, 1)`
pub trait RollSource {
    fn next_roll(&mut self) -> f64;
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn next_roll(&mut self) -> f64 {
        (**self).next_roll()
    }
}

/// Rolls backed by a standard RNG
#[derive(Debug, Clone)]
pub struct RandomRolls {
    rng: StdRng,
}

impl RandomRolls {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Access the underlying RNG for non-roll draws (mission generation, stories)
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl RollSource for RandomRolls {
    fn next_roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// A fixed sequence of rolls, repeated from the start once exhausted
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    rolls: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRolls {
    pub fn new(rolls: impl Into<Vec<f64>>) -> Self {
        Self {
            rolls: rolls.into(),
            cursor: 0,
        }
    }

    /// Number of rolls handed out so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
impl RollSource for ScriptedRolls {
    fn next_roll(&mut self) -> f64 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll
    }
}
