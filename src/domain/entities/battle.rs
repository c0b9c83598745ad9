//! Battle result - the outcome of one arena fight

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::HeroId;

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BattleOutcome {
    Victory { winner: HeroId },
    /// Equal health when the turn cap was reached
    Draw,
}

impl BattleOutcome {
    pub fn winner(&self) -> Option<HeroId> {
        match self {
            Self::Victory { winner } => Some(*winner),
            Self::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Self::Draw)
    }
}

/// Full record of a finished battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    /// Side A first, side B second
    pub combatants: [HeroId; 2],
    pub outcome: BattleOutcome,
    pub log: Vec<String>,
    /// Raw health, may be negative
    pub final_health: [i32; 2],
    pub final_mana: [i32; 2],
    /// Turns played
    pub turns: u32,
}

impl BattleResult {
    pub fn winner_id(&self) -> Option<HeroId> {
        self.outcome.winner()
    }

    /// Health as shown to players, never below zero
    pub fn displayed_health(&self) -> [i32; 2] {
        [self.final_health[0].max(0), self.final_health[1].max(0)]
    }
}
