//! Domain entities - Core business objects with identity

mod battle;
mod hero;
mod mission;

pub use battle::{BattleOutcome, BattleResult};
pub use hero::{battle_cries, level_for_xp, Hero, MAX_MANA};
pub use mission::{generate_attribute_mission, seed_missions, Mission, FIRST_HERO_MISSION};
