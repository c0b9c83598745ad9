//! Application services - Use case implementations
//!
//! Each service follows hexagonal architecture principles, accepting
//! repository ports and returning domain entities.

pub mod battle_service;
pub mod hero_service;
pub mod mission_service;

pub use battle_service::{BattleReport, BattleService, BattleServiceImpl};
pub use hero_service::{CreateHeroRequest, HeroService, HeroServiceImpl, UpdateHeroRequest};
pub use mission_service::{MissionService, MissionServiceImpl};

use crate::domain::services::RandomRolls;

/// Random source for one use case invocation, reproducible when seeded
pub(crate) fn new_rolls(seed: Option<u64>) -> RandomRolls {
    seed.map(RandomRolls::seeded)
        .unwrap_or_else(RandomRolls::from_entropy)
}
