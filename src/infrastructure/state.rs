//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{BattleServiceImpl, HeroServiceImpl, MissionServiceImpl};
use crate::domain::value_objects::KeywordThresholdParser;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::JsonRepository;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    // Application services
    pub hero_service: HeroServiceImpl,
    pub mission_service: MissionServiceImpl,
    pub battle_service: BattleServiceImpl,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let repository = JsonRepository::open(&config.data_path).await?;
        Ok(Self::with_repository(config, repository))
    }

    /// Wire the services over an already opened repository
    pub fn with_repository(config: AppConfig, repository: JsonRepository) -> Self {
        let heroes = Arc::new(repository.heroes());
        let missions = Arc::new(repository.missions());
        let seed = config.rng_seed;

        Self {
            hero_service: HeroServiceImpl::new(heroes.clone(), missions.clone(), seed),
            mission_service: MissionServiceImpl::new(
                missions.clone(),
                Box::new(KeywordThresholdParser),
                seed,
            ),
            battle_service: BattleServiceImpl::new(
                heroes,
                missions,
                Box::new(KeywordThresholdParser),
                seed,
            ),
            config,
        }
    }
}
