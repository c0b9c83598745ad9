//! Battle Service - Runs arena battles between stored heroes
//!
//! Loads both combatants, posts a fresh attribute mission for the arena, runs
//! the combat engine, and on a victory applies and persists the winner's
//! rewards. Draws grant no rewards.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::application::ports::outbound::{HeroRepositoryPort, MissionRepositoryPort};
use crate::application::services::new_rolls;
use crate::domain::entities::{generate_attribute_mission, BattleResult, Hero, Mission};
use crate::domain::services::{apply_victory, run_battle, CombatError, RewardError};
use crate::domain::value_objects::{HeroId, MissionId, RequirementParser};

#[derive(Debug, thiserror::Error)]
pub enum BattleError {
    #[error("A hero cannot battle itself")]
    SameHero,
    #[error("Hero not found: {0}")]
    HeroNotFound(HeroId),
    #[error(transparent)]
    Combat(#[from] CombatError),
    #[error(transparent)]
    Reward(#[from] RewardError),
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

/// Everything the arena reports after a battle
#[derive(Debug, Clone)]
pub struct BattleReport {
    pub result: BattleResult,
    /// Mission posted when the battle was set up
    pub generated_mission: Mission,
    /// Winner after rewards; `None` on a draw
    pub winner: Option<Hero>,
    pub completed_mission: Option<MissionId>,
    pub leveled_up: bool,
    /// Engine log followed by any reward lines
    pub log: Vec<String>,
}

/// Battle service trait defining the arena use case
#[async_trait]
pub trait BattleService: Send + Sync {
    /// Fight two stored heroes and persist the outcome
    async fn start_battle(&self, a: HeroId, b: HeroId) -> Result<BattleReport, BattleError>;
}

/// Default implementation of BattleService over the hero and mission ports
pub struct BattleServiceImpl {
    heroes: Arc<dyn HeroRepositoryPort>,
    missions: Arc<dyn MissionRepositoryPort>,
    parser: Box<dyn RequirementParser>,
    seed: Option<u64>,
}

impl BattleServiceImpl {
    /// `parser` extracts the requirement of the mission posted for each battle
    pub fn new(
        heroes: Arc<dyn HeroRepositoryPort>,
        missions: Arc<dyn MissionRepositoryPort>,
        parser: Box<dyn RequirementParser>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            heroes,
            missions,
            parser,
            seed,
        }
    }

    async fn load(&self, id: HeroId) -> Result<Hero, BattleError> {
        self.heroes
            .get(id)
            .await?
            .ok_or(BattleError::HeroNotFound(id))
    }
}

#[async_trait]
impl BattleService for BattleServiceImpl {
    #[instrument(skip(self))]
    async fn start_battle(&self, a: HeroId, b: HeroId) -> Result<BattleReport, BattleError> {
        if a == b {
            return Err(BattleError::SameHero);
        }
        let first = self.load(a).await?;
        let second = self.load(b).await?;

        let mut rolls = new_rolls(self.seed);
        let generated_mission = generate_attribute_mission(rolls.rng(), &*self.parser);
        self.missions.add(&generated_mission).await?;
        info!(
            mission_id = %generated_mission.id,
            "Arena mission posted: {}", generated_mission.description
        );

        let result = run_battle(&first, &second, &mut rolls)?;
        let mut log = result.log.clone();

        let Some(winner_id) = result.winner_id() else {
            info!(turns = result.turns, "Battle ended in a draw");
            return Ok(BattleReport {
                result,
                generated_mission,
                winner: None,
                completed_mission: None,
                leveled_up: false,
                log,
            });
        };

        let winner = if winner_id == first.id { &first } else { &second };
        let now = Utc::now();
        let missions = self.missions.list().await?;
        let rewards = apply_victory(winner, &result, &missions, now)?;

        self.heroes.save(&rewards.hero).await?;
        if let Some(mission_id) = rewards.completed_mission {
            if !self.missions.complete(mission_id, now).await? {
                warn!(mission_id = %mission_id, "Mission was completed concurrently");
            }
        }
        log.extend(rewards.log.iter().cloned());

        info!(
            winner = %rewards.hero.name,
            turns = result.turns,
            xp = rewards.hero.xp,
            level = rewards.hero.level,
            "Battle won"
        );

        Ok(BattleReport {
            result,
            generated_mission,
            winner: Some(rewards.hero),
            completed_mission: rewards.completed_mission,
            leveled_up: rewards.leveled_up,
            log,
        })
    }
}
