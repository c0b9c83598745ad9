//! Mission Service - Application service for the mission tracker

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::MissionRepositoryPort;
use crate::application::services::new_rolls;
use crate::domain::entities::{generate_attribute_mission, seed_missions, Mission};
use crate::domain::value_objects::{MissionId, RequirementParser};

/// Mission service trait defining the application use cases
#[async_trait]
pub trait MissionService: Send + Sync {
    /// List all missions
    async fn list_missions(&self) -> Result<Vec<Mission>>;

    /// Add a random attribute mission
    async fn generate_mission(&self) -> Result<Mission>;

    /// Complete a mission by hand. Returns false if it was already completed.
    async fn complete_mission(&self, id: MissionId) -> Result<bool>;

    /// Restore the seed missions
    async fn reset_missions(&self) -> Result<Vec<Mission>>;
}

/// Default implementation of MissionService over a mission repository port
pub struct MissionServiceImpl {
    missions: Arc<dyn MissionRepositoryPort>,
    parser: Box<dyn RequirementParser>,
    seed: Option<u64>,
}

impl MissionServiceImpl {
    /// `parser` extracts the requirement of every generated mission
    pub fn new(
        missions: Arc<dyn MissionRepositoryPort>,
        parser: Box<dyn RequirementParser>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            missions,
            parser,
            seed,
        }
    }
}

#[async_trait]
impl MissionService for MissionServiceImpl {
    #[instrument(skip(self))]
    async fn list_missions(&self) -> Result<Vec<Mission>> {
        debug!("Listing missions");
        self.missions
            .list()
            .await
            .context("Failed to list missions")
    }

    #[instrument(skip(self))]
    async fn generate_mission(&self) -> Result<Mission> {
        let mut rolls = new_rolls(self.seed);
        let mission = generate_attribute_mission(rolls.rng(), &*self.parser);

        self.missions
            .add(&mission)
            .await
            .context("Failed to store generated mission")?;

        info!(mission_id = %mission.id, "Generated mission: {}", mission.description);
        Ok(mission)
    }

    #[instrument(skip(self))]
    async fn complete_mission(&self, id: MissionId) -> Result<bool> {
        let completed = self
            .missions
            .complete(id, Utc::now())
            .await
            .with_context(|| format!("Failed to complete mission {}", id))?;

        if completed {
            info!(mission_id = %id, "Mission completed");
        } else {
            debug!(mission_id = %id, "Mission was already completed");
        }
        Ok(completed)
    }

    #[instrument(skip(self))]
    async fn reset_missions(&self) -> Result<Vec<Mission>> {
        let seed = seed_missions();
        self.missions
            .reset(&seed)
            .await
            .context("Failed to reset missions")?;

        info!(count = seed.len(), "Missions reset");
        Ok(seed)
    }
}
