//! Mission repository implementation over the JSON document

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::document_store::JsonDocumentStore;
use crate::application::ports::outbound::MissionRepositoryPort;
use crate::domain::entities::Mission;
use crate::domain::value_objects::MissionId;

/// Repository for Mission operations
pub struct JsonMissionRepository {
    store: Arc<JsonDocumentStore>,
}

impl JsonMissionRepository {
    pub fn new(store: Arc<JsonDocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MissionRepositoryPort for JsonMissionRepository {
    async fn list(&self) -> Result<Vec<Mission>> {
        Ok(self.store.read(|d| d.missions.clone()).await)
    }

    async fn add(&self, mission: &Mission) -> Result<()> {
        let mission = mission.clone();
        self.store
            .update(move |d| {
                d.missions.push(mission);
                Ok(())
            })
            .await
    }

    async fn complete(&self, id: MissionId, at: DateTime<Utc>) -> Result<bool> {
        let state = self
            .store
            .read(|d| d.missions.iter().find(|m| m.id == id).map(|m| m.completed))
            .await;
        match state {
            None => anyhow::bail!("Mission not found: {}", id),
            Some(true) => return Ok(false),
            Some(false) => {}
        }

        self.store
            .update(move |d| {
                let mission = d
                    .missions
                    .iter_mut()
                    .find(|m| m.id == id)
                    .ok_or_else(|| anyhow::anyhow!("Mission not found: {}", id))?;
                Ok(mission.complete(at))
            })
            .await
    }

    async fn reset(&self, seed: &[Mission]) -> Result<()> {
        let seed = seed.to_vec();
        self.store
            .update(move |d| {
                d.missions = seed;
                Ok(())
            })
            .await
    }
}
