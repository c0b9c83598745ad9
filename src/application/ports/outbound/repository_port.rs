//! Repository ports - Interfaces for data persistence
//!
//! These traits define the contracts that infrastructure repositories must implement.
//! Application services depend on these traits, not concrete implementations.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Hero, Mission};
use crate::domain::value_objects::{HeroId, MissionId};

// =============================================================================
// Hero Repository Port
// =============================================================================

/// Repository port for the Character Store
#[async_trait]
pub trait HeroRepositoryPort: Send + Sync {
    /// List every stored hero, in insertion order
    async fn list(&self) -> Result<Vec<Hero>>;

    /// Get a hero by ID
    async fn get(&self, id: HeroId) -> Result<Option<Hero>>;

    /// Insert a new hero or replace the stored one with the same ID
    async fn save(&self, hero: &Hero) -> Result<()>;

    /// Delete a hero. Returns false when no hero had that ID.
    async fn delete(&self, id: HeroId) -> Result<bool>;
}

// =============================================================================
// Mission Repository Port
// =============================================================================

/// Repository port for the Mission Tracker
#[async_trait]
pub trait MissionRepositoryPort: Send + Sync {
    /// List every mission, in insertion order
    async fn list(&self) -> Result<Vec<Mission>>;

    /// Append a mission
    async fn add(&self, mission: &Mission) -> Result<()>;

    /// Mark a mission completed at `at`.
    ///
    /// Returns false if the mission was already completed; its original
    /// completion time is kept.
    async fn complete(&self, id: MissionId, at: DateTime<Utc>) -> Result<bool>;

    /// Replace all missions with `seed`
    async fn reset(&self, seed: &[Mission]) -> Result<()>;
}
