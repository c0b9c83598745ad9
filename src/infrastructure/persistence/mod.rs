//! JSON persistence adapters
//!
//! This module implements the repository ports over a single JSON document
//! shared by the hero and mission repositories.

mod document_store;
mod hero_repository;
mod mission_repository;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use document_store::JsonDocumentStore;
use hero_repository::JsonHeroRepository;
use mission_repository::JsonMissionRepository;

/// Combined repository providing access to all domain repositories
#[derive(Clone)]
pub struct JsonRepository {
    store: Arc<JsonDocumentStore>,
}

impl JsonRepository {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = JsonDocumentStore::open(path).await?;
        Ok(Self {
            store: Arc::new(store),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(JsonDocumentStore::in_memory()),
        }
    }

    pub fn heroes(&self) -> JsonHeroRepository {
        JsonHeroRepository::new(self.store.clone())
    }

    pub fn missions(&self) -> JsonMissionRepository {
        JsonMissionRepository::new(self.store.clone())
    }
}
