//! Hero repository implementation over the JSON document

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::document_store::JsonDocumentStore;
use crate::application::ports::outbound::HeroRepositoryPort;
use crate::domain::entities::Hero;
use crate::domain::value_objects::HeroId;

/// Repository for Hero operations
pub struct JsonHeroRepository {
    store: Arc<JsonDocumentStore>,
}

impl JsonHeroRepository {
    pub fn new(store: Arc<JsonDocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HeroRepositoryPort for JsonHeroRepository {
    async fn list(&self) -> Result<Vec<Hero>> {
        Ok(self.store.read(|d| d.heroes.clone()).await)
    }

    async fn get(&self, id: HeroId) -> Result<Option<Hero>> {
        Ok(self
            .store
            .read(|d| d.heroes.iter().find(|h| h.id == id).cloned())
            .await)
    }

    async fn save(&self, hero: &Hero) -> Result<()> {
        let hero = hero.clone();
        self.store
            .update(move |d| {
                match d.heroes.iter_mut().find(|h| h.id == hero.id) {
                    Some(existing) => *existing = hero,
                    None => d.heroes.push(hero),
                }
                Ok(())
            })
            .await
    }

    async fn delete(&self, id: HeroId) -> Result<bool> {
        let exists = self
            .store
            .read(|d| d.heroes.iter().any(|h| h.id == id))
            .await;
        if !exists {
            return Ok(false);
        }

        self.store
            .update(|d| {
                d.heroes.retain(|h| h.id != id);
                Ok(true)
            })
            .await
    }
}
