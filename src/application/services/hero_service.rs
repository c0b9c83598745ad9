//! Hero Service - Application service for hero management
//!
//! This service provides use case implementations for forging, editing,
//! and removing heroes, and for rewriting their legends. Forging a hero also
//! completes the first-hero mission on the tracker.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::{HeroRepositoryPort, MissionRepositoryPort};
use crate::application::services::new_rolls;
use crate::domain::entities::{battle_cries, Hero, FIRST_HERO_MISSION};
use crate::domain::services::generate_story;
use crate::domain::value_objects::{
    Attribute, Attributes, HeroId, CREATION_POINTS, MAX_ATTRIBUTE, MIN_ATTRIBUTE,
};

/// Longest accepted hero name, in characters
pub const MAX_NAME_LENGTH: usize = 100;
/// Attribute points gained per level beyond the first
const POINTS_PER_LEVEL: i32 = 4;

/// Request to forge a new hero
#[derive(Debug, Clone)]
pub struct CreateHeroRequest {
    pub name: String,
    pub class: String,
    pub race: String,
    pub attributes: Attributes,
    pub image: Option<String>,
}

/// Request to edit an existing hero
#[derive(Debug, Clone, Default)]
pub struct UpdateHeroRequest {
    pub name: Option<String>,
    pub class: Option<String>,
    pub race: Option<String>,
    pub attributes: Option<Attributes>,
    pub story: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeroValidationError {
    #[error("Hero name cannot be empty")]
    EmptyName,
    #[error("Hero name cannot exceed {max} characters")]
    NameTooLong { max: usize },
    #[error("Hero class cannot be empty")]
    EmptyClass,
    #[error("{attribute} must be between 1 and 10, got {value}")]
    AttributeOutOfRange { attribute: Attribute, value: i32 },
    #[error("Attributes must total exactly {expected} points, got {actual}")]
    WrongPointTotal { expected: i32, actual: i32 },
    #[error("Attributes cannot exceed {allowed} points at level {level}, got {actual}")]
    TooManyPoints {
        allowed: i32,
        actual: i32,
        level: i32,
    },
}

/// Hero service trait defining the application use cases
#[async_trait]
pub trait HeroService: Send + Sync {
    /// Forge a new hero with class skills, a battle cry and a story
    async fn create_hero(&self, request: CreateHeroRequest) -> Result<Hero>;

    /// Get a hero by ID
    async fn get_hero(&self, id: HeroId) -> Result<Option<Hero>>;

    /// List all heroes
    async fn list_heroes(&self) -> Result<Vec<Hero>>;

    /// Edit a hero, keeping its progression
    async fn update_hero(&self, id: HeroId, request: UpdateHeroRequest) -> Result<Hero>;

    /// Delete a hero
    async fn delete_hero(&self, id: HeroId) -> Result<()>;

    /// Replace a hero's story with a freshly generated one
    async fn regenerate_story(&self, id: HeroId) -> Result<Hero>;
}

/// Default implementation of HeroService over the hero and mission ports
pub struct HeroServiceImpl {
    heroes: Arc<dyn HeroRepositoryPort>,
    missions: Arc<dyn MissionRepositoryPort>,
    seed: Option<u64>,
}

impl HeroServiceImpl {
    /// Create a new HeroServiceImpl. `seed` makes battle cries and stories reproducible.
    pub fn new(
        heroes: Arc<dyn HeroRepositoryPort>,
        missions: Arc<dyn MissionRepositoryPort>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            heroes,
            missions,
            seed,
        }
    }

    fn validate_name(name: &str) -> Result<(), HeroValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HeroValidationError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(HeroValidationError::NameTooLong {
                max: MAX_NAME_LENGTH,
            });
        }
        Ok(())
    }

    fn validate_attribute_range(attributes: &Attributes) -> Result<(), HeroValidationError> {
        for attribute in Attribute::ALL {
            let value = attributes.get(attribute);
            if !(MIN_ATTRIBUTE..=MAX_ATTRIBUTE).contains(&value) {
                return Err(HeroValidationError::AttributeOutOfRange { attribute, value });
            }
        }
        Ok(())
    }

    /// Validate a hero creation request
    fn validate_create_request(request: &CreateHeroRequest) -> Result<(), HeroValidationError> {
        Self::validate_name(&request.name)?;
        if request.class.trim().is_empty() {
            return Err(HeroValidationError::EmptyClass);
        }
        Self::validate_attribute_range(&request.attributes)?;

        let actual = request.attributes.total();
        if actual != CREATION_POINTS {
            return Err(HeroValidationError::WrongPointTotal {
                expected: CREATION_POINTS,
                actual,
            });
        }
        Ok(())
    }

    /// Validate an edit against the hero being edited
    fn validate_update_request(
        hero: &Hero,
        request: &UpdateHeroRequest,
    ) -> Result<(), HeroValidationError> {
        if let Some(ref name) = request.name {
            Self::validate_name(name)?;
        }
        if let Some(ref class) = request.class {
            if class.trim().is_empty() {
                return Err(HeroValidationError::EmptyClass);
            }
        }
        if let Some(ref attributes) = request.attributes {
            Self::validate_attribute_range(attributes)?;

            let allowed = CREATION_POINTS + POINTS_PER_LEVEL * (hero.level - 1).max(0);
            let actual = attributes.total();
            if actual > allowed {
                return Err(HeroValidationError::TooManyPoints {
                    allowed,
                    actual,
                    level: hero.level,
                });
            }
        }
        Ok(())
    }

    /// Complete the first-hero mission if the tracker still has it open
    async fn complete_first_hero_mission(&self) -> Result<()> {
        let missions = self
            .missions
            .list()
            .await
            .context("Failed to list missions")?;
        let Some(mission) = missions
            .iter()
            .find(|m| m.description == FIRST_HERO_MISSION && !m.completed)
        else {
            return Ok(());
        };

        if self
            .missions
            .complete(mission.id, Utc::now())
            .await
            .context("Failed to complete first-hero mission")?
        {
            info!(mission_id = %mission.id, "Mission completed: {}", mission.description);
        }
        Ok(())
    }

    async fn require_hero(&self, id: HeroId) -> Result<Hero> {
        self.heroes
            .get(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Hero not found: {}", id))
    }
}

#[async_trait]
impl HeroService for HeroServiceImpl {
    #[instrument(skip(self, request), fields(name = %request.name, class = %request.class))]
    async fn create_hero(&self, request: CreateHeroRequest) -> Result<Hero> {
        Self::validate_create_request(&request)?;

        let mut hero = Hero::new(
            request.name.trim(),
            request.class.trim(),
            request.race.trim(),
            request.attributes,
        );
        if let Some(image) = request.image {
            hero = hero.with_image(image);
        }

        let mut rolls = new_rolls(self.seed);
        if let Some(cry) = battle_cries(&hero.class).choose(rolls.rng()) {
            hero = hero.with_battle_cry(*cry);
        }
        let story = generate_story(&hero, rolls.rng());
        hero = hero.with_story(story);

        self.heroes
            .save(&hero)
            .await
            .context("Failed to save new hero")?;
        self.complete_first_hero_mission().await?;

        info!(hero_id = %hero.id, "Forged hero: {}", hero.name);
        Ok(hero)
    }

    #[instrument(skip(self))]
    async fn get_hero(&self, id: HeroId) -> Result<Option<Hero>> {
        debug!(hero_id = %id, "Fetching hero");
        self.heroes
            .get(id)
            .await
            .context("Failed to get hero from repository")
    }

    #[instrument(skip(self))]
    async fn list_heroes(&self) -> Result<Vec<Hero>> {
        debug!("Listing heroes");
        self.heroes
            .list()
            .await
            .context("Failed to list heroes")
    }

    #[instrument(skip(self, request), fields(hero_id = %id))]
    async fn update_hero(&self, id: HeroId, request: UpdateHeroRequest) -> Result<Hero> {
        let mut hero = self.require_hero(id).await?;
        Self::validate_update_request(&hero, &request)?;

        if let Some(name) = request.name {
            hero.name = name.trim().to_string();
        }
        if let Some(class) = request.class {
            let class = class.trim();
            if class != hero.class {
                hero.change_class(class);
            }
        }
        if let Some(race) = request.race {
            hero.race = race;
        }
        if let Some(attributes) = request.attributes {
            hero.attributes = attributes;
        }
        if let Some(story) = request.story {
            hero.story = Some(story);
        }
        if let Some(image) = request.image {
            hero.image = Some(image);
        }

        self.heroes
            .save(&hero)
            .await
            .context("Failed to update hero in repository")?;

        info!(hero_id = %id, "Updated hero: {}", hero.name);
        Ok(hero)
    }

    #[instrument(skip(self))]
    async fn delete_hero(&self, id: HeroId) -> Result<()> {
        let deleted = self
            .heroes
            .delete(id)
            .await
            .context("Failed to delete hero from repository")?;
        if !deleted {
            anyhow::bail!("Hero not found: {}", id);
        }

        info!(hero_id = %id, "Deleted hero");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn regenerate_story(&self, id: HeroId) -> Result<Hero> {
        let hero = self.require_hero(id).await?;

        let mut rolls = new_rolls(self.seed);
        let story = generate_story(&hero, rolls.rng());
        let hero = hero.with_story(story);

        self.heroes
            .save(&hero)
            .await
            .context("Failed to save regenerated story")?;

        debug!(hero_id = %id, "Regenerated story");
        Ok(hero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Mission;
    use crate::infrastructure::persistence::JsonRepository;

    fn create_request(name: &str, class: &str, attributes: Attributes) -> CreateHeroRequest {
        CreateHeroRequest {
            name: name.to_string(),
            class: class.to_string(),
            race: "Humano".to_string(),
            attributes,
            image: None,
        }
    }

    fn service_over(repository: &JsonRepository) -> HeroServiceImpl {
        HeroServiceImpl::new(
            Arc::new(repository.heroes()),
            Arc::new(repository.missions()),
            Some(7),
        )
    }

    fn service() -> HeroServiceImpl {
        service_over(&JsonRepository::in_memory())
    }

    #[test]
    fn test_create_hero_request_validation() {
        // Empty name should fail
        let request = create_request("  ", "Guerreiro", Attributes::new(6, 4, 3, 5));
        assert_eq!(
            HeroServiceImpl::validate_create_request(&request),
            Err(HeroValidationError::EmptyName)
        );

        let request = create_request(&"a".repeat(101), "Guerreiro", Attributes::new(6, 4, 3, 5));
        assert!(matches!(
            HeroServiceImpl::validate_create_request(&request),
            Err(HeroValidationError::NameTooLong { max: 100 })
        ));

        // Surrounding whitespace is not counted
        let padded = format!("  {}  ", "a".repeat(100));
        let request = create_request(&padded, "Guerreiro", Attributes::new(6, 4, 3, 5));
        assert!(HeroServiceImpl::validate_create_request(&request).is_ok());

        // Points must be spent exactly
        let request = create_request("Bran", "Guerreiro", Attributes::new(6, 4, 3, 4));
        assert_eq!(
            HeroServiceImpl::validate_create_request(&request),
            Err(HeroValidationError::WrongPointTotal {
                expected: 18,
                actual: 17
            })
        );

        let request = create_request("Bran", "Guerreiro", Attributes::new(11, 1, 1, 5));
        assert!(matches!(
            HeroServiceImpl::validate_create_request(&request),
            Err(HeroValidationError::AttributeOutOfRange {
                attribute: Attribute::Strength,
                value: 11
            })
        ));

        // Valid request should pass
        let request = create_request("Bran", "Guerreiro", Attributes::new(6, 4, 3, 5));
        assert!(HeroServiceImpl::validate_create_request(&request).is_ok());
    }

    #[test]
    fn test_update_allows_level_points() {
        let hero = Hero::new("Bran", "Guerreiro", "Humano", Attributes::new(6, 4, 3, 5))
            .with_progress(3, 250, 10);

        let request = UpdateHeroRequest {
            attributes: Some(Attributes::new(8, 6, 6, 6)),
            ..Default::default()
        };
        assert!(HeroServiceImpl::validate_update_request(&hero, &request).is_ok());

        let request = UpdateHeroRequest {
            attributes: Some(Attributes::new(8, 7, 6, 6)),
            ..Default::default()
        };
        assert_eq!(
            HeroServiceImpl::validate_update_request(&hero, &request),
            Err(HeroValidationError::TooManyPoints {
                allowed: 26,
                actual: 27,
                level: 3
            })
        );

        // No updates is valid
        assert!(HeroServiceImpl::validate_update_request(&hero, &UpdateHeroRequest::default()).is_ok());
    }

    #[tokio::test]
    async fn test_create_hero_assigns_class_kit() {
        let service = service();
        let hero = service
            .create_hero(create_request("Lyra", "Mago", Attributes::new(2, 3, 9, 4)))
            .await
            .unwrap();

        assert_eq!(hero.level, 1);
        assert_eq!(hero.xp, 0);
        assert_eq!(hero.mana, 10);
        assert_eq!(hero.skills[0].name, "Rajada Arcana");
        assert!(battle_cries("Mago").contains(&hero.battle_cry.as_str()));
        assert!(hero.story.as_deref().is_some_and(|s| s.contains("Lyra")));

        let stored = service.get_hero(hero.id).await.unwrap();
        assert_eq!(stored, Some(hero));
    }

    #[tokio::test]
    async fn test_invalid_hero_is_not_stored() {
        let service = service();
        let err = service
            .create_hero(create_request("Bran", "Guerreiro", Attributes::new(9, 9, 9, 9)))
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<HeroValidationError>().is_some());
        assert!(service.list_heroes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_progress_and_reassigns_skills() {
        let service = service();
        let hero = service
            .create_hero(create_request("Bran", "Guerreiro", Attributes::new(6, 4, 3, 5)))
            .await
            .unwrap();

        let updated = service
            .update_hero(
                hero.id,
                UpdateHeroRequest {
                    class: Some("Arqueiro".to_string()),
                    story: Some("Uma nova lenda.".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.class, "Arqueiro");
        assert_eq!(updated.skills[0].name, "Tiro Preciso");
        assert_eq!(updated.xp, hero.xp);
        assert_eq!(updated.level, hero.level);
        assert_eq!(updated.story.as_deref(), Some("Uma nova lenda."));
    }

    #[tokio::test]
    async fn test_delete_unknown_hero_fails() {
        let service = service();
        assert!(service.delete_hero(HeroId::new()).await.is_err());

        let hero = service
            .create_hero(create_request("Bran", "Guerreiro", Attributes::new(6, 4, 3, 5)))
            .await
            .unwrap();
        service.delete_hero(hero.id).await.unwrap();
        assert_eq!(service.get_hero(hero.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_regenerate_story_keeps_hero() {
        let service = service();
        let hero = service
            .create_hero(create_request("Kael", "Ladino", Attributes::new(4, 8, 3, 3)))
            .await
            .unwrap();

        let regenerated = service.regenerate_story(hero.id).await.unwrap();
        assert_eq!(regenerated.id, hero.id);
        assert!(regenerated.story.is_some());
        assert_eq!(regenerated.attributes, hero.attributes);
    }

    #[tokio::test]
    async fn test_create_hero_completes_first_hero_mission() {
        let repository = JsonRepository::in_memory();
        let service = service_over(&repository);

        service
            .create_hero(create_request("Bran", "Guerreiro", Attributes::new(6, 4, 3, 5)))
            .await
            .unwrap();

        let missions = repository.missions().list().await.unwrap();
        let first = missions
            .iter()
            .find(|m| m.description == FIRST_HERO_MISSION)
            .unwrap();
        assert!(first.completed);
        assert!(first.completed_at.is_some());
        assert_eq!(missions.iter().filter(|m| m.completed).count(), 1);

        // A second hero leaves the completion time alone
        let completed_at = first.completed_at;
        service
            .create_hero(create_request("Tor", "Guerreiro", Attributes::new(6, 4, 3, 5)))
            .await
            .unwrap();
        let missions = repository.missions().list().await.unwrap();
        assert_eq!(missions[0].completed_at, completed_at);
    }

    #[tokio::test]
    async fn test_create_hero_without_first_hero_mission() {
        let repository = JsonRepository::in_memory();
        let other = Mission::new("Vença uma batalha na Arena", Some("100 XP".to_string()));
        repository.missions().reset(&[other.clone()]).await.unwrap();

        let hero = service_over(&repository)
            .create_hero(create_request("Bran", "Guerreiro", Attributes::new(6, 4, 3, 5)))
            .await
            .unwrap();

        assert_eq!(repository.heroes().get(hero.id).await.unwrap(), Some(hero));
        assert_eq!(repository.missions().list().await.unwrap(), vec![other]);
    }
}
