//! Mission entity - one-shot objectives completed through play

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    leading_integer, Attribute, KeywordThresholdParser, MissionId, MissionRequirement,
    RequirementParser,
};

/// An objective the player can complete once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MissionDocument")]
pub struct Mission {
    pub id: MissionId,
    pub description: String,
    pub completed: bool,
    /// Descriptive reward, e.g. `"100 XP"` or `"Moeda de Glória"`
    pub reward: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Derived from `description`; never persisted
    #[serde(skip)]
    requirement: Option<MissionRequirement>,
}

/// Stored shape of a mission
#[derive(Deserialize)]
struct MissionDocument {
    id: MissionId,
    description: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    reward: Option<String>,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
}

impl From<MissionDocument> for Mission {
    fn from(doc: MissionDocument) -> Self {
        let requirement = KeywordThresholdParser.parse(&doc.description);
        Self {
            id: doc.id,
            description: doc.description,
            completed: doc.completed,
            reward: doc.reward,
            completed_at: doc.completed_at,
            requirement,
        }
    }
}

impl Mission {
    /// Create a mission, parsing its requirement with the default parser
    pub fn new(description: impl Into<String>, reward: Option<String>) -> Self {
        Self::parsed_with(description, reward, &KeywordThresholdParser)
    }

    /// Create a mission, parsing its requirement with `parser`
    pub fn parsed_with(
        description: impl Into<String>,
        reward: Option<String>,
        parser: &dyn RequirementParser,
    ) -> Self {
        let description = description.into();
        Self {
            id: MissionId::new(),
            requirement: parser.parse(&description),
            description,
            completed: false,
            reward,
            completed_at: None,
        }
    }

    pub fn requirement(&self) -> Option<&MissionRequirement> {
        self.requirement.as_ref()
    }

    /// XP granted on completion, when the reward text starts with a number
    pub fn reward_xp(&self) -> Option<i32> {
        self.reward.as_deref().and_then(leading_integer)
    }

    /// Mark the mission completed. Returns false if it already was.
    pub fn complete(&mut self, at: DateTime<Utc>) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        self.completed_at = Some(at);
        true
    }
}

/// Seed mission completed by forging a hero
pub const FIRST_HERO_MISSION: &str = "Crie seu primeiro herói";

/// Missions every fresh or reset tracker starts with
pub fn seed_missions() -> Vec<Mission> {
    vec![
        Mission::new(FIRST_HERO_MISSION, Some("Emblema de Forjador".to_string())),
        Mission::new("Vença uma batalha na Arena", Some("100 XP".to_string())),
        Mission::new("Compartilhe um herói com amigos", Some("Moeda de Glória".to_string())),
        Mission::new("Edite um herói na galeria", Some("50 XP".to_string())),
    ]
}

/// Random "defeat an enemy with <attribute> > N" mission
pub fn generate_attribute_mission(rng: &mut impl Rng, parser: &dyn RequirementParser) -> Mission {
    let attribute = Attribute::ALL[rng.gen_range(0..Attribute::ALL.len())];
    let threshold = rng.gen_range(1..=10);
    let reward_xp = 50 + rng.gen_range(0..50);

    Mission::parsed_with(
        format!(
            "Derrote um inimigo com {} > {}",
            attribute.localized_name(),
            threshold
        ),
        Some(format!("{} XP", reward_xp)),
        parser,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_complete_happens_once() {
        let mut mission = Mission::new("Derrote um inimigo com força > 5", Some("70 XP".into()));
        let first = Utc::now();
        assert!(mission.complete(first));
        assert!(!mission.complete(Utc::now()));
        assert_eq!(mission.completed_at, Some(first));
    }

    #[test]
    fn test_reward_xp() {
        assert_eq!(Mission::new("x", Some("100 XP".into())).reward_xp(), Some(100));
        assert_eq!(Mission::new("x", Some("Moeda de Glória".into())).reward_xp(), None);
        assert_eq!(Mission::new("x", None).reward_xp(), None);
    }

    #[test]
    fn test_requirement_survives_reload() {
        let mission = Mission::new("Derrote um inimigo com destreza > 4", Some("60 XP".into()));
        let json = serde_json::to_string(&mission).unwrap();
        assert!(!json.contains("requirement"));

        let loaded: Mission = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, mission);
        assert_eq!(
            loaded.requirement(),
            Some(&MissionRequirement::new(Attribute::Dexterity, 4))
        );
    }

    #[test]
    fn test_generated_missions_are_parseable() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mission = generate_attribute_mission(&mut rng, &KeywordThresholdParser);
            let requirement = mission.requirement().expect("generated mission has a predicate");
            assert!((1..=10).contains(&requirement.threshold));
            let xp = mission.reward_xp().unwrap();
            assert!((50..100).contains(&xp));
        }
    }

    #[test]
    fn test_seed_missions_have_no_attribute_predicate() {
        let seeds = seed_missions();
        assert_eq!(seeds.len(), 4);
        assert!(seeds.iter().all(|m| m.requirement().is_none() && !m.completed));
    }
}
