//! Hero entity - a forged character with attributes, progression and skills

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{class_skills, Attributes, HeroId, Skill};

/// Mana a hero starts with, and the value assumed when a stored record has none
pub const DEFAULT_MANA: i32 = 10;
/// Upper bound of the mana pool
pub const MAX_MANA: i32 = 20;
/// XP needed per level
pub const XP_PER_LEVEL: i32 = 100;

/// A hero in the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    /// Class name; selects the skill set and battle cries
    pub class: String,
    #[serde(default)]
    pub race: String,
    pub attributes: Attributes,
    #[serde(default = "first_level")]
    pub level: i32,
    #[serde(default)]
    pub xp: i32,
    #[serde(default = "default_mana")]
    pub mana: i32,
    #[serde(default)]
    pub skills: Vec<Skill>,

    // Flavor
    #[serde(default)]
    pub battle_cry: String,
    #[serde(default)]
    pub alignment: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub story: Option<String>,
    /// Path or URL of the portrait image
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn first_level() -> i32 {
    1
}

fn default_mana() -> i32 {
    DEFAULT_MANA
}

impl Hero {
    pub fn new(
        name: impl Into<String>,
        class: impl Into<String>,
        race: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        let class = class.into();
        Self {
            id: HeroId::new(),
            name: name.into(),
            skills: class_skills(&class),
            class,
            race: race.into(),
            attributes,
            level: 1,
            xp: 0,
            mana: DEFAULT_MANA,
            battle_cry: String::new(),
            alignment: "Leal e Bom".to_string(),
            objective: "Justiça".to_string(),
            story: None,
            image: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_battle_cry(mut self, battle_cry: impl Into<String>) -> Self {
        self.battle_cry = battle_cry.into();
        self
    }

    pub fn with_story(mut self, story: impl Into<String>) -> Self {
        self.story = Some(story.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[cfg(test)]
    pub fn with_progress(mut self, level: i32, xp: i32, mana: i32) -> Self {
        self.level = level;
        self.xp = xp;
        self.mana = mana;
        self
    }

    /// Health a hero enters battle with
    pub fn max_health(&self) -> i32 {
        self.attributes.constitution * 10
    }

    /// The skill the combat engine reaches for
    pub fn primary_skill(&self) -> Option<&Skill> {
        self.skills.first()
    }

    /// Switch class and take on that class's skill set
    pub fn change_class(&mut self, class: impl Into<String>) {
        self.class = class.into();
        self.skills = class_skills(&self.class);
    }
}

/// Level reached with a given amount of XP
pub fn level_for_xp(xp: i32) -> i32 {
    xp.div_euclid(XP_PER_LEVEL) + 1
}

/// Battle cries a class may shout; unknown classes borrow the warrior's
pub fn battle_cries(class: &str) -> &'static [&'static str] {
    match class {
        "Arqueiro" => &["\"A flecha encontra seu alvo!\"", "\"Silêncio antes do disparo!\""],
        "Mago" => &["\"O fogo da mente queima!\"", "\"Arcanos, obedeçam-me!\""],
        "Clérigo" => &["\"Pela luz, sou redimido!\"", "\"A fé guia meu golpe!\""],
        "Ladino" => &["\"Das sombras, a lâmina!\"", "\"Surpresa é minha arma!\""],
        "Bárbaro" => &["\"Rugido da fúria!\"", "\"Sangue e glória!\""],
        "Druida" => &["\"A natureza me defende!\"", "\"Florestas, erguei-vos!\""],
        "Cavaleiro" => &["\"Pela ordem, avanço!\"", "\"Meu juramento é minha força!\""],
        "Feiticeiro" => &["\"O sangue queima em poder!\"", "\"Caos, meu aliado!\""],
        _ => &["\"Pela honra, caio ou venço!\"", "\"Meu escudo é minha alma!\""],
    }
}
