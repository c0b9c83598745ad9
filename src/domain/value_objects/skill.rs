//! Skills - named, mana-gated combat actions granted by a hero's class

use serde::{Deserialize, Serialize};

use super::Attributes;

/// Name of the fallback skill every classless hero receives
pub const BASIC_ATTACK: &str = "Ataque Básico";

/// A combat skill as stored on a hero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub cost: i32,
}

impl Skill {
    pub fn new(name: impl Into<String>, cost: i32) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }

    pub fn basic_attack() -> Self {
        Self::new(BASIC_ATTACK, 0)
    }

    pub fn kind(&self) -> SkillKind {
        SkillKind::from_name(&self.name)
    }

    /// Damage dealt when this skill lands
    pub fn damage(&self, attributes: &Attributes) -> i32 {
        self.kind().damage(attributes)
    }
}

/// Damage formula family a skill belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    /// Golpe Feroz: strength * 2
    StrengthScaling,
    /// Rajada Arcana: intelligence * 3
    IntelligenceScaling,
    /// Tiro Preciso: dexterity * 1.5, rounded down
    DexterityScaling,
    /// Anything else hits for flat strength
    Unscaled,
}

impl SkillKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Golpe Feroz" => Self::StrengthScaling,
            "Rajada Arcana" => Self::IntelligenceScaling,
            "Tiro Preciso" => Self::DexterityScaling,
            _ => Self::Unscaled,
        }
    }

    pub fn damage(&self, attributes: &Attributes) -> i32 {
        match self {
            Self::StrengthScaling => attributes.strength * 2,
            Self::IntelligenceScaling => attributes.intelligence * 3,
            Self::DexterityScaling => attributes.dexterity * 3 / 2,
            Self::Unscaled => attributes.strength,
        }
    }
}

/// Skill set granted to a class at creation time
pub fn class_skills(class: &str) -> Vec<Skill> {
    let (name, cost) = match class {
        "Guerreiro" => ("Golpe Feroz", 3),
        "Arqueiro" => ("Tiro Preciso", 2),
        "Mago" => ("Rajada Arcana", 4),
        "Clérigo" => ("Bênção Divina", 3),
        "Ladino" => ("Golpe Furtivo", 2),
        "Bárbaro" => ("Fúria Selvagem", 4),
        "Druida" => ("Invocação da Natureza", 3),
        "Cavaleiro" => ("Ataque Cavalgado", 3),
        "Feiticeiro" => ("Explosão Arcana", 4),
        _ => return vec![Skill::basic_attack()],
    };
    vec![Skill::new(name, cost)]
}
