//! Hero attributes - the four core stats that drive combat and missions

use serde::{Deserialize, Serialize};

/// Lowest value a single attribute may hold
pub const MIN_ATTRIBUTE: i32 = 1;
/// Highest value a single attribute may hold
pub const MAX_ATTRIBUTE: i32 = 10;
/// Point total a freshly created hero must distribute
pub const CREATION_POINTS: i32 = 18;

/// One of the four core attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Dexterity,
    Intelligence,
    Constitution,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Intelligence,
        Attribute::Constitution,
    ];

    /// Name used in mission descriptions and narrative text
    pub fn localized_name(&self) -> &'static str {
        match self {
            Self::Strength => "força",
            Self::Dexterity => "destreza",
            Self::Intelligence => "inteligência",
            Self::Constitution => "constituição",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.localized_name())
    }
}

/// Attribute block of a hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i32,
    pub dexterity: i32,
    pub intelligence: i32,
    pub constitution: i32,
}

impl Attributes {
    pub fn new(strength: i32, dexterity: i32, intelligence: i32, constitution: i32) -> Self {
        Self {
            strength,
            dexterity,
            intelligence,
            constitution,
        }
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Intelligence => self.intelligence,
            Attribute::Constitution => self.constitution,
        }
    }

    pub fn total(&self) -> i32 {
        self.strength + self.dexterity + self.intelligence + self.constitution
    }

    /// Every attribute within `[MIN_ATTRIBUTE, MAX_ATTRIBUTE]`
    pub fn in_range(&self) -> bool {
        Attribute::ALL
            .iter()
            .all(|a| (MIN_ATTRIBUTE..=MAX_ATTRIBUTE).contains(&self.get(*a)))
    }

    /// Level-up growth: every attribute +1, capped individually
    pub fn grown(&self) -> Self {
        let bump = |v: i32| (v + 1).min(MAX_ATTRIBUTE);
        Self {
            strength: bump(self.strength),
            dexterity: bump(self.dexterity),
            intelligence: bump(self.intelligence),
            constitution: bump(self.constitution),
        }
    }

    /// The highest attribute; ties go to the earliest in `Attribute::ALL`
    pub fn dominant(&self) -> Attribute {
        let mut best = Attribute::Strength;
        for attribute in Attribute::ALL {
            if self.get(attribute) > self.get(best) {
                best = attribute;
            }
        }
        best
    }
}
