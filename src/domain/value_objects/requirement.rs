//! Mission requirements - attribute thresholds encoded in mission descriptions
//!
//! Mission descriptions are free text such as
//! `"Derrote um inimigo com força > 5"`. The requirement is extracted once, when
//! the mission is created or loaded, into a [`MissionRequirement`] so reward
//! resolution never has to look at the text again.

use serde::{Deserialize, Serialize};

use super::{Attribute, Attributes};

/// A parsed "attribute > threshold" predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionRequirement {
    pub attribute: Attribute,
    pub threshold: i32,
}

impl MissionRequirement {
    pub fn new(attribute: Attribute, threshold: i32) -> Self {
        Self {
            attribute,
            threshold,
        }
    }

    /// Met when the attribute strictly exceeds the threshold
    pub fn is_met_by(&self, attributes: &Attributes) -> bool {
        attributes.get(self.attribute) > self.threshold
    }
}

/// Strategy for turning a mission description into a requirement
pub trait RequirementParser: Send + Sync {
    /// `None` means the description carries no recognizable predicate
    fn parse(&self, description: &str) -> Option<MissionRequirement>;
}

/// Keyword lookup plus the integer after the first `>`
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordThresholdParser;

/// Lookup order matters: the first keyword found in the text wins.
const KEYWORDS: [(&str, Attribute); 8] = [
    ("força", Attribute::Strength),
    ("constituição", Attribute::Constitution),
    ("destreza", Attribute::Dexterity),
    ("inteligência", Attribute::Intelligence),
    ("strength", Attribute::Strength),
    ("constitution", Attribute::Constitution),
    ("dexterity", Attribute::Dexterity),
    ("intelligence", Attribute::Intelligence),
];

impl RequirementParser for KeywordThresholdParser {
    fn parse(&self, description: &str) -> Option<MissionRequirement> {
        let attribute = KEYWORDS
            .iter()
            .find(|(keyword, _)| description.contains(keyword))
            .map(|(_, attribute)| *attribute)?;

        let segment = description.split('>').nth(1)?;
        let threshold = leading_integer(segment)?;

        Some(MissionRequirement::new(attribute, threshold))
    }
}

/// Integer prefix of `text` after leading whitespace; trailing text is ignored.
pub fn leading_integer(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i32 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
