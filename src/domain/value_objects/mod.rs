//! Value objects - Immutable objects defined by their attributes

mod attributes;
mod ids;
mod requirement;
mod skill;

pub use attributes::{Attribute, Attributes, CREATION_POINTS, MAX_ATTRIBUTE, MIN_ATTRIBUTE};
pub use ids::*;
pub use requirement::{leading_integer, KeywordThresholdParser, MissionRequirement, RequirementParser};
pub use skill::{class_skills, Skill};
