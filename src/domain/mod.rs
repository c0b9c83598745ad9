//! Domain layer - Core game rules with no storage or runtime dependencies
//!
//! This layer contains:
//! - Entities: Hero, Mission, BattleResult
//! - Value Objects: Attributes, Skills, Mission requirements, identifiers
//! - Domain Services: combat engine, reward applier, story generator

pub mod entities;
pub mod services;
pub mod value_objects;
