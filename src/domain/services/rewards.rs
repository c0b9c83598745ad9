//! Reward applier - turns a won battle into permanent hero progression
//!
//! Nothing here touches storage. The caller receives the updated hero and
//! missions and persists them.

use chrono::{DateTime, Utc};

use crate::domain::entities::{level_for_xp, BattleResult, Hero, Mission, MAX_MANA};
use crate::domain::value_objects::{HeroId, MissionId};

/// XP granted for every victory
pub const VICTORY_XP: i32 = 50;
/// Mana restored after every victory
pub const VICTORY_MANA: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewardError {
    #[error("Battle ended in a draw, there is no winner to reward")]
    NoWinner,
    #[error("Hero {0} did not win this battle")]
    NotTheWinner(HeroId),
}

/// Everything a victory changes
#[derive(Debug, Clone)]
pub struct VictoryRewards {
    pub hero: Hero,
    pub missions: Vec<Mission>,
    /// Mission completed by this victory, if any
    pub completed_mission: Option<MissionId>,
    pub leveled_up: bool,
    /// Lines to append to the battle log
    pub log: Vec<String>,
}

/// Apply the rewards of `result` to its winner.
///
/// Only the first incomplete mission is considered. Its requirement is checked
/// against the winner's attributes as they were during the battle.
pub fn apply_victory(
    winner: &Hero,
    result: &BattleResult,
    missions: &[Mission],
    now: DateTime<Utc>,
) -> Result<VictoryRewards, RewardError> {
    match result.winner_id() {
        None => return Err(RewardError::NoWinner),
        Some(id) if id != winner.id => return Err(RewardError::NotTheWinner(winner.id)),
        Some(_) => {}
    }

    let mut hero = winner.clone();
    hero.xp = winner.xp.saturating_add(VICTORY_XP);
    hero.mana = winner.mana.saturating_add(VICTORY_MANA).min(MAX_MANA);

    let mut missions = missions.to_vec();
    let mut log = Vec::new();
    let mut completed_mission = None;

    if let Some(mission) = missions.iter_mut().find(|m| !m.completed) {
        let met = mission
            .requirement()
            .is_some_and(|requirement| requirement.is_met_by(&winner.attributes));

        if met && mission.complete(now) {
            if let Some(xp) = mission.reward_xp() {
                hero.xp = hero.xp.saturating_add(xp);
            }
            log.push(match &mission.reward {
                Some(reward) => format!(
                    "Missão \"{}\" completada! Recompensa: {}",
                    mission.description, reward
                ),
                None => format!("Missão \"{}\" completada!", mission.description),
            });
            completed_mission = Some(mission.id);
        }
    }

    // Level follows the final XP, mission bonus included, so it never lags behind.
    hero.level = level_for_xp(hero.xp);
    let leveled_up = hero.level > winner.level;
    if leveled_up {
        hero.attributes = winner.attributes.grown();
    }

    Ok(VictoryRewards {
        hero,
        missions,
        completed_mission,
        leveled_up,
        log,
    })
}
