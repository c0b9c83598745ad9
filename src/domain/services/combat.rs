//! Combat engine - turn-based arena fights between two heroes
//!
//! The engine is a pure function of two hero snapshots and a [`RollSource`].
//! It never touches storage; callers persist whatever they derive from the
//! returned [`BattleResult`].
//!
//! Rolls are drawn in a fixed order each turn so that an injected sequence
//! reproduces a battle exactly:
//!
//! 1. critical roll for A, then for B
//! 2. skill roll for A, then for B
//! 3. A acts: no roll for a skill, otherwise a hit roll and, on a hit, a damage roll
//! 4. B acts the same way, only if still standing

use crate::domain::entities::{BattleOutcome, BattleResult, Hero};
use crate::domain::value_objects::Skill;

use super::rolls::RollSource;

/// Turn cap; a battle still running after this many turns is decided on health
pub const MAX_TURNS: u32 = 50;
/// Chance that a hero reaches for its skill on a given turn
pub const SKILL_CHANCE: f64 = 0.3;
/// Floor of the per-attack hit chance
pub const MIN_HIT_CHANCE: f64 = 0.2;
/// Damage multiplier of a critical hit
pub const CRITICAL_MULTIPLIER: i32 = 2;

/// Errors raised before a battle starts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("Invalid combatant: {0}")]
    InvalidCombatant(String),
}

/// Chance a basic attack connects
pub fn hit_chance(dexterity: i32) -> f64 {
    (f64::from(dexterity) / 20.0).max(MIN_HIT_CHANCE)
}

/// Chance an attack is critical
pub fn critical_chance(dexterity: i32) -> f64 {
    f64::from(dexterity) / 100.0
}

/// Basic attack damage for a damage roll in `[0, 1)`
pub fn basic_attack_damage(hero: &Hero, damage_roll: f64, critical: bool) -> i32 {
    let attrs = &hero.attributes;
    let variance = 0.5 + damage_roll * 0.5;
    let multiplier = if critical { CRITICAL_MULTIPLIER } else { 1 };
    let raw = f64::from(attrs.strength)
        * variance
        * f64::from(multiplier)
        * (1.0 + f64::from(attrs.intelligence) / 20.0);
    (raw.floor() as i32).max(1)
}

/// Working copy of one side
struct Fighter<'a> {
    hero: &'a Hero,
    skill: &'a Skill,
    health: i32,
    mana: i32,
}

impl<'a> Fighter<'a> {
    fn new(hero: &'a Hero, skill: &'a Skill) -> Self {
        Self {
            hero,
            skill,
            health: hero.max_health(),
            mana: hero.mana,
        }
    }

    fn standing(&self) -> bool {
        self.health > 0
    }
}

/// Ephemeral state of one battle
struct BattleState<'a> {
    turn: u32,
    fighters: [Fighter<'a>; 2],
    log: Vec<String>,
}

impl<'a> BattleState<'a> {
    fn running(&self) -> bool {
        self.turn < MAX_TURNS && self.fighters.iter().all(Fighter::standing)
    }

    fn play_turn<R: RollSource + ?Sized>(&mut self, rolls: &mut R) {
        let critical = [
            rolls.next_roll() < critical_chance(self.fighters[0].hero.attributes.dexterity),
            rolls.next_roll() < critical_chance(self.fighters[1].hero.attributes.dexterity),
        ];
        let use_skill = [
            self.wants_skill(0, rolls.next_roll()),
            self.wants_skill(1, rolls.next_roll()),
        ];

        self.act(0, critical[0], use_skill[0], rolls);
        if self.fighters[1].standing() {
            self.act(1, critical[1], use_skill[1], rolls);
        }

        self.turn += 1;
    }

    fn wants_skill(&self, side: usize, roll: f64) -> bool {
        let fighter = &self.fighters[side];
        roll < SKILL_CHANCE && fighter.mana >= fighter.skill.cost
    }

    fn act<R: RollSource + ?Sized>(
        &mut self,
        side: usize,
        critical: bool,
        use_skill: bool,
        rolls: &mut R,
    ) {
        let target = 1 - side;
        let attacker = self.fighters[side].hero;
        let defender = self.fighters[target].hero;

        if use_skill {
            let skill = self.fighters[side].skill;
            let damage = skill.damage(&attacker.attributes);
            let mana = (self.fighters[side].mana - skill.cost).max(0);
            self.fighters[side].mana = mana;
            self.fighters[target].health -= damage;
            self.log.push(format!(
                "{} usa {} causando {} de dano a {} (Mana: {})",
                attacker.name, skill.name, damage, defender.name, mana
            ));
            return;
        }

        if rolls.next_roll() < hit_chance(attacker.attributes.dexterity) {
            let damage = basic_attack_damage(attacker, rolls.next_roll(), critical);
            self.fighters[target].health -= damage;
            let verb = if critical {
                "acerta um golpe crítico"
            } else {
                "ataca"
            };
            self.log.push(format!(
                "{} {} causando {} de dano a {} (Vida restante: {})",
                attacker.name,
                verb,
                damage,
                defender.name,
                self.fighters[target].health.max(0)
            ));
        } else {
            self.log.push(format!(
                "{} erra o ataque contra {}",
                attacker.name, defender.name
            ));
        }
    }
}

fn validate(hero: &Hero) -> Result<&Skill, CombatError> {
    if !hero.attributes.in_range() {
        return Err(CombatError::InvalidCombatant(format!(
            "{} has attributes outside the allowed range",
            hero.name
        )));
    }
    if hero.attributes.constitution <= 0 {
        return Err(CombatError::InvalidCombatant(format!(
            "{} has no constitution",
            hero.name
        )));
    }
    hero.primary_skill().ok_or_else(|| {
        CombatError::InvalidCombatant(format!("{} has no skills", hero.name))
    })
}

/// Run a full battle between `a` and `b`
pub fn run_battle<R: RollSource + ?Sized>(
    a: &Hero,
    b: &Hero,
    rolls: &mut R,
) -> Result<BattleResult, CombatError> {
    if a.id == b.id {
        return Err(CombatError::InvalidCombatant(
            "a hero cannot battle itself".to_string(),
        ));
    }
    let skill_a = validate(a)?;
    let skill_b = validate(b)?;

    let mut state = BattleState {
        turn: 0,
        fighters: [Fighter::new(a, skill_a), Fighter::new(b, skill_b)],
        log: Vec::new(),
    };

    while state.running() {
        state.play_turn(rolls);
    }

    let [health_a, health_b] = [state.fighters[0].health, state.fighters[1].health];
    let outcome = if health_a > health_b {
        BattleOutcome::Victory { winner: a.id }
    } else if health_b > health_a {
        BattleOutcome::Victory { winner: b.id }
    } else {
        BattleOutcome::Draw
    };

    match outcome {
        BattleOutcome::Victory { winner } => {
            let name = if winner == a.id { &a.name } else { &b.name };
            state.log.push(format!("{} vence a batalha!", name));
        }
        BattleOutcome::Draw => {
            state.log.push(format!(
                "A batalha termina em empate entre {} e {}!",
                a.name, b.name
            ));
        }
    }

    Ok(BattleResult {
        combatants: [a.id, b.id],
        outcome,
        log: state.log,
        final_health: [health_a, health_b],
        final_mana: [state.fighters[0].mana, state.fighters[1].mana],
        turns: state.turn,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::rolls::{RandomRolls, ScriptedRolls};
    use crate::domain::value_objects::Attributes;

    /// Rolls high enough that nothing crits, no skill fires and every attack misses
    const NOTHING_HAPPENS: f64 = 0.99;

    fn hero(name: &str, class: &str, attrs: Attributes) -> Hero {
        Hero::new(name, class, "Humano", attrs)
    }

    #[test]
    fn test_same_hero_is_rejected() {
        let a = hero("Aria", "Mago", Attributes::new(3, 4, 7, 4));
        let err = run_battle(&a, &a.clone(), &mut ScriptedRolls::new(vec![0.5])).unwrap_err();
        assert!(matches!(err, CombatError::InvalidCombatant(_)));
    }

    #[test]
    fn test_zero_constitution_is_rejected() {
        let a = hero("Aria", "Mago", Attributes::new(3, 4, 7, 4));
        let b = hero("Bran", "Guerreiro", Attributes::new(6, 6, 6, 0));
        assert!(run_battle(&a, &b, &mut ScriptedRolls::new(vec![0.5])).is_err());
    }

    #[test]
    fn test_hero_without_skills_is_rejected() {
        let a = hero("Aria", "Mago", Attributes::new(3, 4, 7, 4));
        let mut b = hero("Bran", "Guerreiro", Attributes::new(6, 4, 3, 5));
        b.skills.clear();
        assert!(run_battle(&a, &b, &mut ScriptedRolls::new(vec![0.5])).is_err());
    }

    #[test]
    fn test_equal_health_at_turn_cap_is_a_draw() {
        let a = hero("Aria", "Mago", Attributes::new(3, 4, 7, 4));
        let b = hero("Bran", "Guerreiro", Attributes::new(6, 4, 4, 4));
        let result = run_battle(&a, &b, &mut ScriptedRolls::new(vec![NOTHING_HAPPENS])).unwrap();

        assert_eq!(result.outcome, BattleOutcome::Draw);
        assert_eq!(result.turns, MAX_TURNS);
        assert_eq!(result.final_health, [40, 40]);
        assert_eq!(result.log.len(), MAX_TURNS as usize * 2 + 1);
        assert_eq!(result.log[0], "Aria erra o ataque contra Bran");
        assert_eq!(result.log[1], "Bran erra o ataque contra Aria");
        assert_eq!(
            result.log.last().unwrap(),
            "A batalha termina em empate entre Aria e Bran!"
        );
    }

    #[test]
    fn test_higher_health_wins_at_turn_cap() {
        let a = hero("Aria", "Mago", Attributes::new(3, 4, 6, 5));
        let b = hero("Bran", "Guerreiro", Attributes::new(6, 4, 4, 4));
        let result = run_battle(&a, &b, &mut ScriptedRolls::new(vec![NOTHING_HAPPENS])).unwrap();

        assert_eq!(result.outcome, BattleOutcome::Victory { winner: a.id });
        assert_eq!(result.log.last().unwrap(), "Aria vence a batalha!");
    }

    #[test]
    fn test_fallen_defender_does_not_strike_back() {
        let a = hero("Aria", "Guerreiro", Attributes::new(8, 5, 2, 3));
        let b = hero("Bran", "Ladino", Attributes::new(7, 6, 4, 1));
        // crit A, no crit B, no skills, A hits with a high damage roll
        let mut rolls = ScriptedRolls::new(vec![0.0, NOTHING_HAPPENS, 0.9, 0.9, 0.0, 0.99]);
        let result = run_battle(&a, &b, &mut rolls).unwrap();

        // floor(8 * 0.995 * 2 * 1.1) = 17
        assert_eq!(result.turns, 1);
        assert_eq!(rolls.consumed(), 6);
        assert_eq!(result.final_health, [30, -7]);
        assert_eq!(result.displayed_health(), [30, 0]);
        assert_eq!(
            result.log,
            vec![
                "Aria acerta um golpe crítico causando 17 de dano a Bran (Vida restante: 0)"
                    .to_string(),
                "Aria vence a batalha!".to_string(),
            ]
        );
        assert_eq!(result.winner_id(), Some(a.id));
    }

    #[test]
    fn test_skill_needs_enough_mana() {
        // Rajada Arcana costs 4; with 3 mana the skill roll is wasted and A attacks.
        let a = hero("Aria", "Mago", Attributes::new(4, 3, 8, 3)).with_progress(1, 0, 3);
        let b = hero("Bran", "Guerreiro", Attributes::new(6, 4, 6, 2));
        let script = vec![
            NOTHING_HAPPENS, // crit A
            NOTHING_HAPPENS, // crit B
            0.0,             // skill A: would fire, but mana is short
            NOTHING_HAPPENS, // skill B
            0.0,             // hit A
            0.0,             // damage A: floor(4 * 0.5 * 1.4) = 2
            NOTHING_HAPPENS, // hit B misses
        ];
        let result = run_battle(&a, &b, &mut ScriptedRolls::new(script)).unwrap();

        assert_eq!(
            result.log[0],
            "Aria ataca causando 2 de dano a Bran (Vida restante: 18)"
        );
        assert!(result.log.iter().all(|line| !line.contains(" usa ")));
        assert_eq!(result.final_mana[0], 3);
        assert_eq!(result.turns, 10);
        assert_eq!(result.outcome, BattleOutcome::Victory { winner: a.id });
    }

    #[test]
    fn test_skill_spends_mana() {
        let a = hero("Bran", "Guerreiro", Attributes::new(6, 4, 3, 5));
        let b = hero("Cora", "Mago", Attributes::new(1, 3, 4, 10));
        let script = vec![
            NOTHING_HAPPENS, // crit A
            NOTHING_HAPPENS, // crit B
            0.0,             // skill A fires
            NOTHING_HAPPENS, // skill B
            NOTHING_HAPPENS, // hit B misses
        ];
        let result = run_battle(&a, &b, &mut ScriptedRolls::new(script)).unwrap();

        assert_eq!(
            result.log[0],
            "Bran usa Golpe Feroz causando 12 de dano a Cora (Mana: 7)"
        );
        assert_eq!(result.log[1], "Cora erra o ataque contra Bran");
        assert_eq!(
            result.log[2],
            "Bran usa Golpe Feroz causando 12 de dano a Cora (Mana: 4)"
        );
    }

    #[test]
    fn test_identical_rolls_give_identical_battles() {
        let a = hero("Aria", "Arqueiro", Attributes::new(4, 7, 3, 4));
        let b = hero("Bran", "Guerreiro", Attributes::new(6, 4, 3, 5));

        let first = run_battle(&a, &b, &mut RandomRolls::seeded(2024)).unwrap();
        let second = run_battle(&a, &b, &mut RandomRolls::seeded(2024)).unwrap();
        assert_eq!(first, second);

        let script = vec![0.12, 0.5, 0.31, 0.05, 0.4, 0.77, 0.2, 0.9, 0.01];
        let third = run_battle(&a, &b, &mut ScriptedRolls::new(script.clone())).unwrap();
        let fourth = run_battle(&a, &b, &mut ScriptedRolls::new(script)).unwrap();
        assert_eq!(third.log, fourth.log);
    }

    #[test]
    fn test_random_battles_terminate_consistently() {
        let classes = ["Guerreiro", "Mago", "Arqueiro", "Ladino", "Bardo"];
        let spreads = [
            Attributes::new(6, 4, 4, 4),
            Attributes::new(3, 4, 7, 4),
            Attributes::new(4, 7, 3, 4),
            Attributes::new(1, 1, 6, 10),
            Attributes::new(10, 5, 2, 1),
        ];

        for seed in 0..200u64 {
            let i = (seed % 5) as usize;
            let j = ((seed / 5) % 5) as usize;
            let a = hero("Aria", classes[i], spreads[i]);
            let b = hero("Bran", classes[j], spreads[j]);
            let result = run_battle(&a, &b, &mut RandomRolls::seeded(seed)).unwrap();

            assert!(result.turns >= 1 && result.turns <= MAX_TURNS);
            let [ha, hb] = result.final_health;
            match result.outcome {
                BattleOutcome::Victory { winner } if winner == a.id => assert!(ha > hb),
                BattleOutcome::Victory { winner } => {
                    assert_eq!(winner, b.id);
                    assert!(hb > ha);
                }
                BattleOutcome::Draw => {
                    assert_eq!(ha, hb);
                    assert_eq!(result.turns, MAX_TURNS);
                }
            }
            assert!(result
                .log
                .iter()
                .all(|line| line.contains("Aria") || line.contains("Bran")));
            assert!(result.final_mana.iter().all(|m| *m >= 0));
        }
    }

    #[test]
    fn test_hit_chance_floor() {
        assert_eq!(hit_chance(1), MIN_HIT_CHANCE);
        assert_eq!(hit_chance(10), 0.5);
    }

    #[test]
    fn test_basic_attack_damage_is_at_least_one() {
        let weakling = hero("Ema", "Mago", Attributes::new(1, 6, 1, 10));
        assert_eq!(basic_attack_damage(&weakling, 0.0, false), 1);
    }
}
