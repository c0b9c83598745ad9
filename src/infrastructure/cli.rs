//! Command-line driver for the forge
//!
//! Each subcommand maps onto one application service call. Battles are
//! replayed line by line with the configured turn delay.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::application::services::{
    BattleReport, BattleService, CreateHeroRequest, HeroService, MissionService,
    UpdateHeroRequest,
};
use crate::domain::entities::{Hero, Mission};
use crate::domain::value_objects::{Attributes, HeroId, MissionId};
use crate::infrastructure::state::AppState;

/// Forge heroes, send them to the arena and track missions
#[derive(Parser, Debug)]
#[command(name = "hero-forge")]
#[command(about = "Hero forging and arena battles", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all heroes
    Heroes,

    /// Show one hero in full
    Show { id: HeroId },

    /// Forge a new hero
    Create(CreateArgs),

    /// Edit an existing hero
    Edit(EditArgs),

    /// Write a new story for a hero
    Story { id: HeroId },

    /// Delete a hero
    Delete { id: HeroId },

    /// List, generate, complete or reset missions
    Missions(MissionArgs),

    /// Fight two heroes in the arena
    Battle { first: HeroId, second: HeroId },
}

#[derive(Args, Debug)]
pub struct AttributeArgs {
    #[arg(long = "str")]
    pub strength: i32,
    #[arg(long = "dex")]
    pub dexterity: i32,
    #[arg(long = "int")]
    pub intelligence: i32,
    #[arg(long = "con")]
    pub constitution: i32,
}

impl From<AttributeArgs> for Attributes {
    fn from(args: AttributeArgs) -> Self {
        Attributes::new(
            args.strength,
            args.dexterity,
            args.intelligence,
            args.constitution,
        )
    }
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "Guerreiro")]
    pub class: String,
    #[arg(long, default_value = "Humano")]
    pub race: String,
    #[command(flatten)]
    pub attributes: AttributeArgs,
    /// Path or URL of a portrait
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: HeroId,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub class: Option<String>,
    #[arg(long)]
    pub race: Option<String>,
    /// New attributes as `str,dex,int,con`
    #[arg(long, value_parser = parse_attributes)]
    pub attributes: Option<Attributes>,
    #[arg(long)]
    pub story: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Args, Debug)]
#[group(multiple = false)]
pub struct MissionArgs {
    /// Restore the starting missions
    #[arg(long)]
    pub reset: bool,
    /// Add a random attribute mission
    #[arg(long)]
    pub generate: bool,
    /// Mark a mission completed
    #[arg(long, value_name = "ID")]
    pub complete: Option<MissionId>,
}

fn parse_attributes(value: &str) -> Result<Attributes, String> {
    let values = value
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid attribute value: {e}"))?;

    match values.as_slice() {
        [strength, dexterity, intelligence, constitution] => Ok(Attributes::new(
            *strength,
            *dexterity,
            *intelligence,
            *constitution,
        )),
        _ => Err(format!("expected 4 values, got {}", values.len())),
    }
}

impl Cli {
    pub async fn run(self, state: &AppState) -> Result<()> {
        match self.command {
            Command::Heroes => {
                let heroes = state.hero_service.list_heroes().await?;
                if heroes.is_empty() {
                    println!("Nenhum herói forjado ainda.");
                }
                for hero in &heroes {
                    println!("{}", hero_line(hero));
                }
            }
            Command::Show { id } => {
                let hero = state
                    .hero_service
                    .get_hero(id)
                    .await?
                    .with_context(|| format!("Hero not found: {}", id))?;
                print_hero(&hero);
            }
            Command::Create(args) => {
                let hero = state
                    .hero_service
                    .create_hero(CreateHeroRequest {
                        name: args.name,
                        class: args.class,
                        race: args.race,
                        attributes: args.attributes.into(),
                        image: args.image,
                    })
                    .await?;
                print_hero(&hero);
            }
            Command::Edit(args) => {
                let hero = state
                    .hero_service
                    .update_hero(
                        args.id,
                        UpdateHeroRequest {
                            name: args.name,
                            class: args.class,
                            race: args.race,
                            attributes: args.attributes,
                            story: args.story,
                            image: args.image,
                        },
                    )
                    .await?;
                print_hero(&hero);
            }
            Command::Story { id } => {
                let hero = state.hero_service.regenerate_story(id).await?;
                println!("{}", hero.story.unwrap_or_default());
            }
            Command::Delete { id } => {
                state.hero_service.delete_hero(id).await?;
                println!("Herói {} removido.", id);
            }
            Command::Missions(args) => {
                if args.reset {
                    state.mission_service.reset_missions().await?;
                } else if args.generate {
                    let mission = state.mission_service.generate_mission().await?;
                    println!("Nova missão: {}", mission.description);
                } else if let Some(id) = args.complete {
                    if !state.mission_service.complete_mission(id).await? {
                        println!("Missão já estava completa.");
                    }
                }
                for mission in state.mission_service.list_missions().await? {
                    println!("{}", mission_line(&mission));
                }
            }
            Command::Battle { first, second } => {
                let report = state.battle_service.start_battle(first, second).await?;
                replay(&report, state.config.turn_delay).await;
            }
        }
        Ok(())
    }
}

async fn replay(report: &BattleReport, delay: std::time::Duration) {
    println!("Nova missão: {}", report.generated_mission.description);
    for line in &report.log {
        println!("{}", line);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    let health = report.result.displayed_health();
    println!("Vida final: {} / {}", health[0], health[1]);
    if report.result.outcome.is_draw() {
        println!("Empate: nenhuma recompensa concedida.");
    }
    if let Some(mission_id) = report.completed_mission {
        tracing::debug!(%mission_id, "Battle completed a mission");
    }
    if let Some(winner) = &report.winner {
        println!(
            "{}: Nível {}, XP {}, Mana {}{}",
            winner.name,
            winner.level,
            winner.xp,
            winner.mana,
            if report.leveled_up { " (subiu de nível!)" } else { "" }
        );
    }
}

fn hero_line(hero: &Hero) -> String {
    format!(
        "{}  {} ({} {}) - Nível {}, XP {}",
        hero.id, hero.name, hero.class, hero.race, hero.level, hero.xp
    )
}

fn print_hero(hero: &Hero) {
    println!("{}", hero_line(hero));
    let a = &hero.attributes;
    println!(
        "  Força {}  Destreza {}  Inteligência {}  Constituição {}",
        a.strength, a.dexterity, a.intelligence, a.constitution
    );
    println!("  Vida {}  Mana {}", hero.max_health(), hero.mana);
    for skill in &hero.skills {
        println!("  Habilidade: {} (custo {})", skill.name, skill.cost);
    }
    if !hero.battle_cry.is_empty() {
        println!("  Grito de guerra: {}", hero.battle_cry);
    }
    println!("  {} / {}", hero.alignment, hero.objective);
    if let Some(story) = &hero.story {
        println!("  {}", story);
    }
}

fn mission_line(mission: &Mission) -> String {
    format!(
        "[{}] {}  {}{}",
        if mission.completed { "x" } else { " " },
        mission.id,
        mission.description,
        mission
            .reward
            .as_deref()
            .map(|r| format!(" (Recompensa: {r})"))
            .unwrap_or_default()
    )
}
