//! Hero Forge - Hero creation, arena battles and mission tracking
//!
//! The forge:
//! - Stores heroes and missions in a single JSON document
//! - Runs turn-based battles between two heroes
//! - Rewards winners with XP, levels, mana and mission completions

mod application;
mod domain;
mod infrastructure;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::cli::Cli;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hero_forge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::debug!("Configuration loaded");
    tracing::debug!("  Data file: {}", config.data_path.display());
    tracing::debug!("  Turn delay: {:?}", config.turn_delay);

    let state = AppState::new(config).await?;

    cli.run(&state).await
}
