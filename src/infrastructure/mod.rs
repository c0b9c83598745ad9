//! Infrastructure layer - Adapters for storage, configuration, the CLI and wiring

pub mod cli;
pub mod config;
pub mod persistence;
pub mod state;
