//! CLI command definitions and dispatch.

pub mod migrate;
pub mod photo;
pub mod property;
pub mod serve;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use estatehub_core::config::{AppConfig, CatalogProvider};
use estatehub_core::error::AppError;
use estatehub_database::CatalogStore;

use crate::output::OutputFormat;

/// EstateHub: property listings and their photo galleries
#[derive(Debug, Parser)]
#[command(name = "estatehub", version, about, long_about = None)]
pub struct Cli {
    /// Path to the base configuration file
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Configuration overlay to apply (`config/<env>.toml`)
    #[arg(long, env = "ESTATEHUB_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the EstateHub HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Property management
    Property(property::PropertyArgs),
    /// Photo management
    Photo(photo::PhotoArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config, &self.env)?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Property(args) => property::execute(args, &config, self.format).await,
            Commands::Photo(args) => photo::execute(args, &config, self.format).await,
        }
    }
}

/// Helper: open the configured catalog store
pub async fn open_store(config: &AppConfig) -> Result<Arc<dyn CatalogStore>, AppError> {
    estatehub_database::connect_store(&config.database).await
}

/// Refuse catalog writes that would vanish when the process exits.
pub fn require_persistent_catalog(config: &AppConfig, action: &str) -> Result<(), AppError> {
    if config.database.provider == CatalogProvider::Memory {
        return Err(AppError::configuration(format!(
            "`{action}` needs a persistent catalog; the in-memory provider forgets every change on exit"
        )));
    }
    Ok(())
}
