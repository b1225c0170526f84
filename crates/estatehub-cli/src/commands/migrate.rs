//! Database migration management commands.

use clap::{Args, Subcommand};

use estatehub_core::config::{AppConfig, CatalogProvider};
use estatehub_core::error::AppError;
use estatehub_database::DatabasePool;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        MigrateCommand::Run => {
            if config.database.provider == CatalogProvider::Memory {
                output::print_warning("The in-memory catalog has no schema to migrate.");
                return Ok(());
            }
            let db = DatabasePool::connect(&config.database).await?;
            println!("Running database migrations...");
            estatehub_database::migration::run_migrations(db.pool()).await?;
            db.close().await;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
