//! EstateHub Server: property listings and photo serving.
//!
//! Main entry point that loads configuration, opens the catalog store and
//! starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use estatehub_core::config::AppConfig;
use estatehub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("ESTATEHUB_CONFIG").unwrap_or_else(|_| "config/default".to_string());
    let env = std::env::var("ESTATEHUB_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load_from(&config_path, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_current_span(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        provider = ?config.database.provider,
        storage_root = %config.storage.root_path,
        "Opening catalog store"
    );
    let store = estatehub_database::connect_store(&config.database).await?;
    estatehub_api::run_server(config, store).await
}
