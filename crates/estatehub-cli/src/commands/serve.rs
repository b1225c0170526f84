//! Start the EstateHub server.

use clap::Args;

use estatehub_core::config::AppConfig;
use estatehub_core::error::AppError;

use crate::output;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting EstateHub server...");
    output::print_kv("Address", &config.server.bind_address());
    output::print_kv("Storage root", &config.storage.root_path);

    let store = super::open_store(&config).await?;
    estatehub_api::run_server(config, store).await
}
