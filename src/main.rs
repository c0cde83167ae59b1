//! item-service - record management with a bounded batch processor

#![allow(missing_docs)]

use clap::Parser;
use item_service::config::{Config, load_config_with_precedence};
use item_service::server;
use item_service::utils::logging::init_logging;
use std::process::ExitCode;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "item-service", version, about)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long, env = "ITEM_SERVICE_CONFIG")]
    config: Option<String>,

    /// Port override
    #[arg(short, long)]
    port: Option<u16>,

    /// Ignore ITEM_SERVICE_* environment variables
    #[arg(long)]
    no_env: bool,
}

async fn load_config(args: &Args) -> item_service::Result<Config> {
    let service = load_config_with_precedence(args.config.as_deref(), !args.no_env).await?;
    let mut config = Config { service };
    if let Some(port) = args.port {
        config.service.server.port = port;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let config = match load_config(&args).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match server::builder::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
