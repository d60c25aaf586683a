mod catalog;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use catalog::CatalogCommands;

const LOG_LEVEL_VAR: &str = "PORTFOLIO_LOG_LEVEL";

#[derive(Debug, Parser)]
#[command(name = "portfolio")]
#[command(about = "Author portfolio catalog tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load and browse the published book catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    // Offline commands still run when configuration is incomplete.
    let config = portfolio_core::load_app_config_from_env();
    let log_level = match &config {
        Ok(config) => config.log_level.clone(),
        Err(_) => std::env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "info".to_string()),
    };
    init_tracing(&log_level)?;

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Catalog { command }) => catalog::run(command, config).await?,
        None => println!("portfolio: run `portfolio catalog --help` for available commands"),
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `log_level` applies.
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
