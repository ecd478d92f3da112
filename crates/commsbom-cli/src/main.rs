mod context;
mod quote;
mod save;
mod saved;
mod session_file;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::saved::SavedCommands;

#[derive(Debug, Parser)]
#[command(name = "commsbom")]
#[command(about = "Intercom system designer: bill of materials, costing and validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Price and validate a session file
    Quote {
        /// Session YAML file
        session: PathBuf,
        /// Use built-in prices without contacting the pricing feed
        #[arg(long)]
        offline: bool,
        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the product catalog with effective prices
    Catalog {
        #[arg(long)]
        offline: bool,
    },
    /// Save a session file's design
    Save {
        session: PathBuf,
        /// Also email the design through the form relay
        #[arg(long)]
        notify: bool,
        #[arg(long)]
        offline: bool,
    },
    /// Manage saved configurations
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = commsbom_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Commands::Quote {
            session,
            offline,
            json,
        } => quote::run_quote(&config, &session, offline, json).await,
        Commands::Catalog { offline } => quote::run_catalog(&config, offline).await,
        Commands::Save {
            session,
            notify,
            offline,
        } => save::run_save(&config, &session, notify, offline).await,
        Commands::Saved { command } => saved::run_saved(&config, &command),
    }
}
