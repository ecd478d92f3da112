//! `saved` subcommands: browse and manage stored configurations.

use anyhow::bail;
use clap::Subcommand;
use commsbom_core::{format_usd, AppConfig, Catalog};
use uuid::Uuid;

use crate::context::open_store;

#[derive(Debug, Subcommand)]
pub enum SavedCommands {
    /// List saved configurations, newest first
    List,
    /// Show one saved configuration
    Show {
        /// Configuration id as printed by `saved list`
        id: Uuid,
    },
    /// Delete one saved configuration
    Delete { id: Uuid },
    /// Delete every saved configuration
    Clear,
}

/// # Errors
///
/// Returns an error if the store cannot be read or written, or the id is
/// unknown.
pub(crate) fn run_saved(config: &AppConfig, command: &SavedCommands) -> anyhow::Result<()> {
    let mut store = open_store(config);
    match command {
        SavedCommands::List => {
            let configs = store.list()?;
            if configs.is_empty() {
                println!("no saved configurations; run `save` first");
                return Ok(());
            }
            println!(
                "{:<38}{:<18}{:<8}{:>14}  NAME",
                "ID", "SAVED", "STATUS", "TOTAL"
            );
            for cfg in &configs {
                println!(
                    "{:<38}{:<18}{:<8}{:>14}  {} ({})",
                    cfg.id.to_string(),
                    cfg.saved_at.format("%Y-%m-%d %H:%M").to_string(),
                    cfg.validation_status.to_string(),
                    format_usd(cfg.total_cost),
                    cfg.name,
                    cfg.designer
                );
            }
        }
        SavedCommands::Show { id } => {
            let Some(cfg) = store.get(*id)? else {
                bail!("no saved configuration with id {id}");
            };
            println!("{} by {}", cfg.name, cfg.designer);
            if !cfg.organization.is_empty() {
                println!("organization: {}", cfg.organization);
            }
            if !cfg.email.is_empty() {
                println!("email: {}", cfg.email);
            }
            println!("saved: {}", cfg.saved_at.to_rfc3339());
            println!("status: {}", cfg.validation_status);
            println!("total: {}", format_usd(cfg.total_cost));
            for location in cfg.locations.iter().filter(|l| !l.is_manual) {
                println!("location: {} ({} devices)", location.name, location.device_count());
            }

            let catalog = Catalog::builtin();
            println!();
            for (product_id, quantity) in cfg.products.iter() {
                let name = catalog.get(product_id).map_or("", |p| p.name.as_str());
                println!("{quantity:>5} x {product_id:<10}{name}");
            }
        }
        SavedCommands::Delete { id } => {
            if !store.delete(*id)? {
                bail!("no saved configuration with id {id}");
            }
            println!("deleted {id}");
        }
        SavedCommands::Clear => {
            store.clear()?;
            println!("cleared all saved configurations");
        }
    }
    Ok(())
}
