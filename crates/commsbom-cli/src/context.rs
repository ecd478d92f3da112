//! Shared setup for commands: catalog with live pricing, and the store.

use commsbom_core::{AppConfig, Catalog, Rates};
use commsbom_pricing::{load_pricing, PricingClient, PricingOutcome};
use commsbom_store::{ConfigStore, FileBlobStore};

pub(crate) struct Pricing {
    pub catalog: Catalog,
    pub rates: Rates,
    pub outcome: PricingOutcome,
}

/// Built-in catalog, patched by the remote feed unless `offline`.
pub(crate) async fn load_catalog(config: &AppConfig, offline: bool) -> anyhow::Result<Pricing> {
    let mut catalog = Catalog::builtin();
    let mut rates = Rates::default();
    let client = if offline {
        None
    } else {
        PricingClient::from_config(config)?
    };
    let outcome = load_pricing(client.as_ref(), &mut catalog, &mut rates).await;
    Ok(Pricing {
        catalog,
        rates,
        outcome,
    })
}

pub(crate) fn print_pricing_outcome(outcome: &PricingOutcome) {
    match outcome {
        PricingOutcome::Loaded { version } => println!("pricing: v{version}"),
        PricingOutcome::Defaults { reason } => {
            println!("pricing: built-in defaults ({reason})");
        }
    }
}

pub(crate) fn open_store(config: &AppConfig) -> ConfigStore<FileBlobStore> {
    ConfigStore::new(FileBlobStore::new(
        config.store_dir.clone(),
        Some(config.store_quota_bytes),
    ))
}
