use commsbom_core::{Catalog, Rates};
use serde::Serialize;

use crate::client::PricingClient;

/// What happened when the designer tried to load live pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PricingOutcome {
    /// The feed was applied.
    Loaded { version: String },
    /// The built-in catalog and rates are in use, unchanged.
    Defaults { reason: String },
}

impl PricingOutcome {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, PricingOutcome::Loaded { .. })
    }
}

/// Fetches the feed (if enabled) and applies it to `catalog` and `rates`.
///
/// Never fails: any error leaves both untouched and is reported as
/// [`PricingOutcome::Defaults`].
pub async fn load_pricing(
    client: Option<&PricingClient>,
    catalog: &mut Catalog,
    rates: &mut Rates,
) -> PricingOutcome {
    let Some(client) = client else {
        return PricingOutcome::Defaults {
            reason: "pricing feed disabled".to_owned(),
        };
    };

    match client.fetch().await {
        Ok(feed) => {
            let summary = feed.apply_to(catalog, rates);
            let version = feed.version.to_string();
            tracing::info!(
                version = %version,
                patched = summary.patched,
                skipped = summary.skipped,
                "pricing loaded"
            );
            PricingOutcome::Loaded { version }
        }
        Err(e) => {
            tracing::error!(url = %client.url(), error = %e, "could not load pricing; using defaults");
            PricingOutcome::Defaults {
                reason: e.to_string(),
            }
        }
    }
}
