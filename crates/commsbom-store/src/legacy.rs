//! Migration of the schema-1 blob: a bare JSON array written by the
//! browser-based designer.
//!
//! Schema 1 carried the retired far-distance topology flags
//! (`farDistance`, `wirelessAtFar`, `wiredAtFar`). They are dropped here;
//! quantities stored with them (backbone switch, fiber modules) are kept
//! exactly as saved.

use chrono::{DateTime, Utc};
use commsbom_core::{
    cost, validate, Catalog, HeadsetSplit, InfrastructureDetails, KeyPanelMount, Location,
    MultiSite, QuantityMap, Rates, ValidationStatus,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::types::SavedConfiguration;

/// Namespace for ids derived from schema-1 numeric timestamps.
const LEGACY_NAMESPACE: Uuid = Uuid::from_u128(0x6c0f_2d0e_8a1b_4f5e_9b7a_3c2d_1e0f_4a5b);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LegacyConfig {
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    user: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    organization: Option<String>,
    #[serde(default)]
    products: QuantityMap,
    #[serde(default)]
    locations: Vec<LegacyLocation>,
    #[serde(default)]
    infrastructure: LegacyInfrastructure,
    #[serde(default)]
    total_cost: Option<Decimal>,
    #[serde(default)]
    validation_status: Option<ValidationStatus>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct LegacyLocation {
    id: Option<i64>,
    name: String,
    key_panel_count: u32,
    key_panel_mount: KeyPanelMount,
    wired_count: u32,
    wireless_count: u32,
    wall_station_count: u32,
    beacon_count: u32,
    is_heavy_duty: bool,
    headset_split: LegacyHeadsetSplit,
    is_manual: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct LegacyHeadsetSplit {
    std_one_ear: u32,
    std_dual_ear: u32,
    comfort_one_ear: u32,
    comfort_dual_ear: u32,
    handset: u32,
    customer_supplied: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct LegacyInfrastructure {
    is_multi_site: Option<String>,
    far_distance: Option<String>,
    wireless_at_far: bool,
    wired_at_far: bool,
    needs_walkie_talkie_interface: bool,
}

impl LegacyConfig {
    /// Converts to the current schema.
    pub(crate) fn migrate(self) -> SavedConfiguration {
        let infra = &self.infrastructure;
        if infra.far_distance.as_deref() == Some("yes") {
            tracing::warn!(
                config = %self.name,
                wired_at_far = infra.wired_at_far,
                wireless_at_far = infra.wireless_at_far,
                "dropping retired far-distance topology flags; stored quantities kept as saved"
            );
        }

        let infrastructure = InfrastructureDetails {
            is_multi_site: if infra.is_multi_site.as_deref() == Some("yes") {
                MultiSite::Yes
            } else {
                MultiSite::No
            },
            needs_walkie_talkie_interface: infra.needs_walkie_talkie_interface,
        };

        let locations = self
            .locations
            .into_iter()
            .enumerate()
            .map(|(index, loc)| migrate_location(self.id, index, loc))
            .collect();

        let products = self.products.sparse();
        let validation_status = self.validation_status.unwrap_or_else(|| {
            let catalog = Catalog::builtin();
            validate(&cost(&catalog, &Rates::default(), &products).items).status
        });

        SavedConfiguration {
            id: Uuid::new_v5(&LEGACY_NAMESPACE, format!("config:{}", self.id).as_bytes()),
            name: self.name,
            designer: self.user,
            email: self.email.unwrap_or_default(),
            organization: self.organization.unwrap_or_default(),
            saved_at: DateTime::<Utc>::from_timestamp_millis(self.id).unwrap_or_default(),
            products,
            locations,
            infrastructure,
            total_cost: commsbom_core::round_cents(self.total_cost.unwrap_or(Decimal::ZERO)),
            validation_status,
        }
    }
}

fn migrate_location(config_id: i64, index: usize, loc: LegacyLocation) -> Location {
    let seed = match loc.id {
        Some(id) => format!("location:{id}"),
        None => format!("location:{config_id}:{index}"),
    };
    let split = loc.headset_split;
    Location {
        id: Uuid::new_v5(&LEGACY_NAMESPACE, seed.as_bytes()),
        name: loc.name,
        key_panel_count: loc.key_panel_count,
        key_panel_mount: loc.key_panel_mount,
        wired_count: loc.wired_count,
        wireless_count: loc.wireless_count,
        is_heavy_duty: loc.is_heavy_duty,
        wall_station_count: loc.wall_station_count,
        beacon_count: loc.beacon_count,
        headset_split: HeadsetSplit {
            std_one_ear: split.std_one_ear,
            std_dual_ear: split.std_dual_ear,
            comfort_one_ear: split.comfort_one_ear,
            comfort_dual_ear: split.comfort_dual_ear,
            handset: split.handset,
            customer_supplied: split.customer_supplied,
        },
        is_manual: loc.is_manual,
    }
}
