//! Aggregation engine: locations + infrastructure → product quantities.
//!
//! Per-location counts map straight onto products; derived equipment
//! (microphones, antennas, chargers, bridge, radio interface, switches) is
//! computed once from the totals across all locations.

use crate::catalog::{Catalog, ProductId};
use crate::infrastructure::InfrastructureDetails;
use crate::location::{KeyPanelMount, Location};
use crate::quantity::QuantityMap;

/// Wireless users served by one active antenna.
pub const ANTENNA_RATIO: u32 = 4;
/// Wireless beltpacks per battery charger.
pub const CHARGER_RATIO: u32 = 6;
/// Wired PoE devices planned per network switch.
pub const SWITCH_DEVICE_RATIO: u32 = 10;

/// Totals gathered while walking the locations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Totals {
    sites: u32,
    key_panels: u32,
    wireless_users: u32,
    wired_poe_devices: u32,
}

/// Builds the quantity map for a set of locations.
///
/// Pure and deterministic: identical inputs always produce identical maps.
/// Manual pseudo-locations carry no devices and are skipped.
#[must_use]
pub fn aggregate(
    catalog: &Catalog,
    locations: &[Location],
    infra: &InfrastructureDetails,
) -> QuantityMap {
    let mut map = QuantityMap::zeroed(catalog);
    let mut totals = Totals::default();

    for loc in locations.iter().filter(|l| !l.is_manual) {
        totals.sites = totals.sites.saturating_add(1);
        add_location(&mut map, &mut totals, loc);
    }

    map.add(ProductId::Gooseneck300, totals.key_panels);

    if totals.wireless_users > 0 {
        let antennas = totals.wireless_users.div_ceil(ANTENNA_RATIO);
        map.add(ProductId::ActiveAntenna, antennas);
        // Antennas are network devices; chargers are not.
        totals.wired_poe_devices = totals
            .wired_poe_devices
            .saturating_add(antennas);
        map.add(
            ProductId::BatteryCharger,
            totals.wireless_users.div_ceil(CHARGER_RATIO),
        );
    }

    if infra.is_multi_site() && totals.sites > 0 {
        map.add(ProductId::BridgeInterface, 1);
        totals.wired_poe_devices = totals.wired_poe_devices.saturating_add(1);
    }

    if infra.needs_walkie_talkie_interface {
        map.add(ProductId::RadioInterface, 1);
        totals.wired_poe_devices = totals.wired_poe_devices.saturating_add(1);
    }

    let current_switches: u32 = catalog
        .products()
        .iter()
        .filter(|p| p.is_switch)
        .map(|p| map.get(p.id))
        .fold(0, u32::saturating_add);
    let shortfall =
        required_switches(totals.wired_poe_devices).saturating_sub(current_switches);
    map.add(ProductId::Switch8, shortfall);

    map
}

/// Switches needed for `wired_poe_devices`; zero demand needs no network.
#[must_use]
pub fn required_switches(wired_poe_devices: u32) -> u32 {
    if wired_poe_devices == 0 {
        0
    } else {
        wired_poe_devices.div_ceil(SWITCH_DEVICE_RATIO).max(1)
    }
}

fn add_location(map: &mut QuantityMap, totals: &mut Totals, loc: &Location) {
    if loc.key_panel_count > 0 {
        let panel = match loc.key_panel_mount {
            KeyPanelMount::Rackmount => ProductId::KeyPanelRack,
            KeyPanelMount::Desktop => ProductId::KeyPanelDesktop,
        };
        map.add(panel, loc.key_panel_count);
        totals.key_panels = totals.key_panels.saturating_add(loc.key_panel_count);
        totals.wired_poe_devices = totals
            .wired_poe_devices
            .saturating_add(loc.key_panel_count);
    }

    map.add(ProductId::WiredBeltpack, loc.wired_count);
    totals.wired_poe_devices = totals
        .wired_poe_devices
        .saturating_add(loc.wired_count);

    map.add(ProductId::WallStation, loc.wall_station_count);
    totals.wired_poe_devices = totals
        .wired_poe_devices
        .saturating_add(loc.wall_station_count);

    if loc.wireless_count > 0 {
        let beltpack = if loc.is_heavy_duty {
            ProductId::WirelessBeltpackSport
        } else {
            ProductId::WirelessBeltpack
        };
        map.add(beltpack, loc.wireless_count);
        totals.wireless_users = totals
            .wireless_users
            .saturating_add(loc.wireless_count);
    }

    let split = &loc.headset_split;
    map.add(ProductId::HeadsetSingle, split.std_one_ear);
    map.add(ProductId::HeadsetDual, split.std_dual_ear);
    map.add(ProductId::ComfortHeadsetSingle, split.comfort_one_ear);
    map.add(ProductId::ComfortHeadsetDual, split.comfort_dual_ear);
    map.add(ProductId::Handset, split.handset);
    map.add(ProductId::CustomerHeadset, split.customer_supplied);
    map.add(ProductId::Beacon, loc.beacon_count);
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
