use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LocationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPanelMount {
    #[default]
    Desktop,
    Rackmount,
}

/// How a location's headsets are split across the headset products.
///
/// `customer_supplied` is never entered directly; it is derived when the
/// location is finalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadsetSplit {
    pub std_one_ear: u32,
    pub std_dual_ear: u32,
    pub comfort_one_ear: u32,
    pub comfort_dual_ear: u32,
    pub handset: u32,
    pub customer_supplied: u32,
}

impl HeadsetSplit {
    /// Headsets explicitly allocated to purchasable products.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.checked_allocated().unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.allocated().saturating_add(self.customer_supplied)
    }

    fn checked_allocated(&self) -> Option<u32> {
        self.std_one_ear
            .checked_add(self.std_dual_ear)?
            .checked_add(self.comfort_one_ear)?
            .checked_add(self.comfort_dual_ear)?
            .checked_add(self.handset)
    }
}

/// A named physical site. All counts are non-negative by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub key_panel_count: u32,
    #[serde(default)]
    pub key_panel_mount: KeyPanelMount,
    #[serde(default)]
    pub wired_count: u32,
    #[serde(default)]
    pub wireless_count: u32,
    #[serde(default)]
    pub is_heavy_duty: bool,
    #[serde(default)]
    pub wall_station_count: u32,
    #[serde(default)]
    pub beacon_count: u32,
    #[serde(default)]
    pub headset_split: HeadsetSplit,
    /// Marks the pseudo-location recording that quantities were edited by hand.
    #[serde(default)]
    pub is_manual: bool,
}

impl Location {
    pub const MANUAL_NAME: &'static str = "Manual Adjustments";

    /// Devices that need a headset: key panels, beltpacks and wall stations.
    #[must_use]
    pub fn device_count(&self) -> u32 {
        [
            self.wired_count,
            self.wireless_count,
            self.wall_station_count,
        ]
        .into_iter()
        .fold(self.key_panel_count, u32::saturating_add)
    }

    /// The zero-count pseudo-location appended after manual quantity edits.
    #[must_use]
    pub fn manual() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Self::MANUAL_NAME.to_string(),
            key_panel_count: 0,
            key_panel_mount: KeyPanelMount::default(),
            wired_count: 0,
            wireless_count: 0,
            is_heavy_duty: false,
            wall_station_count: 0,
            beacon_count: 0,
            headset_split: HeadsetSplit::default(),
            is_manual: true,
        }
    }
}

/// Raw location entry as typed by the designer, before headset reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationDraft {
    pub name: String,
    pub key_panel_count: u32,
    pub key_panel_mount: KeyPanelMount,
    pub wired_count: u32,
    pub wireless_count: u32,
    pub is_heavy_duty: bool,
    pub wall_station_count: u32,
    pub beacon_count: u32,
    pub headsets: HeadsetSplit,
    /// "Customer supplies the remaining headsets" checkbox.
    pub customer_supplied: bool,
}

impl LocationDraft {
    fn checked_device_count(&self) -> Option<u32> {
        self.key_panel_count
            .checked_add(self.wired_count)?
            .checked_add(self.wireless_count)?
            .checked_add(self.wall_station_count)
    }

    /// Validates the entry and derives the customer-supplied headset count.
    ///
    /// When the checkbox is set, every device without an allocated headset
    /// is assigned a customer-supplied one. Over-allocation is accepted.
    ///
    /// # Errors
    ///
    /// - [`LocationError::MissingName`] if the trimmed name is empty.
    /// - [`LocationError::CountOverflow`] if the device or headset total does
    ///   not fit in a `u32`.
    /// - [`LocationError::IncompleteHeadsets`] if devices outnumber allocated
    ///   headsets and the customer-supplied checkbox is not set.
    pub fn finalize(self, id: Uuid) -> Result<Location, LocationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(LocationError::MissingName);
        }

        let (Some(devices), Some(allocated)) =
            (self.checked_device_count(), self.headsets.checked_allocated())
        else {
            return Err(LocationError::CountOverflow);
        };
        if allocated < devices && !self.customer_supplied {
            return Err(LocationError::IncompleteHeadsets { allocated, devices });
        }

        let customer_supplied = if self.customer_supplied {
            devices.saturating_sub(allocated)
        } else {
            0
        };

        Ok(Location {
            id,
            name: name.to_string(),
            key_panel_count: self.key_panel_count,
            key_panel_mount: self.key_panel_mount,
            wired_count: self.wired_count,
            wireless_count: self.wireless_count,
            is_heavy_duty: self.is_heavy_duty,
            wall_station_count: self.wall_station_count,
            beacon_count: self.beacon_count,
            headset_split: HeadsetSplit {
                customer_supplied,
                ..self.headsets
            },
            is_manual: false,
        })
    }
}

impl From<&Location> for LocationDraft {
    fn from(loc: &Location) -> Self {
        Self {
            name: loc.name.clone(),
            key_panel_count: loc.key_panel_count,
            key_panel_mount: loc.key_panel_mount,
            wired_count: loc.wired_count,
            wireless_count: loc.wireless_count,
            is_heavy_duty: loc.is_heavy_duty,
            wall_station_count: loc.wall_station_count,
            beacon_count: loc.beacon_count,
            headsets: HeadsetSplit {
                customer_supplied: 0,
                ..loc.headset_split.clone()
            },
            customer_supplied: loc.headset_split.customer_supplied > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, wired: u32, std_one_ear: u32, customer_supplied: bool) -> LocationDraft {
        LocationDraft {
            name: name.to_string(),
            wired_count: wired,
            headsets: HeadsetSplit {
                std_one_ear,
                ..HeadsetSplit::default()
            },
            customer_supplied,
            ..LocationDraft::default()
        }
    }

    #[test]
    fn finalize_rejects_blank_name() {
        let err = draft("   ", 0, 0, false).finalize(Uuid::nil()).unwrap_err();
        assert_eq!(err, LocationError::MissingName);
    }

    #[test]
    fn finalize_trims_name() {
        let loc = draft("  Stage Left ", 0, 0, false)
            .finalize(Uuid::nil())
            .unwrap();
        assert_eq!(loc.name, "Stage Left");
    }

    #[test]
    fn finalize_blocks_incomplete_allocation() {
        let err = draft("FOH", 4, 1, false).finalize(Uuid::nil()).unwrap_err();
        assert_eq!(
            err,
            LocationError::IncompleteHeadsets {
                allocated: 1,
                devices: 4
            }
        );
    }

    #[test]
    fn finalize_rejects_device_total_overflow() {
        let mut d = draft("FOH", u32::MAX, 0, true);
        d.key_panel_count = 1;
        assert_eq!(
            d.finalize(Uuid::nil()).unwrap_err(),
            LocationError::CountOverflow
        );
    }

    #[test]
    fn finalize_rejects_headset_total_overflow() {
        let mut d = draft("FOH", 1, u32::MAX, false);
        d.headsets.handset = 1;
        assert_eq!(
            d.finalize(Uuid::nil()).unwrap_err(),
            LocationError::CountOverflow
        );
    }

    #[test]
    fn counts_at_the_limit_still_finalize() {
        let loc = draft("FOH", u32::MAX, 0, true)
            .finalize(Uuid::nil())
            .unwrap();
        assert_eq!(loc.device_count(), u32::MAX);
        assert_eq!(loc.headset_split.customer_supplied, u32::MAX);
        assert_eq!(loc.headset_split.total(), u32::MAX);
    }

    #[test]
    fn finalize_assigns_remainder_to_customer_supplied() {
        let loc = draft("FOH", 4, 1, true).finalize(Uuid::nil()).unwrap();
        assert_eq!(loc.headset_split.std_one_ear, 1);
        assert_eq!(loc.headset_split.customer_supplied, 3);
        assert_eq!(loc.headset_split.total(), loc.device_count());
    }

    #[test]
    fn finalize_allows_over_allocation_without_customer_supply() {
        let loc = draft("Booth", 2, 5, true).finalize(Uuid::nil()).unwrap();
        assert_eq!(loc.headset_split.customer_supplied, 0);
    }

    #[test]
    fn finalize_ignores_customer_supplied_typed_into_split() {
        let mut d = draft("Booth", 2, 2, false);
        d.headsets.customer_supplied = 7;
        let loc = d.finalize(Uuid::nil()).unwrap();
        assert_eq!(loc.headset_split.customer_supplied, 0);
    }

    #[test]
    fn draft_from_location_restores_checkbox() {
        let loc = draft("FOH", 4, 1, true).finalize(Uuid::nil()).unwrap();
        let back = LocationDraft::from(&loc);
        assert!(back.customer_supplied);
        assert_eq!(back.headsets.customer_supplied, 0);
        assert_eq!(back.finalize(loc.id).unwrap(), loc);
    }

    #[test]
    fn manual_location_is_flagged_and_empty() {
        let loc = Location::manual();
        assert!(loc.is_manual);
        assert_eq!(loc.device_count(), 0);
        assert_eq!(loc.name, Location::MANUAL_NAME);
    }
}
