//! Validation engine: warns about headset and PoE port shortfalls.
//!
//! Findings are advisory; a `Review` status never blocks saving or sending.

use serde::{Deserialize, Serialize};

use crate::catalog::ProductId;
use crate::costing::PricedItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    Pass,
    Review,
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationStatus::Pass => write!(f, "PASS"),
            ValidationStatus::Review => write!(f, "REVIEW"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    HeadsetShortfall { headsets: u32, devices: u32 },
    PoeCapacity { devices: u32, ports: u32 },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::HeadsetShortfall { headsets, devices } => write!(
                f,
                "Headset Warning: Only {headsets} headsets/handsets configured for {devices} core devices."
            ),
            ValidationIssue::PoeCapacity { devices, ports } => write!(
                f,
                "Infrastructure Warning: Estimated PoE Devices ({devices}) may exceed available dedicated PoE Switch Ports ({ports}). Review switch configuration."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub status: ValidationStatus,
    pub issues: Vec<ValidationIssue>,
    pub total_poe_devices: u32,
    pub total_poe_ports: u32,
}

impl ValidationResult {
    /// Human-readable issue messages, in check order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

/// Runs the headset and PoE capacity checks over priced items.
///
/// PoE demand excludes switches and the active antenna; supply counts the
/// ports of PoE switches only.
#[must_use]
pub fn validate(items: &[PricedItem]) -> ValidationResult {
    let mut issues = Vec::new();

    let devices: u32 = items
        .iter()
        .filter(|i| i.product.is_core_device)
        .map(|i| i.quantity)
        .fold(0, u32::saturating_add);
    let headsets: u32 = items
        .iter()
        .filter(|i| i.product.is_headset)
        .map(|i| i.quantity)
        .fold(0, u32::saturating_add);
    if headsets < devices {
        issues.push(ValidationIssue::HeadsetShortfall { headsets, devices });
    }

    let mut total_poe_devices = 0u32;
    let mut total_poe_ports = 0u32;
    for item in items {
        let p = &item.product;
        if p.is_poe && !p.is_switch && p.id != ProductId::ActiveAntenna {
            total_poe_devices = total_poe_devices.saturating_add(item.quantity);
        }
        if p.is_switch && p.is_poe {
            total_poe_ports = total_poe_ports
                .saturating_add(p.ports.unwrap_or(0).saturating_mul(item.quantity));
        }
    }
    if total_poe_devices > total_poe_ports {
        issues.push(ValidationIssue::PoeCapacity {
            devices: total_poe_devices,
            ports: total_poe_ports,
        });
    }

    let status = if issues.is_empty() {
        ValidationStatus::Pass
    } else {
        ValidationStatus::Review
    };

    ValidationResult {
        status,
        issues,
        total_poe_devices,
        total_poe_ports,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Rates};
    use crate::costing::cost;
    use crate::quantity::QuantityMap;

    fn items(pairs: &[(ProductId, u32)]) -> Vec<PricedItem> {
        let catalog = Catalog::builtin();
        let quantities: QuantityMap = pairs.iter().copied().collect();
        cost(&catalog, &Rates::default(), &quantities).items
    }

    #[test]
    fn empty_configuration_passes() {
        let result = validate(&[]);
        assert_eq!(result.status, ValidationStatus::Pass);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn headset_shortfall_names_both_counts() {
        let result = validate(&items(&[
            (ProductId::WirelessBeltpack, 5),
            (ProductId::HeadsetSingle, 3),
        ]));
        assert_eq!(result.status, ValidationStatus::Review);
        assert_eq!(
            result.issues,
            vec![ValidationIssue::HeadsetShortfall {
                headsets: 3,
                devices: 5
            }]
        );
        let message = &result.messages()[0];
        assert!(message.contains('3') && message.contains('5'), "{message}");
    }

    #[test]
    fn equal_headsets_and_devices_pass() {
        let result = validate(&items(&[
            (ProductId::WirelessBeltpack, 5),
            (ProductId::HeadsetSingle, 3),
            (ProductId::CustomerHeadset, 2),
        ]));
        assert_eq!(result.status, ValidationStatus::Pass);
    }

    #[test]
    fn poe_shortfall_without_switch() {
        let result = validate(&items(&[
            (ProductId::WiredBeltpack, 2),
            (ProductId::HeadsetDual, 2),
        ]));
        assert_eq!(result.total_poe_devices, 2);
        assert_eq!(result.total_poe_ports, 0);
        assert_eq!(
            result.issues,
            vec![ValidationIssue::PoeCapacity {
                devices: 2,
                ports: 0
            }]
        );
    }

    #[test]
    fn antennas_are_not_poe_demand() {
        let result = validate(&items(&[(ProductId::ActiveAntenna, 20)]));
        assert_eq!(result.total_poe_devices, 0);
        assert_eq!(result.status, ValidationStatus::Pass);
    }

    #[test]
    fn non_poe_switch_adds_no_ports() {
        let result = validate(&items(&[
            (ProductId::Switch5, 3),
            (ProductId::Switch6, 1),
            (ProductId::DanteInterface, 1),
        ]));
        assert_eq!(result.total_poe_ports, 6);
        assert_eq!(result.total_poe_devices, 1);
        assert_eq!(result.status, ValidationStatus::Pass);
    }

    #[test]
    fn huge_switch_counts_saturate_port_total() {
        let result = validate(&items(&[
            (ProductId::Switch8, u32::MAX),
            (ProductId::WiredBeltpack, u32::MAX),
            (ProductId::HeadsetSingle, u32::MAX),
        ]));
        assert_eq!(result.total_poe_ports, u32::MAX);
        assert_eq!(result.total_poe_devices, u32::MAX);
        assert_eq!(result.status, ValidationStatus::Pass);
    }

    #[test]
    fn both_checks_can_fire() {
        let result = validate(&items(&[(ProductId::WiredBeltpack, 9), (ProductId::Switch8, 1)]));
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.status, ValidationStatus::Review);
    }

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&ValidationStatus::Review).unwrap(),
            "\"REVIEW\""
        );
    }
}
