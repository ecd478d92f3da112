//! Costing engine: quantities → priced line items and cost rollup.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product, ProductId, Rates};
use crate::quantity::QuantityMap;

/// One BOM line: a catalog product at a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedItem {
    pub product: Product,
    pub quantity: u32,
    pub line_total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Lines with quantity > 0, in catalog order.
    pub items: Vec<PricedItem>,
    pub equipment_cost: Decimal,
    pub labor_cost: Decimal,
    pub programming_cost: Decimal,
    pub support_materials_cost: Decimal,
    pub grand_total: Decimal,
    pub device_count: u32,
    pub headset_count: u32,
}

impl CostBreakdown {
    /// Lines that belong on a purchase BOM: the customer-supplied headset
    /// placeholder is left out.
    pub fn purchasable_items(&self) -> impl Iterator<Item = &PricedItem> {
        self.items
            .iter()
            .filter(|item| item.product.id != ProductId::CustomerHeadset)
    }
}

/// Prices a quantity map against the catalog and applies the flat rates.
///
/// Quantities for ids missing from `catalog` are ignored; with the built-in
/// catalog every id resolves.
#[must_use]
pub fn cost(catalog: &Catalog, rates: &Rates, quantities: &QuantityMap) -> CostBreakdown {
    let items: Vec<PricedItem> = catalog
        .products()
        .iter()
        .filter_map(|product| {
            let quantity = quantities.get(product.id);
            (quantity > 0).then(|| PricedItem {
                product: product.clone(),
                quantity,
                line_total: product.price * Decimal::from(quantity),
            })
        })
        .collect();

    let equipment_cost: Decimal = items.iter().map(|i| i.line_total).sum();
    let device_count = items
        .iter()
        .filter(|i| i.product.is_core_device)
        .map(|i| i.quantity)
        .fold(0, u32::saturating_add);
    let headset_count = items
        .iter()
        .filter(|i| i.product.is_headset)
        .map(|i| i.quantity)
        .fold(0, u32::saturating_add);

    let labor_cost = equipment_cost * rates.labor;
    let programming_cost = equipment_cost * rates.programming;
    let support_materials_cost = equipment_cost * rates.support_materials;
    let grand_total = equipment_cost + labor_cost + programming_cost + support_materials_cost;

    CostBreakdown {
        items,
        equipment_cost,
        labor_cost,
        programming_cost,
        support_materials_cost,
        grand_total,
        device_count,
        headset_count,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn rollup_holds(breakdown: &CostBreakdown) -> bool {
        breakdown.grand_total
            == breakdown.equipment_cost
                + breakdown.labor_cost
                + breakdown.programming_cost
                + breakdown.support_materials_cost
    }

    #[test]
    fn all_zero_map_costs_nothing() {
        let catalog = Catalog::builtin();
        let breakdown = cost(&catalog, &Rates::default(), &QuantityMap::zeroed(&catalog));
        assert!(breakdown.items.is_empty());
        assert_eq!(breakdown.grand_total, Decimal::ZERO);
        assert_eq!(breakdown.device_count, 0);
        assert_eq!(breakdown.headset_count, 0);
        assert!(rollup_holds(&breakdown));
    }

    #[test]
    fn eight_wired_beltpacks() {
        let catalog = Catalog::builtin();
        let quantities: QuantityMap = [(ProductId::WiredBeltpack, 8)].into_iter().collect();
        let breakdown = cost(&catalog, &Rates::default(), &quantities);
        assert_eq!(breakdown.equipment_cost, dec!(8250.64));
        assert_eq!(breakdown.labor_cost, dec!(1650.128));
        assert_eq!(breakdown.programming_cost, dec!(412.532));
        assert_eq!(breakdown.support_materials_cost, dec!(412.532));
        assert_eq!(breakdown.grand_total, dec!(10725.832));
        assert_eq!(breakdown.device_count, 8);
        assert!(rollup_holds(&breakdown));
    }

    #[test]
    fn custom_rates_apply_independently() {
        let catalog = Catalog::builtin();
        let rates = Rates {
            labor: dec!(0.10),
            programming: Decimal::ZERO,
            support_materials: dec!(0.02),
        };
        let quantities: QuantityMap = [(ProductId::Beacon, 2)].into_iter().collect();
        let breakdown = cost(&catalog, &rates, &quantities);
        assert_eq!(breakdown.equipment_cost, dec!(1430.00));
        assert_eq!(breakdown.labor_cost, dec!(143.0000));
        assert_eq!(breakdown.programming_cost, Decimal::ZERO);
        assert_eq!(breakdown.support_materials_cost, dec!(28.6000));
        assert!(rollup_holds(&breakdown));
    }

    #[test]
    fn counts_include_customer_supplied_headsets() {
        let catalog = Catalog::builtin();
        let quantities: QuantityMap = [
            (ProductId::WirelessBeltpack, 3),
            (ProductId::ActiveAntenna, 1),
            (ProductId::HeadsetSingle, 1),
            (ProductId::CustomerHeadset, 2),
        ]
        .into_iter()
        .collect();
        let breakdown = cost(&catalog, &Rates::default(), &quantities);
        // WAA is not a core device.
        assert_eq!(breakdown.device_count, 3);
        assert_eq!(breakdown.headset_count, 3);
        assert_eq!(breakdown.items.len(), 4);
        assert_eq!(breakdown.purchasable_items().count(), 3);
    }

    #[test]
    fn items_follow_catalog_order_and_reconcile() {
        let catalog = Catalog::builtin();
        let quantities: QuantityMap = [(ProductId::Switch8, 1), (ProductId::WiredBeltpack, 2)]
            .into_iter()
            .collect();
        let breakdown = cost(&catalog, &Rates::default(), &quantities);
        let ids: Vec<ProductId> = breakdown.items.iter().map(|i| i.product.id).collect();
        assert_eq!(ids, vec![ProductId::WiredBeltpack, ProductId::Switch8]);
        let summed: Decimal = breakdown.items.iter().map(|i| i.line_total).sum();
        assert_eq!(summed, breakdown.equipment_cost);
    }
}
