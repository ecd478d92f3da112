use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ProductId};

/// Product id → quantity. The canonical configuration representation.
///
/// Iteration follows catalog order because [`ProductId`] orders by
/// declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantityMap(BTreeMap<ProductId, u32>);

impl QuantityMap {
    /// A map with every catalog product present at zero.
    #[must_use]
    pub fn zeroed(catalog: &Catalog) -> Self {
        Self(catalog.products().iter().map(|p| (p.id, 0)).collect())
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> u32 {
        self.0.get(&id).copied().unwrap_or(0)
    }

    pub fn set(&mut self, id: ProductId, quantity: u32) {
        self.0.insert(id, quantity);
    }

    pub fn add(&mut self, id: ProductId, quantity: u32) {
        let entry = self.0.entry(id).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    pub fn increment(&mut self, id: ProductId) {
        self.add(id, 1);
    }

    /// Decrements by one, never going below zero.
    pub fn decrement(&mut self, id: ProductId) {
        let entry = self.0.entry(id).or_insert(0);
        *entry = entry.saturating_sub(1);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.0.iter().map(|(id, qty)| (*id, *qty))
    }

    /// Sum of all quantities, saturating at `u32::MAX`.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.values().copied().fold(0, u32::saturating_add)
    }

    #[must_use]
    pub fn is_all_zero(&self) -> bool {
        self.0.values().all(|&qty| qty == 0)
    }

    /// A copy without zero entries, as persisted.
    #[must_use]
    pub fn sparse(&self) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(_, &qty)| qty > 0)
                .map(|(id, qty)| (*id, *qty))
                .collect(),
        )
    }

    /// A copy holding every catalog product, missing entries filled with zero.
    #[must_use]
    pub fn zero_filled(&self, catalog: &Catalog) -> Self {
        let mut full = Self::zeroed(catalog);
        for (id, qty) in self.iter() {
            full.set(id, qty);
        }
        full
    }
}

impl FromIterator<(ProductId, u32)> for QuantityMap {
    fn from_iter<T: IntoIterator<Item = (ProductId, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
