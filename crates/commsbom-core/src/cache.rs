//! Memo of the last aggregation, keyed by a structural hash of its inputs.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::aggregate::aggregate;
use crate::catalog::Catalog;
use crate::infrastructure::InfrastructureDetails;
use crate::location::Location;
use crate::quantity::QuantityMap;

/// Caches the most recent [`aggregate`] result.
///
/// The key covers locations and infrastructure only; prices never affect
/// quantities, so a catalog patch does not invalidate the memo.
#[derive(Debug, Default)]
pub struct AggregationCache {
    last: Option<(u64, QuantityMap)>,
    hits: u64,
    misses: u64,
}

impl AggregationCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoised map when the inputs hash the same as last time,
    /// otherwise aggregates and replaces the memo.
    pub fn get_or_aggregate(
        &mut self,
        catalog: &Catalog,
        locations: &[Location],
        infra: &InfrastructureDetails,
    ) -> QuantityMap {
        let key = input_key(locations, infra);
        if let Some((cached_key, map)) = &self.last {
            if *cached_key == key {
                self.hits += 1;
                return map.clone();
            }
        }

        self.misses += 1;
        let map = aggregate(catalog, locations, infra);
        tracing::debug!(key, locations = locations.len(), "aggregation recomputed");
        self.last = Some((key, map.clone()));
        map
    }

    /// Drops the memo; used on a full session reset.
    pub fn clear(&mut self) {
        self.last = None;
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

fn input_key(locations: &[Location], infra: &InfrastructureDetails) -> u64 {
    let mut hasher = DefaultHasher::new();
    locations.hash(&mut hasher);
    infra.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::catalog::ProductId;
    use crate::location::LocationDraft;

    fn location(wired: u32) -> Location {
        LocationDraft {
            name: "Stage".to_string(),
            wired_count: wired,
            customer_supplied: true,
            ..LocationDraft::default()
        }
        .finalize(Uuid::from_u128(7))
        .unwrap()
    }

    #[test]
    fn identical_inputs_hit_the_cache() {
        let catalog = Catalog::builtin();
        let mut cache = AggregationCache::new();
        let infra = InfrastructureDetails::default();
        let first = cache.get_or_aggregate(&catalog, &[location(3)], &infra);
        let second = cache.get_or_aggregate(&catalog, &[location(3)], &infra);
        assert_eq!(first, second);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn changed_inputs_recompute() {
        let catalog = Catalog::builtin();
        let mut cache = AggregationCache::new();
        let infra = InfrastructureDetails::default();
        cache.get_or_aggregate(&catalog, &[location(3)], &infra);
        let map = cache.get_or_aggregate(&catalog, &[location(4)], &infra);
        assert_eq!(map.get(ProductId::WiredBeltpack), 4);
        assert_eq!(cache.misses(), 2);

        let infra = InfrastructureDetails {
            needs_walkie_talkie_interface: true,
            ..InfrastructureDetails::default()
        };
        let map = cache.get_or_aggregate(&catalog, &[location(4)], &infra);
        assert_eq!(map.get(ProductId::RadioInterface), 1);
        assert_eq!(cache.misses(), 3);
    }

    #[test]
    fn clear_forces_recompute() {
        let catalog = Catalog::builtin();
        let mut cache = AggregationCache::new();
        let infra = InfrastructureDetails::default();
        cache.get_or_aggregate(&catalog, &[], &infra);
        cache.clear();
        cache.get_or_aggregate(&catalog, &[], &infra);
        assert_eq!(cache.misses(), 2);
        assert_eq!(cache.hits(), 0);
    }
}
