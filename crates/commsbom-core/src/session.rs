//! Explicit session state: everything a designer edits between quotes.
//!
//! The engines stay pure; all mutation happens here and is driven by the
//! caller. A session is either *aggregated* (quantities come from the
//! locations) or in *manual edit* mode (quantities were adjusted by hand and
//! are used as-is until a location or infrastructure change).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cache::AggregationCache;
use crate::catalog::{Catalog, ProductId, Rates};
use crate::costing::{cost, CostBreakdown};
use crate::error::SessionError;
use crate::infrastructure::InfrastructureDetails;
use crate::location::{Location, LocationDraft};
use crate::quantity::QuantityMap;
use crate::validation::{validate, ValidationResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDetails {
    pub config_name: String,
    pub designer: String,
    pub email: String,
    pub organization: String,
}

impl ProjectDetails {
    /// Checks the fields required before a configuration can be saved.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingProjectField`] naming the first blank
    /// required field.
    pub fn require_complete(&self) -> Result<(), SessionError> {
        if self.config_name.trim().is_empty() {
            return Err(SessionError::MissingProjectField("config_name"));
        }
        if self.designer.trim().is_empty() {
            return Err(SessionError::MissingProjectField("designer"));
        }
        Ok(())
    }
}

/// The engine outputs for one session state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub quantities: QuantityMap,
    pub breakdown: CostBreakdown,
    pub validation: ValidationResult,
}

/// Computes costs and validation for a fixed quantity map.
#[must_use]
pub fn quote_quantities(catalog: &Catalog, rates: &Rates, quantities: QuantityMap) -> Quote {
    let breakdown = cost(catalog, rates, &quantities);
    let validation = validate(&breakdown.items);
    Quote {
        quantities,
        breakdown,
        validation,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub project: ProjectDetails,
    locations: Vec<Location>,
    infrastructure: InfrastructureDetails,
    manual_quantities: QuantityMap,
    manual_edit: bool,
    has_manual_location: bool,
}

impl Session {
    #[must_use]
    pub fn new(project: ProjectDetails) -> Self {
        Self {
            project,
            ..Self::default()
        }
    }

    /// Rebuilds a session from a stored snapshot, in manual edit mode with
    /// the stored quantities.
    #[must_use]
    pub fn restore(
        catalog: &Catalog,
        project: ProjectDetails,
        locations: Vec<Location>,
        infrastructure: InfrastructureDetails,
        quantities: &QuantityMap,
    ) -> Self {
        let has_manual_location = locations.iter().any(|l| l.is_manual);
        Self {
            project,
            locations,
            infrastructure,
            manual_quantities: quantities.zero_filled(catalog),
            manual_edit: true,
            has_manual_location,
        }
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    #[must_use]
    pub fn infrastructure(&self) -> &InfrastructureDetails {
        &self.infrastructure
    }

    #[must_use]
    pub fn is_manual_edit(&self) -> bool {
        self.manual_edit
    }

    /// Adds a location after headset reconciliation; returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Location`] if the entry is rejected.
    pub fn add_location(&mut self, draft: LocationDraft) -> Result<Uuid, SessionError> {
        let location = draft.finalize(Uuid::new_v4())?;
        let id = location.id;
        tracing::debug!(%id, name = %location.name, "location added");
        self.locations.push(location);
        self.manual_edit = false;
        Ok(id)
    }

    /// Replaces an existing location, keeping its id and position.
    ///
    /// # Errors
    ///
    /// - [`SessionError::UnknownLocation`] if no location has `id`.
    /// - [`SessionError::Location`] if the entry is rejected.
    pub fn update_location(&mut self, id: Uuid, draft: LocationDraft) -> Result<(), SessionError> {
        let slot = self
            .locations
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(SessionError::UnknownLocation(id))?;
        *slot = draft.finalize(id)?;
        self.manual_edit = false;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`SessionError::UnknownLocation`] if no location has `id`.
    pub fn delete_location(&mut self, id: Uuid) -> Result<(), SessionError> {
        let before = self.locations.len();
        self.locations.retain(|l| l.id != id);
        if self.locations.len() == before {
            return Err(SessionError::UnknownLocation(id));
        }
        self.manual_edit = false;
        Ok(())
    }

    pub fn set_infrastructure(&mut self, infrastructure: InfrastructureDetails) {
        self.infrastructure = infrastructure;
        self.manual_edit = false;
    }

    pub fn increment(&mut self, catalog: &Catalog, cache: &mut AggregationCache, id: ProductId) {
        self.enter_manual_edit(catalog, cache);
        self.manual_quantities.increment(id);
    }

    pub fn decrement(&mut self, catalog: &Catalog, cache: &mut AggregationCache, id: ProductId) {
        self.enter_manual_edit(catalog, cache);
        self.manual_quantities.decrement(id);
    }

    pub fn set_quantity(
        &mut self,
        catalog: &Catalog,
        cache: &mut AggregationCache,
        id: ProductId,
        quantity: u32,
    ) {
        self.enter_manual_edit(catalog, cache);
        self.manual_quantities.set(id, quantity);
    }

    /// Drops all locations and switches to pure manual editing, keeping the
    /// current hand-edited quantities.
    pub fn start_manual(&mut self, catalog: &Catalog) {
        self.locations.clear();
        self.manual_quantities = self.manual_quantities.zero_filled(catalog);
        self.manual_edit = true;
    }

    /// The quantities the session currently stands for.
    pub fn final_quantities(&self, catalog: &Catalog, cache: &mut AggregationCache) -> QuantityMap {
        if self.manual_edit {
            self.manual_quantities.zero_filled(catalog)
        } else {
            cache.get_or_aggregate(catalog, &self.locations, &self.infrastructure)
        }
    }

    pub fn quote(&self, catalog: &Catalog, rates: &Rates, cache: &mut AggregationCache) -> Quote {
        quote_quantities(catalog, rates, self.final_quantities(catalog, cache))
    }

    /// Clears the whole session, including the aggregation memo.
    pub fn reset(&mut self, cache: &mut AggregationCache) {
        *self = Self::default();
        cache.clear();
    }

    fn enter_manual_edit(&mut self, catalog: &Catalog, cache: &mut AggregationCache) {
        if self.manual_edit {
            return;
        }
        self.manual_quantities =
            cache.get_or_aggregate(catalog, &self.locations, &self.infrastructure);
        self.manual_edit = true;

        let has_real_location = self.locations.iter().any(|l| !l.is_manual);
        if has_real_location && !self.has_manual_location {
            self.locations.push(Location::manual());
            self.has_manual_location = true;
            tracing::debug!("manual adjustments recorded as pseudo-location");
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
