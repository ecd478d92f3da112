use chrono::{DateTime, Utc};
use commsbom_core::{
    Catalog, InfrastructureDetails, Location, ProjectDetails, QuantityMap, Quote, Session,
    ValidationStatus,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current on-disk schema of the saved-configuration blob.
pub const SCHEMA_VERSION: u64 = 2;

/// A named, timestamped snapshot of a designed system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedConfiguration {
    pub id: Uuid,
    pub name: String,
    pub designer: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub organization: String,
    pub saved_at: DateTime<Utc>,
    /// Non-zero quantities only.
    pub products: QuantityMap,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub infrastructure: InfrastructureDetails,
    pub total_cost: Decimal,
    pub validation_status: ValidationStatus,
}

impl SavedConfiguration {
    /// Snapshots a session and its current quote.
    #[must_use]
    pub fn from_session(session: &Session, quote: &Quote) -> Self {
        let project = &session.project;
        Self {
            id: Uuid::new_v4(),
            name: project.config_name.trim().to_string(),
            designer: project.designer.trim().to_string(),
            email: project.email.trim().to_string(),
            organization: project.organization.trim().to_string(),
            saved_at: Utc::now(),
            products: quote.quantities.sparse(),
            locations: session.locations().to_vec(),
            infrastructure: session.infrastructure().clone(),
            total_cost: quote.breakdown.grand_total,
            validation_status: quote.validation.status,
        }
    }

    /// Rebuilds an editable session from this snapshot.
    #[must_use]
    pub fn restore(&self, catalog: &Catalog) -> Session {
        Session::restore(
            catalog,
            ProjectDetails {
                config_name: self.name.clone(),
                designer: self.designer.clone(),
                email: self.email.clone(),
                organization: self.organization.clone(),
            },
            self.locations.clone(),
            self.infrastructure.clone(),
            &self.products,
        )
    }
}

/// The versioned blob written under the store key, newest entry first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoredConfigs {
    pub schema_version: u64,
    pub configs: Vec<SavedConfiguration>,
}
