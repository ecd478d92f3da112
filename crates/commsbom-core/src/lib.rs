//! Intercom BOM designer core: product catalog, location model, and the
//! aggregation, costing and validation engines.

pub mod aggregate;
pub mod app_config;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod costing;
pub mod error;
pub mod infrastructure;
pub mod location;
pub mod money;
pub mod quantity;
pub mod session;
pub mod validation;

pub use aggregate::{aggregate, required_switches};
pub use app_config::{AppConfig, Environment};
pub use cache::AggregationCache;
pub use catalog::{Catalog, Product, ProductGroup, ProductId, Rates, UnknownProductCode};
pub use config::{load_app_config, load_app_config_from_env};
pub use costing::{cost, CostBreakdown, PricedItem};
pub use error::{ConfigError, LocationError, SessionError};
pub use infrastructure::{InfrastructureDetails, MultiSite};
pub use location::{HeadsetSplit, KeyPanelMount, Location, LocationDraft};
pub use money::{format_usd, round_cents};
pub use quantity::QuantityMap;
pub use session::{quote_quantities, ProjectDetails, Quote, Session};
pub use validation::{validate, ValidationIssue, ValidationResult, ValidationStatus};
