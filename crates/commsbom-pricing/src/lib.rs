//! Remote price list for the intercom catalog.

pub mod client;
pub mod error;
pub mod loader;
pub(crate) mod retry;
pub mod types;

pub use client::PricingClient;
pub use error::PricingError;
pub use loader::{load_pricing, PricingOutcome};
pub use types::{ApplySummary, FeedProduct, FeedVersion, PricingFeed};
