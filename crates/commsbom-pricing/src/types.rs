//! Wire shape of `pricing.json` and how it patches the catalog.

use std::collections::BTreeMap;
use std::fmt;

use commsbom_core::{Catalog, ProductId, Rates};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Feed version as published; some revisions use a number, some a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FeedVersion {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for FeedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedVersion::Text(s) => f.write_str(s),
            FeedVersion::Number(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedProduct {
    pub price: Decimal,
    #[serde(default)]
    pub sku: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingFeed {
    pub version: FeedVersion,
    #[serde(default)]
    pub labor_rate: Option<Decimal>,
    #[serde(default)]
    pub programming_rate: Option<Decimal>,
    #[serde(default)]
    pub support_materials_rate: Option<Decimal>,
    /// Keyed by product code. Kept as raw strings so unknown codes can be
    /// skipped instead of failing the whole feed.
    #[serde(default)]
    pub products: BTreeMap<String, FeedProduct>,
}

/// Counts reported after a feed has been applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub patched: usize,
    pub skipped: usize,
}

fn positive_or(current: Decimal, candidate: Option<Decimal>) -> Decimal {
    candidate.filter(|r| *r > Decimal::ZERO).unwrap_or(current)
}

impl PricingFeed {
    /// Overwrites catalog prices/SKUs and the flat rates with the feed's
    /// values.
    ///
    /// Unknown codes and negative prices are skipped. A rate that is absent
    /// or not strictly positive keeps its current value.
    pub fn apply_to(&self, catalog: &mut Catalog, rates: &mut Rates) -> ApplySummary {
        rates.labor = positive_or(rates.labor, self.labor_rate);
        rates.programming = positive_or(rates.programming, self.programming_rate);
        rates.support_materials = positive_or(rates.support_materials, self.support_materials_rate);

        let mut summary = ApplySummary::default();
        for (code, entry) in &self.products {
            let Ok(id) = code.parse::<ProductId>() else {
                tracing::debug!(code = %code, "pricing feed lists unknown product; skipping");
                summary.skipped += 1;
                continue;
            };
            if entry.price.is_sign_negative() {
                tracing::warn!(code = %code, price = %entry.price, "negative price in pricing feed; skipping");
                summary.skipped += 1;
                continue;
            }
            if catalog.patch(id, entry.price, entry.sku.as_deref()) {
                summary.patched += 1;
            } else {
                summary.skipped += 1;
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn feed(json: &str) -> PricingFeed {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn version_accepts_number_or_string() {
        assert_eq!(feed(r#"{"version": 3}"#).version.to_string(), "3");
        assert_eq!(feed(r#"{"version": "2024.1"}"#).version.to_string(), "2024.1");
    }

    #[test]
    fn patches_prices_and_keeps_sku_when_absent() {
        let mut catalog = Catalog::builtin();
        let mut rates = Rates::default();
        let original_sku = catalog.get(ProductId::WiredBeltpack).unwrap().sku.clone();

        let summary = feed(
            r#"{"version": 1, "products": {
                "GBPX": {"price": 999.99},
                "WBPX": {"price": 2100, "sku": "GGO-WBPX-2"}
            }}"#,
        )
        .apply_to(&mut catalog, &mut rates);

        assert_eq!(summary, ApplySummary { patched: 2, skipped: 0 });
        let gbpx = catalog.get(ProductId::WiredBeltpack).unwrap();
        assert_eq!(gbpx.price, dec!(999.99));
        assert_eq!(gbpx.sku, original_sku);
        let wbpx = catalog.get(ProductId::WirelessBeltpack).unwrap();
        assert_eq!(wbpx.price, dec!(2100));
        assert_eq!(wbpx.sku, "GGO-WBPX-2");
        assert_eq!(rates, Rates::default());
    }

    #[test]
    fn unknown_codes_and_negative_prices_are_skipped() {
        let mut catalog = Catalog::builtin();
        let before = catalog.clone();
        let mut rates = Rates::default();

        let summary = feed(
            r#"{"version": 1, "products": {
                "NOPE": {"price": 1},
                "SW8": {"price": -5}
            }}"#,
        )
        .apply_to(&mut catalog, &mut rates);

        assert_eq!(summary, ApplySummary { patched: 0, skipped: 2 });
        assert_eq!(catalog, before);
    }

    #[test]
    fn rates_replaced_only_when_positive() {
        let mut catalog = Catalog::builtin();
        let mut rates = Rates::default();

        feed(
            r#"{"version": 1, "labor_rate": 0.25, "programming_rate": 0,
                "support_materials_rate": -1}"#,
        )
        .apply_to(&mut catalog, &mut rates);

        assert_eq!(rates.labor, dec!(0.25));
        assert_eq!(rates.programming, dec!(0.05));
        assert_eq!(rates.support_materials, dec!(0.05));
    }
}
