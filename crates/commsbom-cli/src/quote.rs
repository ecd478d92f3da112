use std::path::Path;

use commsbom_core::{format_usd, AggregationCache, AppConfig, Catalog, Quote};
use commsbom_pricing::PricingOutcome;
use serde::Serialize;

use crate::context::{load_catalog, print_pricing_outcome};
use crate::session_file::SessionFile;

#[derive(Serialize)]
struct QuoteReport<'a> {
    pricing: &'a PricingOutcome,
    quote: &'a Quote,
}

/// Prints the BOM, cost summary and validation for a session file.
///
/// # Errors
///
/// Returns an error if the session file cannot be read or a location entry
/// is invalid.
pub(crate) async fn run_quote(
    config: &AppConfig,
    session_path: &Path,
    offline: bool,
    json: bool,
) -> anyhow::Result<()> {
    let pricing = load_catalog(config, offline).await?;
    let mut cache = AggregationCache::new();
    let session =
        SessionFile::load(session_path)?.into_session(&pricing.catalog, &mut cache)?;
    let quote = session.quote(&pricing.catalog, &pricing.rates, &mut cache);

    if json {
        let report = QuoteReport {
            pricing: &pricing.outcome,
            quote: &quote,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_pricing_outcome(&pricing.outcome);
    if !session.project.config_name.trim().is_empty() {
        println!("design: {}", session.project.config_name.trim());
    }
    println!();
    print_quote(&quote);
    Ok(())
}

pub(crate) fn print_quote(quote: &Quote) {
    let breakdown = &quote.breakdown;
    if breakdown.items.is_empty() {
        println!("no items; add a location or set quantities");
    } else {
        println!("{:<6}{:<10}{:<18}{:>14}  NAME", "QTY", "CODE", "SKU", "LINE TOTAL");
        for item in &breakdown.items {
            println!(
                "{:<6}{:<10}{:<18}{:>14}  {}",
                item.quantity,
                item.product.id,
                item.product.sku,
                format_usd(item.line_total),
                item.product.name
            );
        }
    }

    println!();
    println!("{:<22}{:>14}", "Equipment", format_usd(breakdown.equipment_cost));
    println!(
        "{:<22}{:>14}",
        "Support materials",
        format_usd(breakdown.support_materials_cost)
    );
    println!("{:<22}{:>14}", "Labor", format_usd(breakdown.labor_cost));
    println!("{:<22}{:>14}", "Programming", format_usd(breakdown.programming_cost));
    println!("{:<22}{:>14}", "GRAND TOTAL", format_usd(breakdown.grand_total));
    println!();

    let validation = &quote.validation;
    println!(
        "validation: {} (devices {}, headsets {}, PoE demand {}/{} ports)",
        validation.status,
        breakdown.device_count,
        breakdown.headset_count,
        validation.total_poe_devices,
        validation.total_poe_ports
    );
    for message in validation.messages() {
        println!("  - {message}");
    }
}

/// Prints every catalog product with its effective price.
///
/// # Errors
///
/// Returns an error if the pricing client cannot be constructed.
pub(crate) async fn run_catalog(config: &AppConfig, offline: bool) -> anyhow::Result<()> {
    let pricing = load_catalog(config, offline).await?;
    print_pricing_outcome(&pricing.outcome);
    print_catalog(&pricing.catalog);
    println!(
        "rates: labor {}, programming {}, support materials {}",
        pricing.rates.labor, pricing.rates.programming, pricing.rates.support_materials
    );
    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    let mut group = None;
    for product in catalog.products() {
        if group != Some(product.group) {
            println!("\n{}", product.group);
            group = Some(product.group);
        }
        println!(
            "  {:<10}{:<18}{:>12}  {}",
            product.id,
            product.sku,
            format_usd(product.price),
            product.name
        );
    }
}
