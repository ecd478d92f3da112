use super::*;
use commsbom_core::{
    quote_quantities, Catalog, HeadsetSplit, LocationDraft, ProductId, QuantityMap, Rates,
};
use uuid::Uuid;

fn project(email: &str) -> ProjectDetails {
    ProjectDetails {
        config_name: "Main Stage".to_string(),
        designer: "Alex".to_string(),
        email: email.to_string(),
        organization: "City Arts".to_string(),
    }
}

fn quote(pairs: &[(ProductId, u32)]) -> Quote {
    let quantities: QuantityMap = pairs.iter().copied().collect();
    quote_quantities(&Catalog::builtin(), &Rates::default(), quantities)
}

fn value<'a>(fields: &'a [FormField], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

fn names(fields: &[FormField]) -> Vec<&str> {
    fields.iter().map(|(n, _)| n.as_str()).collect()
}

#[test]
fn fields_are_ordered_and_totals_formatted() {
    let project = project("alex@example.com");
    let quote = quote(&[
        (ProductId::WiredBeltpack, 8),
        (ProductId::CustomerHeadset, 8),
    ]);
    let fields = build_form_fields(&Submission {
        project: &project,
        locations: &[],
        quote: &quote,
    });

    assert_eq!(
        names(&fields),
        [
            "Config_Name",
            "Organization",
            "Designer",
            "Email",
            "_replyto",
            "_subject",
            "---",
            "Validation_Status",
            "Warning_01",
            "--- Bill of Materials ---",
            "Item_01",
            "--- Summary ---",
            "Equipment_Total",
            "Support_Materials",
            "Labor",
            "Programming",
            "GRAND_TOTAL",
        ]
    );
    assert_eq!(value(&fields, "_replyto"), Some("alex@example.com"));
    assert_eq!(value(&fields, "Validation_Status"), Some("REVIEW"));
    assert!(value(&fields, "Warning_01")
        .unwrap()
        .starts_with("Infrastructure Warning"));
    assert_eq!(
        value(&fields, "Item_01"),
        Some("(x8) 32 Channel Wired Beltpack [GGO-GBPX] --- $8,250.64")
    );
    assert_eq!(value(&fields, "Equipment_Total"), Some("$8,250.64"));
    assert_eq!(value(&fields, "Labor"), Some("$1,650.13"));
    assert_eq!(value(&fields, "Programming"), Some("$412.53"));
    assert_eq!(value(&fields, "Support_Materials"), Some("$412.53"));
    assert_eq!(value(&fields, "GRAND_TOTAL"), Some("$10,725.83"));
}

#[test]
fn replyto_omitted_without_email() {
    let project = project("  ");
    let quote = quote(&[(ProductId::WiredBeltpack, 1)]);
    let fields = build_form_fields(&Submission {
        project: &project,
        locations: &[],
        quote: &quote,
    });
    assert!(value(&fields, "_replyto").is_none());
    assert_eq!(value(&fields, "Email"), Some(""));
}

#[test]
fn items_sorted_by_name() {
    let project = project("");
    let quote = quote(&[
        (ProductId::HeadsetSingle, 2),
        (ProductId::Switch8, 1),
        (ProductId::WiredBeltpack, 2),
    ]);
    let fields = build_form_fields(&Submission {
        project: &project,
        locations: &[],
        quote: &quote,
    });

    let items: Vec<&str> = fields
        .iter()
        .filter(|(n, _)| n.starts_with("Item_"))
        .map(|(_, v)| v.as_str())
        .collect();
    assert_eq!(items.len(), 3);
    assert!(items[0].contains("32 Channel Wired Beltpack"));
    assert!(items[1].contains("8 PoE Ports"));
    assert!(items[2].contains("Single Cup Headset"));
    assert_eq!(value(&fields, "Validation_Status"), Some("PASS"));
    assert!(value(&fields, "Warning_01").is_none());
}

#[test]
fn manual_location_is_not_listed() {
    let project = project("");
    let stage = LocationDraft {
        name: "Stage".to_string(),
        wired_count: 2,
        headsets: HeadsetSplit {
            std_one_ear: 2,
            ..Default::default()
        },
        ..Default::default()
    }
    .finalize(Uuid::new_v4())
    .unwrap();
    let locations = vec![stage, Location::manual()];
    let quote = quote(&[(ProductId::WiredBeltpack, 2)]);

    let fields = build_form_fields(&Submission {
        project: &project,
        locations: &locations,
        quote: &quote,
    });

    assert_eq!(
        value(&fields, "Location_01"),
        Some("Stage: 2 wired beltpack; headsets: 2 std 1-ear")
    );
    assert!(value(&fields, "Location_02").is_none());
}
