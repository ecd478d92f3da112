//! Flattening a finished design into the relay's form fields.

use commsbom_core::{format_usd, KeyPanelMount, Location, ProjectDetails, Quote};

/// Everything the notification email reports on.
#[derive(Debug, Clone, Copy)]
pub struct Submission<'a> {
    pub project: &'a ProjectDetails,
    pub locations: &'a [Location],
    pub quote: &'a Quote,
}

/// One `name=value` form field. Order matters: the relay renders fields in
/// the order received.
pub type FormField = (String, String);

fn field(name: impl Into<String>, value: impl Into<String>) -> FormField {
    (name.into(), value.into())
}

fn numbered(prefix: &str, n: usize) -> String {
    format!("{prefix}_{n:02}")
}

/// Builds the ordered form fields for a design.
#[must_use]
pub fn build_form_fields(submission: &Submission<'_>) -> Vec<FormField> {
    let project = submission.project;
    let breakdown = &submission.quote.breakdown;
    let validation = &submission.quote.validation;

    let mut fields = vec![
        field("Config_Name", project.config_name.trim()),
        field("Organization", project.organization.trim()),
        field("Designer", project.designer.trim()),
        field("Email", project.email.trim()),
    ];
    if !project.email.trim().is_empty() {
        fields.push(field("_replyto", project.email.trim()));
    }
    fields.push(field(
        "_subject",
        format!("Intercom design: {}", project.config_name.trim()),
    ));
    fields.push(field("---", "---"));

    for (i, location) in submission
        .locations
        .iter()
        .filter(|l| !l.is_manual)
        .enumerate()
    {
        fields.push(field(numbered("Location", i + 1), describe_location(location)));
    }

    fields.push(field("Validation_Status", validation.status.to_string()));
    for (i, message) in validation.messages().into_iter().enumerate() {
        fields.push(field(numbered("Warning", i + 1), message));
    }

    fields.push(field("--- Bill of Materials ---", "---"));
    let mut items: Vec<_> = breakdown.purchasable_items().collect();
    items.sort_by(|a, b| a.product.name.cmp(&b.product.name));
    for (i, item) in items.into_iter().enumerate() {
        fields.push(field(
            numbered("Item", i + 1),
            format!(
                "(x{}) {} [{}] --- {}",
                item.quantity,
                item.product.name,
                item.product.sku,
                format_usd(item.line_total)
            ),
        ));
    }

    fields.push(field("--- Summary ---", "---"));
    fields.push(field("Equipment_Total", format_usd(breakdown.equipment_cost)));
    fields.push(field(
        "Support_Materials",
        format_usd(breakdown.support_materials_cost),
    ));
    fields.push(field("Labor", format_usd(breakdown.labor_cost)));
    fields.push(field("Programming", format_usd(breakdown.programming_cost)));
    fields.push(field("GRAND_TOTAL", format_usd(breakdown.grand_total)));
    fields
}

fn describe_location(location: &Location) -> String {
    let mut devices = Vec::new();
    if location.key_panel_count > 0 {
        let mount = match location.key_panel_mount {
            KeyPanelMount::Desktop => "desktop",
            KeyPanelMount::Rackmount => "rackmount",
        };
        devices.push(format!("{} key panel ({mount})", location.key_panel_count));
    }
    if location.wired_count > 0 {
        devices.push(format!("{} wired beltpack", location.wired_count));
    }
    if location.wireless_count > 0 {
        let sport = if location.is_heavy_duty { " (sport)" } else { "" };
        devices.push(format!("{} wireless beltpack{sport}", location.wireless_count));
    }
    if location.wall_station_count > 0 {
        devices.push(format!("{} wall station", location.wall_station_count));
    }
    if location.beacon_count > 0 {
        devices.push(format!("{} beacon", location.beacon_count));
    }

    let split = &location.headset_split;
    let headsets: Vec<String> = [
        (split.std_one_ear, "std 1-ear"),
        (split.std_dual_ear, "std 2-ear"),
        (split.comfort_one_ear, "comfort 1-ear"),
        (split.comfort_dual_ear, "comfort 2-ear"),
        (split.handset, "handset"),
        (split.customer_supplied, "customer supplied"),
    ]
    .into_iter()
    .filter(|(n, _)| *n > 0)
    .map(|(n, label)| format!("{n} {label}"))
    .collect();

    let devices = if devices.is_empty() {
        "no devices".to_string()
    } else {
        devices.join(", ")
    };
    if headsets.is_empty() {
        format!("{}: {devices}", location.name)
    } else {
        format!("{}: {devices}; headsets: {}", location.name, headsets.join(", "))
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
