//! Menu and confirmation output.

use gym_membership_core_rs::{Catalog, PriceBreakdown, Selection};
use std::io::{self, Write};

/// Print the plan and feature menu
pub fn write_menu<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "\n--- GYM MEMBERSHIP SYSTEM ---")?;
    writeln!(out, "Available Plans:")?;
    for plan in catalog.plans() {
        writeln!(
            out,
            " - {}: ${} ({})",
            plan.name(),
            plan.base_cost(),
            plan.description()
        )?;
    }

    writeln!(out, "\nAvailable Features:")?;
    for feature in catalog.features() {
        let premium_tag = if feature.is_premium() { " [PREMIUM]" } else { "" };
        writeln!(out, " - {}: ${}{}", feature.name(), feature.cost(), premium_tag)?;
    }
    Ok(())
}

/// Print the summary shown before asking for confirmation
pub fn write_confirmation<W: Write>(
    out: &mut W,
    selection: &Selection,
    breakdown: &PriceBreakdown,
) -> io::Result<()> {
    let features = if selection.features().is_empty() {
        "None".to_string()
    } else {
        selection.features().join(", ")
    };

    writeln!(out, "\n--- CONFIRMATION ---")?;
    writeln!(out, "Plan: {}", selection.plan())?;
    writeln!(out, "Features: {}", features)?;
    writeln!(out, "Members: {}", selection.members())?;
    if breakdown.group_discount_applied {
        writeln!(out, "Group discount applied")?;
    }
    if breakdown.premium_surcharge_applied {
        writeln!(out, "Premium surcharge applied")?;
    }
    if let Some(offer) = breakdown.special_offer {
        writeln!(
            out,
            "Special offer: -${} (total over ${})",
            offer.discount, offer.threshold
        )?;
    }
    writeln!(out, "Calculated Total Cost: ${}", breakdown.total)?;
    Ok(())
}
