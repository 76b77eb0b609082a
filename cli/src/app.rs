//! Subscription flow: menu, selection, validation, pricing, confirmation.

use crate::cli::Cli;
use crate::display::{write_confirmation, write_menu};
use crate::prompt::{ask, is_confirmed, parse_features, parse_members};
use anyhow::{Context, Result};
use gym_membership_core_rs::{price_selection, validate_selection, Catalog, Selection};
use std::io::{BufRead, Write};
use std::path::Path;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Subscription confirmed at this total
    Confirmed { total: i64 },

    /// User declined at the confirmation prompt
    Cancelled,

    /// Input or selection was rejected
    Rejected,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Confirmed { .. })
    }
}

/// Load the catalog file, or the built-in catalog when no path is given
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::default());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    Catalog::from_json(&json).with_context(|| format!("invalid catalog {}", path.display()))
}

/// Run one subscription. Values given on the command line are not prompted for.
pub fn run<R: BufRead, W: Write>(
    args: &Cli,
    catalog: &Catalog,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome> {
    write_menu(out, catalog)?;

    let Some(selection) = read_selection(args, input, out)? else {
        return Ok(Outcome::Rejected);
    };

    if let Err(e) = validate_selection(catalog, selection.plan(), selection.features()) {
        tracing::warn!(error = %e, "selection rejected");
        writeln!(out, "Error: {}", e)?;
        return Ok(Outcome::Rejected);
    }

    let breakdown = match price_selection(catalog, &selection) {
        Ok(breakdown) => breakdown,
        Err(e) => {
            writeln!(out, "Calculation Error: {}", e)?;
            return Ok(Outcome::Rejected);
        }
    };
    write_confirmation(out, &selection, &breakdown)?;

    let confirmed = args.yes || is_confirmed(&ask(input, out, "Confirm subscription? (yes/no): ")?);
    if !confirmed {
        writeln!(out, "Cancelled by user.")?;
        return Ok(Outcome::Cancelled);
    }

    tracing::info!(plan = selection.plan(), total = breakdown.total, "subscription confirmed");
    writeln!(out, "Success! Total to pay: ${}", breakdown.total)?;
    Ok(Outcome::Confirmed {
        total: breakdown.total,
    })
}

/// Gather the selection from flags and prompts; `None` after an input error
fn read_selection<R: BufRead, W: Write>(
    args: &Cli,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Selection>> {
    let plan = match &args.plan {
        Some(plan) => plan.clone(),
        None => ask(input, out, "\nSelect Membership Plan: ")?,
    };
    if plan.is_empty() {
        writeln!(out, "Input Error: Plan name is required.")?;
        return Ok(None);
    }

    let features = if args.plan.is_some() || !args.features.is_empty() {
        args.features.clone()
    } else {
        writeln!(
            out,
            "Enter additional features separated by comma (or press enter for none):"
        )?;
        parse_features(&ask(input, out, "> ")?)
    };

    let members = match args.members {
        Some(members) => members,
        None => {
            let line = ask(input, out, "How many members are signing up? ")?;
            match parse_members(&line) {
                Ok(members) => members,
                Err(e) => {
                    writeln!(out, "Input Error: {:#}", e)?;
                    return Ok(None);
                }
            }
        }
    };

    Ok(Some(Selection::new(plan, members).with_features(features)))
}
