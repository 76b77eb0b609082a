//! Cost Calculator
//!
//! Prices a validated selection. The pipeline order is load-bearing; each
//! step works on the output of the previous one:
//!
//! ```text
//! 1. subtotal = plan base cost + cost of every listed feature
//! 2. × member count            (skipped for plans that cover the group)
//! 3. × (1 - group discount)     if member count >= group threshold
//! 4. × (1 + premium surcharge)  if any selected feature is premium
//! 5. - offer discount           first offer whose threshold is exceeded
//! 6. truncate toward zero
//! ```
//!
//! # Exact arithmetic
//!
//! The running total is an i128 scaled by `BPS_SCALE²`. Each rate step
//! multiplies by a basis-point factor and divides by `BPS_SCALE` once, so
//! the scaled value stays an exact integer through both rate steps. Offer
//! thresholds are compared against the exact value and the final division
//! truncates toward zero. No floating point is involved. Every
//! multiplication is checked; amounts outside the i64 money range are
//! reported as `TotalOverflow`.

use crate::catalog::{Catalog, BPS_SCALE};
use crate::models::{SpecialOffer, Selection};
use crate::pricing::validation::{resolve_selection, SelectionError};
use serde::{Deserialize, Serialize};

/// Fixed-point scale of the running total
const TOTAL_SCALE: i128 = (BPS_SCALE as i128) * (BPS_SCALE as i128);

/// Every intermediate result of one pricing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Plan base cost plus feature costs
    pub subtotal: i64,

    /// Subtotal after per-member scaling
    pub scaled_subtotal: i64,

    /// Group discount step applied
    pub group_discount_applied: bool,

    /// Premium surcharge step applied
    pub premium_surcharge_applied: bool,

    /// The special offer that applied, if any
    pub special_offer: Option<SpecialOffer>,

    /// Final truncated total
    pub total: i64,
}

/// Calculate the total cost of a subscription
///
/// Unknown plan or feature names and a zero member count are returned as
/// [`SelectionError`]. A selection whose subtotal or total does not fit in
/// an i64 returns [`SelectionError::TotalOverflow`].
///
/// # Example
/// ```
/// use gym_membership_core_rs::{calculate_total_cost, Catalog};
///
/// let catalog = Catalog::default();
/// // Family plan is not scaled: 150 + 50 = 200, +15% = 230, offer > 200 = -20
/// assert_eq!(calculate_total_cost(&catalog, "Family", &["Exclusive Access"], 1), Ok(210));
/// ```
pub fn calculate_total_cost<S: AsRef<str>>(
    catalog: &Catalog,
    plan_name: &str,
    features: &[S],
    member_count: u32,
) -> Result<i64, SelectionError> {
    price_breakdown(catalog, plan_name, features, member_count).map(|b| b.total)
}

/// Price a [`Selection`]
pub fn price_selection(
    catalog: &Catalog,
    selection: &Selection,
) -> Result<PriceBreakdown, SelectionError> {
    price_breakdown(
        catalog,
        selection.plan(),
        selection.features(),
        selection.members(),
    )
}

/// Run the pricing pipeline and report every intermediate step
pub fn price_breakdown<S: AsRef<str>>(
    catalog: &Catalog,
    plan_name: &str,
    features: &[S],
    member_count: u32,
) -> Result<PriceBreakdown, SelectionError> {
    if member_count == 0 {
        return Err(SelectionError::InvalidMemberCount(member_count));
    }
    let (plan, selected) = resolve_selection(catalog, plan_name, features)?;
    let rates = catalog.rates();

    // Step 1: base + features
    let subtotal = selected
        .iter()
        .try_fold(i128::from(plan.base_cost()), |acc, f| {
            acc.checked_add(i128::from(f.cost()))
        })
        .ok_or(SelectionError::TotalOverflow)?;

    // Step 2: per-member scaling
    let scaled_subtotal = if plan.covers_group() {
        subtotal
    } else {
        checked(subtotal.checked_mul(i128::from(member_count)))?
    };
    tracing::debug!(
        plan = plan.name(),
        members = member_count,
        subtotal = %subtotal,
        scaled_subtotal = %scaled_subtotal,
        "priced base and features"
    );

    let mut total = checked(scaled_subtotal.checked_mul(TOTAL_SCALE))?;

    // Step 3: group discount
    let group_discount_applied = rates.qualifies_for_group_discount(member_count);
    if group_discount_applied {
        total = apply_bps_factor(total, rates.group_factor_bps())?;
        tracing::debug!(bps = rates.group_discount_bps, "applied group discount");
    }

    // Step 4: premium surcharge (presence, not count)
    let premium_surcharge_applied = selected.iter().any(|f| f.is_premium());
    if premium_surcharge_applied {
        total = apply_bps_factor(total, rates.surcharge_factor_bps())?;
        tracing::debug!(bps = rates.premium_surcharge_bps, "applied premium surcharge");
    }

    // Step 5: first exceeded offer, catalog order
    let special_offer = catalog
        .special_offers()
        .iter()
        .find(|offer| total > i128::from(offer.threshold) * TOTAL_SCALE)
        .copied();
    if let Some(offer) = special_offer {
        total -= i128::from(offer.discount) * TOTAL_SCALE;
        tracing::debug!(
            threshold = offer.threshold,
            discount = offer.discount,
            "applied special offer"
        );
    }

    // Step 6: truncate toward zero
    let total = to_money(total / TOTAL_SCALE)?;
    tracing::debug!(total, "priced selection");

    Ok(PriceBreakdown {
        subtotal: to_money(subtotal)?,
        scaled_subtotal: to_money(scaled_subtotal)?,
        group_discount_applied,
        premium_surcharge_applied,
        special_offer,
        total,
    })
}

/// Multiply the scaled total by `factor_bps / BPS_SCALE`
fn apply_bps_factor(total: i128, factor_bps: i128) -> Result<i128, SelectionError> {
    Ok(checked(total.checked_mul(factor_bps))? / i128::from(BPS_SCALE))
}

fn checked(value: Option<i128>) -> Result<i128, SelectionError> {
    value.ok_or(SelectionError::TotalOverflow)
}

fn to_money(value: i128) -> Result<i64, SelectionError> {
    i64::try_from(value).map_err(|_| SelectionError::TotalOverflow)
}
