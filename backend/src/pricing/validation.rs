//! Selection validation
//!
//! Checks that a requested plan and every requested feature exist in the
//! catalog. Only the first problem is reported: the plan is checked before
//! any feature, and features are scanned in input order.

use crate::catalog::Catalog;
use crate::models::{Feature, Plan};
use thiserror::Error;

/// Reasons a selection cannot be priced
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Plan '{0}' does not exist.")]
    InvalidPlan(String),

    #[error("Feature '{0}' is not available.")]
    InvalidFeature(String),

    #[error("Member count must be at least 1, got {0}")]
    InvalidMemberCount(u32),

    #[error("Total cost exceeds the supported amount range")]
    TotalOverflow,
}

/// Validate plan and feature names against the catalog
///
/// # Example
/// ```
/// use gym_membership_core_rs::{validate_selection, Catalog, SelectionError};
///
/// let catalog = Catalog::default();
/// assert!(validate_selection(&catalog, "Basic", &["Diet Plan"]).is_ok());
///
/// let err = validate_selection(&catalog, "Basic", &["Space Travel", "Yoga"]).unwrap_err();
/// assert_eq!(err, SelectionError::InvalidFeature("Space Travel".to_string()));
/// assert_eq!(err.to_string(), "Feature 'Space Travel' is not available.");
/// ```
pub fn validate_selection<S: AsRef<str>>(
    catalog: &Catalog,
    plan_name: &str,
    features: &[S],
) -> Result<(), SelectionError> {
    resolve_selection(catalog, plan_name, features).map(|_| ())
}

/// Resolve names to catalog entries, failing on the first unknown name
///
/// Features are returned one per input entry, duplicates included.
pub(crate) fn resolve_selection<'c, S: AsRef<str>>(
    catalog: &'c Catalog,
    plan_name: &str,
    features: &[S],
) -> Result<(&'c Plan, Vec<&'c Feature>), SelectionError> {
    let plan = catalog
        .plan(plan_name)
        .ok_or_else(|| SelectionError::InvalidPlan(plan_name.to_string()))?;

    let resolved = features
        .iter()
        .map(|name| {
            let name = name.as_ref();
            catalog
                .feature(name)
                .ok_or_else(|| SelectionError::InvalidFeature(name.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((plan, resolved))
}
