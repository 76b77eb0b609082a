//! Membership plan model
//!
//! A plan is the mandatory part of every subscription. Each plan has:
//! - Name (unique, case-sensitive catalog key)
//! - Base cost (i64 currency units)
//! - Description (display only, never used for pricing)
//! - Group coverage flag (plan price covers the whole group)

use serde::{Deserialize, Serialize};

/// A membership plan offered by the gym
///
/// # Example
/// ```
/// use gym_membership_core_rs::Plan;
///
/// let plan = Plan::new("Family", 150, "Access for 4 family members").covering_group();
/// assert_eq!(plan.base_cost(), 150);
/// assert!(plan.covers_group());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Catalog key
    name: String,

    /// Price of the plan before features and adjustments
    base_cost: i64,

    /// Human readable summary shown in the menu
    #[serde(default)]
    description: String,

    /// When true the plan price is charged once for the whole group
    /// instead of once per member.
    #[serde(default)]
    covers_group: bool,
}

impl Plan {
    /// Create a per-member plan
    pub fn new(name: impl Into<String>, base_cost: i64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_cost,
            description: description.into(),
            covers_group: false,
        }
    }

    /// Mark the plan as covering the whole group (builder pattern)
    pub fn covering_group(mut self) -> Self {
        self.covers_group = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_cost(&self) -> i64 {
        self.base_cost
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn covers_group(&self) -> bool {
        self.covers_group
    }
}
