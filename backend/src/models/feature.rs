//! Optional add-on feature model

use serde::{Deserialize, Serialize};

/// An optional feature that can be added to any plan
///
/// Selecting at least one premium feature triggers the premium surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    name: String,
    cost: i64,
    #[serde(default)]
    is_premium: bool,
}

impl Feature {
    pub fn new(name: impl Into<String>, cost: i64) -> Self {
        Self {
            name: name.into(),
            cost,
            is_premium: false,
        }
    }

    /// Flag the feature as premium (builder pattern)
    pub fn premium(mut self) -> Self {
        self.is_premium = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> i64 {
        self.cost
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium
    }
}
