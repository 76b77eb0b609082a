//! Subscription request model
//!
//! A selection is what a caller asks to price. It is never persisted.
//! Features are kept exactly as given: repeated entries are charged once
//! per occurrence.

use serde::{Deserialize, Serialize};

/// Plan, features and member count chosen by the caller
///
/// # Example
/// ```
/// use gym_membership_core_rs::Selection;
///
/// let selection = Selection::new("Basic", 2).with_feature("Diet Plan");
/// assert_eq!(selection.features(), ["Diet Plan".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    plan: String,
    features: Vec<String>,
    members: u32,
}

impl Selection {
    pub fn new(plan: impl Into<String>, members: u32) -> Self {
        Self {
            plan: plan.into(),
            features: Vec::new(),
            members,
        }
    }

    /// Append one feature (builder pattern)
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Replace the feature list (builder pattern)
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn plan(&self) -> &str {
        &self.plan
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn members(&self) -> u32 {
        self.members
    }
}
