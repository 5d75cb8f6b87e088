//! Derived report types handed to the rendering layer.

use serde::{Deserialize, Serialize};

use crate::month::MonthKey;

/// Label of the synthetic slice representing unspent budget.
pub const UNUSED_SLICE_LABEL: &str = "Unused";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// Summary figures for a single month.
pub struct MonthSummary {
    pub month: MonthKey,
    pub total_budget: f64,
    pub total_spent: f64,
    pub remaining: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One labeled value of the breakdown chart.
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
}

impl ChartSlice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// The slice standing in for unspent budget, floored at zero when the
    /// month is overspent.
    pub fn unused(remaining: f64) -> Self {
        Self::new(UNUSED_SLICE_LABEL, remaining.max(0.0))
    }

    pub fn is_unused(&self) -> bool {
        self.label == UNUSED_SLICE_LABEL
    }
}
