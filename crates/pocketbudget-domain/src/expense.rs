//! Domain type for individual expense records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single expense entered against the budget.
///
/// The `is_permanent` flag is fixed at creation and selects the bucket the
/// record lives in for its entire lifetime: permanent records are counted
/// against every month, one-off records only against the month they were
/// entered for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub category: String,
    pub amount: f64,
    pub is_permanent: bool,
}

impl ExpenseRecord {
    pub fn new(category: impl Into<String>, amount: f64, is_permanent: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            amount,
            is_permanent,
        }
    }
}
