//! The persisted ledger aggregate: budget, categories, and expense buckets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{expense::ExpenseRecord, month::MonthKey};

/// Budget applied when no persisted value exists.
pub const DEFAULT_TOTAL_BUDGET: f64 = 1000.0;

/// Category set seeded into fresh ledgers.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Car", "Handy", "Fixed Cost", "Sonstige"];

/// The complete budgeting state persisted as one snapshot.
///
/// `permanent_expenses` holds records visible in every month; `monthly_data`
/// holds one-off records keyed by the month they belong to. A month key is
/// only present once an expense has been recorded for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    #[serde(default = "Ledger::default_total_budget")]
    pub total_budget: f64,
    #[serde(default)]
    pub permanent_expenses: Vec<ExpenseRecord>,
    #[serde(default)]
    pub monthly_data: BTreeMap<MonthKey, Vec<ExpenseRecord>>,
    #[serde(default = "Ledger::default_categories")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub dark_mode: bool,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            total_budget: Self::default_total_budget(),
            permanent_expenses: Vec::new(),
            monthly_data: BTreeMap::new(),
            categories: Self::default_categories(),
            dark_mode: false,
        }
    }
}

impl Ledger {
    /// Appends `record` to the bucket its `is_permanent` flag selects,
    /// creating the month bucket on first insertion. Returns the record id.
    pub fn insert_expense(&mut self, record: ExpenseRecord, month: MonthKey) -> Uuid {
        let id = record.id;
        if record.is_permanent {
            self.permanent_expenses.push(record);
        } else {
            self.monthly_data.entry(month).or_default().push(record);
        }
        id
    }

    /// Removes the record with `id` from the indicated bucket. Returns whether
    /// anything was removed; an absent id or month bucket is a no-op.
    pub fn remove_expense(&mut self, id: Uuid, is_permanent: bool, month: MonthKey) -> bool {
        let bucket = if is_permanent {
            Some(&mut self.permanent_expenses)
        } else {
            self.monthly_data.get_mut(&month)
        };
        match bucket {
            Some(records) => {
                let before = records.len();
                records.retain(|record| record.id != id);
                records.len() != before
            }
            None => false,
        }
    }

    /// Appends a category. No-op for empty names and exact (case-sensitive)
    /// duplicates; returns whether the set changed.
    pub fn insert_category(&mut self, name: &str) -> bool {
        if name.is_empty() || self.categories.iter().any(|existing| existing == name) {
            return false;
        }
        self.categories.push(name.to_string());
        true
    }

    /// All records visible in `month`: the month's one-off expenses followed
    /// by every permanent expense, each part in insertion order.
    pub fn expenses_for(&self, month: MonthKey) -> impl Iterator<Item = &ExpenseRecord> {
        self.monthly_data
            .get(&month)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .chain(self.permanent_expenses.iter())
    }

    pub fn default_total_budget() -> f64 {
        DEFAULT_TOTAL_BUDGET
    }

    pub fn default_categories() -> Vec<String> {
        DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect()
    }
}
