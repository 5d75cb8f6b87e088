//! Adding and deleting expense records.

use pocketbudget_domain::{ExpenseRecord, Ledger, MonthKey};
use uuid::Uuid;

/// Creates and removes expense records, including the input screening the
/// entry form performs.
pub struct ExpenseService;

impl ExpenseService {
    /// Parses and commits a new expense against `month` (ignored for
    /// permanent records). Returns the new record id, or `None` when the
    /// input is rejected: an empty category, or a `raw_amount` that does not
    /// parse to a finite number. Rejected input leaves the ledger untouched.
    pub fn add_expense(
        ledger: &mut Ledger,
        category: &str,
        raw_amount: &str,
        is_permanent: bool,
        month: MonthKey,
    ) -> Option<Uuid> {
        if category.is_empty() {
            return None;
        }
        let amount = parse_amount(raw_amount)?;
        let record = ExpenseRecord::new(category, amount, is_permanent);
        Some(ledger.insert_expense(record, month))
    }

    /// Removes the record with `id` from the bucket `is_permanent` selects.
    /// Returns whether a record was removed; unknown ids are a no-op.
    pub fn delete_expense(
        ledger: &mut Ledger,
        id: Uuid,
        is_permanent: bool,
        month: MonthKey,
    ) -> bool {
        ledger.remove_expense(id, is_permanent, month)
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
