//! Aggregation over the expenses visible in a month.

use pocketbudget_domain::{ExpenseRecord, Ledger, MonthKey, MonthSummary};

/// Derives the spent/remaining figures the summary panel displays.
///
/// See also: [`pocketbudget_domain::MonthSummary`] for the returned data
/// model.
pub struct SummaryService;

impl SummaryService {
    /// The records visible in `month`: its one-off expenses followed by all
    /// permanent expenses, each part in insertion order.
    pub fn month_expenses(ledger: &Ledger, month: MonthKey) -> Vec<ExpenseRecord> {
        ledger.expenses_for(month).cloned().collect()
    }

    /// Sum of the visible amounts; the empty sum is 0.
    pub fn total_spent(ledger: &Ledger, month: MonthKey) -> f64 {
        ledger.expenses_for(month).map(|record| record.amount).sum()
    }

    /// Budget minus spend. May be negative; never clamped.
    pub fn remaining(ledger: &Ledger, month: MonthKey) -> f64 {
        ledger.total_budget - Self::total_spent(ledger, month)
    }

    pub fn summarize(ledger: &Ledger, month: MonthKey) -> MonthSummary {
        let total_spent = Self::total_spent(ledger, month);
        MonthSummary {
            month,
            total_budget: ledger.total_budget,
            total_spent,
            remaining: ledger.total_budget - total_spent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketbudget_domain::ExpenseRecord;

    fn march() -> MonthKey {
        MonthKey::new(2024, 3).unwrap()
    }

    #[test]
    fn summarizes_the_documented_scenario() {
        let mut ledger = Ledger::default();
        ledger.insert_expense(ExpenseRecord::new("Car", 150.0, false), march());

        let summary = SummaryService::summarize(&ledger, march());
        assert_eq!(summary.total_budget, 1000.0);
        assert_eq!(summary.total_spent, 150.0);
        assert_eq!(summary.remaining, 850.0);
    }

    #[test]
    fn total_spent_covers_monthly_and_permanent_records() {
        let mut ledger = Ledger::default();
        ledger.insert_expense(ExpenseRecord::new("Car", 150.0, false), march());
        ledger.insert_expense(ExpenseRecord::new("Sonstige", 20.5, false), march());
        ledger.insert_expense(ExpenseRecord::new("Handy", 30.0, true), march());

        assert_eq!(SummaryService::total_spent(&ledger, march()), 200.5);
    }

    #[test]
    fn empty_months_sum_to_zero() {
        let ledger = Ledger::default();
        assert_eq!(SummaryService::total_spent(&ledger, march()), 0.0);
        assert_eq!(SummaryService::remaining(&ledger, march()), 1000.0);
    }

    #[test]
    fn permanent_expenses_count_against_every_month() {
        let mut ledger = Ledger::default();
        ledger.insert_expense(ExpenseRecord::new("Handy", 30.0, true), march());

        let other = MonthKey::new(2025, 7).unwrap();
        assert_eq!(SummaryService::total_spent(&ledger, other), 30.0);
        let visible = SummaryService::month_expenses(&ledger, other);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].category, "Handy");
    }

    #[test]
    fn overspend_turns_remaining_negative() {
        let mut ledger = Ledger::default();
        ledger.insert_expense(ExpenseRecord::new("Car", 1250.0, false), march());
        assert_eq!(SummaryService::remaining(&ledger, march()), -250.0);
    }
}
