//! Chart slice derivation for the breakdown view.

use pocketbudget_domain::{ChartSlice, Ledger, MonthKey};

use crate::SummaryService;

/// Turns a month's expenses into the labeled values the chart renders.
pub struct ChartService;

impl ChartService {
    /// One slice per visible record, labeled with its category, plus the
    /// synthetic "Unused" slice. Overspend floors that slice at zero instead
    /// of dropping it, so the deficit is simply not drawn.
    pub fn chart_slices(ledger: &Ledger, month: MonthKey) -> Vec<ChartSlice> {
        let mut slices: Vec<ChartSlice> = ledger
            .expenses_for(month)
            .map(|record| ChartSlice::new(record.category.clone(), record.amount))
            .collect();
        slices.push(ChartSlice::unused(SummaryService::remaining(ledger, month)));
        slices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketbudget_domain::{ExpenseRecord, UNUSED_SLICE_LABEL};

    fn march() -> MonthKey {
        MonthKey::new(2024, 3).unwrap()
    }

    #[test]
    fn produces_the_documented_scenario_slices() {
        let mut ledger = Ledger::default();
        ledger.insert_expense(ExpenseRecord::new("Car", 150.0, false), march());

        let slices = ChartService::chart_slices(&ledger, march());
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0], ChartSlice::new("Car", 150.0));
        assert_eq!(slices[1], ChartSlice::new(UNUSED_SLICE_LABEL, 850.0));
    }

    #[test]
    fn slice_values_sum_to_spent_plus_floored_remaining() {
        let mut ledger = Ledger::default();
        ledger.insert_expense(ExpenseRecord::new("Car", 150.0, false), march());
        ledger.insert_expense(ExpenseRecord::new("Handy", 30.0, true), march());

        let total: f64 = ChartService::chart_slices(&ledger, march())
            .iter()
            .map(|slice| slice.value)
            .sum();
        let spent = SummaryService::total_spent(&ledger, march());
        let remaining = SummaryService::remaining(&ledger, march());
        assert_eq!(total, spent + remaining.max(0.0));
        assert_eq!(total, ledger.total_budget.max(spent));
    }

    #[test]
    fn overspent_months_keep_a_zero_unused_slice() {
        let mut ledger = Ledger::default();
        ledger.insert_expense(ExpenseRecord::new("Car", 1500.0, false), march());

        let slices = ChartService::chart_slices(&ledger, march());
        let unused = slices.last().expect("unused slice present");
        assert!(unused.is_unused());
        assert_eq!(unused.value, 0.0);
    }

    #[test]
    fn empty_months_still_chart_the_full_budget_as_unused() {
        let ledger = Ledger::default();
        let slices = ChartService::chart_slices(&ledger, march());
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0], ChartSlice::new(UNUSED_SLICE_LABEL, 1000.0));
    }
}
