use pocketbudget_domain::Ledger;

/// Ledger-level settings: the total budget and the display preference.
pub struct LedgerService;

impl LedgerService {
    /// Replaces the total budget unconditionally. Negative and non-finite
    /// values are accepted; the entry form performs no validation here.
    pub fn set_total_budget(ledger: &mut Ledger, value: f64) {
        ledger.total_budget = value;
    }

    /// Flips the dark-mode preference and returns the new value.
    pub fn toggle_dark_mode(ledger: &mut Ledger) -> bool {
        ledger.dark_mode = !ledger.dark_mode;
        ledger.dark_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_accepts_any_value() {
        let mut ledger = Ledger::default();
        LedgerService::set_total_budget(&mut ledger, -250.0);
        assert_eq!(ledger.total_budget, -250.0);
        LedgerService::set_total_budget(&mut ledger, f64::INFINITY);
        assert!(ledger.total_budget.is_infinite());
    }

    #[test]
    fn dark_mode_toggles_back_and_forth() {
        let mut ledger = Ledger::default();
        assert!(LedgerService::toggle_dark_mode(&mut ledger));
        assert!(!LedgerService::toggle_dark_mode(&mut ledger));
    }
}
