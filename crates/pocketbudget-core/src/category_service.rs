use pocketbudget_domain::Ledger;

/// Maintains the append-only category set.
pub struct CategoryService;

impl CategoryService {
    /// Appends `name` to the category set. No-op for empty names and exact
    /// duplicates (case-sensitive); returns whether the set changed.
    pub fn add_category(ledger: &mut Ledger, name: &str) -> bool {
        ledger.insert_category(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_identical_input_is_idempotent() {
        let mut ledger = Ledger::default();
        assert!(CategoryService::add_category(&mut ledger, "Travel"));
        assert!(!CategoryService::add_category(&mut ledger, "Travel"));

        let count = ledger
            .categories
            .iter()
            .filter(|name| name.as_str() == "Travel")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn appends_at_the_end_of_the_set() {
        let mut ledger = Ledger::default();
        CategoryService::add_category(&mut ledger, "Travel");
        assert_eq!(ledger.categories.last().map(String::as_str), Some("Travel"));
    }
}
