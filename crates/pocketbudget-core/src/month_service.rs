//! Month selection: the rolling window offered by the month picker.

use pocketbudget_domain::MonthKey;

use crate::Clock;

/// Number of months offered for selection.
pub const MONTH_WINDOW: usize = 12;

/// Generates the candidate months for the selector. The window is derived
/// from the clock alone; months with stored expenses outside it stay in the
/// snapshot but out of the selector.
pub struct MonthService;

impl MonthService {
    /// The key of the clock's current calendar month.
    pub fn current_month(clock: &dyn Clock) -> MonthKey {
        MonthKey::containing(clock.today())
    }

    /// The twelve month keys ending at the current month, newest first.
    pub fn available_months(clock: &dyn Clock) -> Vec<MonthKey> {
        Self::window_ending_at(Self::current_month(clock))
    }

    /// The selection window ending at `current`, stepping backward one month
    /// at a time. First-seen order wins on duplicates.
    pub fn window_ending_at(current: MonthKey) -> Vec<MonthKey> {
        let mut months = Vec::with_capacity(MONTH_WINDOW);
        let mut cursor = current;
        for _ in 0..MONTH_WINDOW {
            if !months.contains(&cursor) {
                months.push(cursor);
            }
            cursor = cursor.previous();
        }
        months
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.from_utc_datetime(&self.0.and_hms_opt(12, 0, 0).unwrap())
        }
    }

    #[test]
    fn window_spans_twelve_months_newest_first() {
        let months = MonthService::window_ending_at(MonthKey::new(2024, 3).unwrap());
        assert_eq!(months.len(), MONTH_WINDOW);
        assert_eq!(months[0], MonthKey::new(2024, 3).unwrap());
        assert_eq!(months[2], MonthKey::new(2024, 1).unwrap());
        assert_eq!(months[3], MonthKey::new(2023, 12).unwrap());
        assert_eq!(months[11], MonthKey::new(2023, 4).unwrap());
    }

    #[test]
    fn window_contains_no_duplicates() {
        let months = MonthService::window_ending_at(MonthKey::new(2024, 12).unwrap());
        let mut seen = months.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), months.len());
    }

    #[test]
    fn current_month_follows_the_clock() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(
            MonthService::current_month(&clock),
            MonthKey::new(2024, 3).unwrap()
        );
        let months = MonthService::available_months(&clock);
        assert_eq!(months[0], MonthKey::new(2024, 3).unwrap());
    }
}
