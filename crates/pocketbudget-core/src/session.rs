//! Session facade owning the ledger, the selected month, and the store.

use pocketbudget_domain::{ChartSlice, ExpenseRecord, Ledger, MonthKey, MonthSummary};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    CategoryService, ChartService, Clock, ExpenseService, LedgerService, MonthService,
    StateStore, SummaryService,
};

/// Outcome of the snapshot write triggered by the most recent mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed,
}

/// Exclusive owner of the in-memory ledger for one UI session.
///
/// Every mutation writes a full snapshot through the store before returning;
/// a failed write is logged and otherwise ignored, leaving the in-memory
/// state authoritative for the rest of the session. The presentation layer
/// depends only on this facade.
pub struct TrackerSession {
    ledger: Ledger,
    selected_month: MonthKey,
    store: Box<dyn StateStore>,
    save_notice: Option<SaveOutcome>,
}

impl TrackerSession {
    /// Loads the persisted snapshot (or the documented defaults) and selects
    /// the clock's current month.
    pub fn open(store: Box<dyn StateStore>, clock: &dyn Clock) -> Self {
        let ledger = store.load();
        Self {
            ledger,
            selected_month: MonthService::current_month(clock),
            store,
            save_notice: None,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn selected_month(&self) -> MonthKey {
        self.selected_month
    }

    /// Changes the month the queries below are scoped to. Selection is
    /// session state, not part of the persisted snapshot.
    pub fn select_month(&mut self, month: MonthKey) {
        self.selected_month = month;
    }

    /// Adds an expense against the selected month. Returns the new record id,
    /// or `None` when the input was rejected (no snapshot is written then).
    pub fn add_expense(
        &mut self,
        category: &str,
        raw_amount: &str,
        is_permanent: bool,
    ) -> Option<Uuid> {
        let id = ExpenseService::add_expense(
            &mut self.ledger,
            category,
            raw_amount,
            is_permanent,
            self.selected_month,
        );
        if id.is_some() {
            self.persist();
        }
        id
    }

    /// Deletes the record with `id` from the bucket `is_permanent` selects,
    /// scoped to the selected month for one-off records.
    pub fn delete_expense(&mut self, id: Uuid, is_permanent: bool) -> bool {
        let removed =
            ExpenseService::delete_expense(&mut self.ledger, id, is_permanent, self.selected_month);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn add_category(&mut self, name: &str) -> bool {
        let added = CategoryService::add_category(&mut self.ledger, name);
        if added {
            self.persist();
        }
        added
    }

    pub fn set_total_budget(&mut self, value: f64) {
        LedgerService::set_total_budget(&mut self.ledger, value);
        self.persist();
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        let dark = LedgerService::toggle_dark_mode(&mut self.ledger);
        self.persist();
        dark
    }

    /// The expenses visible in the selected month.
    pub fn month_expenses(&self) -> Vec<ExpenseRecord> {
        SummaryService::month_expenses(&self.ledger, self.selected_month)
    }

    pub fn summary(&self) -> MonthSummary {
        SummaryService::summarize(&self.ledger, self.selected_month)
    }

    pub fn chart_slices(&self) -> Vec<ChartSlice> {
        ChartService::chart_slices(&self.ledger, self.selected_month)
    }

    pub fn available_months(&self, clock: &dyn Clock) -> Vec<MonthKey> {
        MonthService::available_months(clock)
    }

    /// Takes the pending save notice, if any. Each mutation replaces the
    /// previous notice, so only the latest outcome is ever reported.
    pub fn take_save_notice(&mut self) -> Option<SaveOutcome> {
        self.save_notice.take()
    }

    fn persist(&mut self) {
        match self.store.save(&self.ledger) {
            Ok(()) => {
                debug!("ledger snapshot written");
                self.save_notice = Some(SaveOutcome::Saved);
            }
            Err(err) => {
                warn!("ignoring failed ledger snapshot write: {err}");
                self.save_notice = Some(SaveOutcome::Failed);
            }
        }
    }
}
