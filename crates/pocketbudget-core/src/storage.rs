use pocketbudget_domain::Ledger;

use crate::CoreError;

/// Abstraction over persistence backends holding the single tracker snapshot.
pub trait StateStore: Send + Sync {
    /// Loads the persisted ledger. An absent or unreadable snapshot yields the
    /// documented defaults; backends log the fallback and never fail the call.
    fn load(&self) -> Ledger;

    /// Overwrites the persisted snapshot with the full contents of `ledger`.
    fn save(&self, ledger: &Ledger) -> Result<(), CoreError>;
}
