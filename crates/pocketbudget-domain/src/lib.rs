//! pocketbudget-domain
//!
//! Pure domain models (Ledger, ExpenseRecord, MonthKey) and the derived
//! report types the presentation layer consumes.
//! No I/O, no CLI, no storage. Only data types and core queries.

pub mod expense;
pub mod ledger;
pub mod month;
pub mod summary;

pub use expense::*;
pub use ledger::*;
pub use month::*;
pub use summary::*;
