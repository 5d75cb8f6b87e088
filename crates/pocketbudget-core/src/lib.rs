//! pocketbudget-core
//!
//! Operations and derivations over the ledger, plus the session facade the
//! presentation layer talks to. Depends on pocketbudget-domain. No CLI, no
//! terminal I/O, no direct storage interactions.

pub mod category_service;
pub mod chart_service;
pub mod error;
pub mod expense_service;
pub mod ledger_service;
pub mod month_service;
pub mod session;
pub mod storage;
pub mod summary_service;
pub mod time;

pub use category_service::*;
pub use chart_service::*;
pub use error::CoreError;
pub use expense_service::*;
pub use ledger_service::*;
pub use month_service::*;
pub use session::*;
pub use storage::StateStore;
pub use summary_service::*;
pub use time::Clock;
