//! Service layer for household-split
//!
//! The ledger and roster own the mutable session state; the split
//! calculator and the summary derive everything else from them.

pub mod ledger;
pub mod roster;
pub mod split;
pub mod summary;

pub use ledger::AccountLedger;
pub use roster::HouseholdRoster;
pub use split::{payer_share, value_per_person};
pub use summary::SplitSummary;
