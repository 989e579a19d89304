//! household-split - household bill-splitting calculator
//!
//! Pick which shared expenses apply, enter their values, register the
//! payers and their dependents, and get an even per-person value plus what
//! each payer owes for themselves and the dependents they cover.
//!
//! # Architecture
//!
//! - `models`: accounts, the expense catalog, amounts, payers and dependents
//! - `services`: the account ledger, the household roster, the split
//!   calculator and the summary snapshot
//! - `session`: the `Household` controller owning all session state
//! - `display`: currency formatting and terminal/JSON/YAML rendering
//! - `cli`: interactive session and one-shot calculation
//! - `config`: paths and read-only settings
//! - `error`: custom error types
//!
//! # Example
//!
//! ```
//! use household_split::models::AccountId;
//! use household_split::session::Household;
//!
//! let mut household = Household::new();
//! household.ledger_mut().set_value(&AccountId::from("energia"), "100");
//! let ana = household.roster_mut().add_payer("ana").unwrap();
//! household.roster_mut().add_dependent(ana, "bob");
//!
//! assert_eq!(household.value_per_person().value(), 50.0);
//! assert_eq!(household.payer_share(ana).unwrap().value(), 100.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;

pub use error::{SplitError, SplitResult};
pub use session::Household;
