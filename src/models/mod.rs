//! Core data models for household-split
//!
//! This module contains the data structures of the bill-splitting domain:
//! expense accounts and their catalog, amounts, payers and dependents.

pub mod account;
pub mod amount;
pub mod catalog;
pub mod ids;
pub mod payer;

pub use account::Account;
pub use amount::Amount;
pub use catalog::{default_catalog, CatalogEntry, DefaultExpense};
pub use ids::{AccountId, DependentId, PayerId};
pub use payer::{Dependent, Payer};
