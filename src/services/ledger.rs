//! Account ledger
//!
//! Holds the selection flag and value of every catalog expense and derives
//! the selected accounts and their total.

use tracing::{debug, warn};

use crate::error::{SplitError, SplitResult};
use crate::models::catalog::{default_catalog, validate_catalog, CatalogEntry};
use crate::models::{Account, AccountId, Amount};

/// Mutable selection/value state for the expense catalog
#[derive(Debug, Clone, PartialEq)]
pub struct AccountLedger {
    accounts: Vec<Account>,
}

impl Default for AccountLedger {
    fn default() -> Self {
        Self::from_valid_catalog(&default_catalog())
    }
}

impl AccountLedger {
    /// Create a ledger over the built-in catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger over a custom catalog, rejecting duplicate or blank ids
    pub fn with_catalog(entries: &[CatalogEntry]) -> SplitResult<Self> {
        validate_catalog(entries).map_err(|e| SplitError::Config(e.to_string()))?;
        Ok(Self::from_valid_catalog(entries))
    }

    fn from_valid_catalog(entries: &[CatalogEntry]) -> Self {
        Self {
            accounts: entries.iter().map(CatalogEntry::to_account).collect(),
        }
    }

    /// All accounts in catalog order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| &a.id == id)
    }

    /// Find an account by case-insensitive id or name
    pub fn find(&self, identifier: &str) -> Option<&Account> {
        let identifier = identifier.trim();
        self.accounts.iter().find(|a| {
            a.id.as_str().eq_ignore_ascii_case(identifier)
                || a.name.to_uppercase() == identifier.to_uppercase()
        })
    }

    /// Flip the selection of an account
    ///
    /// Returns the new flag, or `None` (and changes nothing) if the id is
    /// not in the catalog.
    pub fn toggle_selection(&mut self, id: &AccountId) -> Option<bool> {
        let Some(account) = self.accounts.iter_mut().find(|a| &a.id == id) else {
            debug!(account = %id, "toggle ignored: unknown account");
            return None;
        };

        let selected = account.toggle();
        debug!(account = %id, selected, "toggled account selection");
        Some(selected)
    }

    /// Store a value parsed leniently from user input
    ///
    /// Unparsable input stores zero. Returns the stored amount, or `None`
    /// if the id is not in the catalog.
    pub fn set_value(&mut self, id: &AccountId, raw_input: &str) -> Option<Amount> {
        let Some(account) = self.accounts.iter_mut().find(|a| &a.id == id) else {
            debug!(account = %id, "value ignored: unknown account");
            return None;
        };

        let value = Amount::parse_lenient(raw_input);
        if value.is_negative() {
            warn!(account = %id, raw_input, "negative expense value accepted");
        }
        account.value = value;
        debug!(account = %id, value = value.value(), "set account value");
        Some(value)
    }

    /// Accounts that currently count toward the total, in catalog order
    pub fn list_selected(&self) -> Vec<&Account> {
        self.accounts.iter().filter(|a| a.selected).collect()
    }

    /// Sum of values over the selected accounts
    pub fn total_cost(&self) -> Amount {
        self.accounts.iter().map(Account::contribution).sum()
    }
}
