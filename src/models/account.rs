//! Expense account model
//!
//! An account is one selectable household expense (energy, water, ...)
//! together with the value the user entered for it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::AccountId;

/// A selectable expense category and its current value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Catalog identifier
    pub id: AccountId,

    /// Display label
    pub name: String,

    /// Whether this expense contributes to the total
    pub selected: bool,

    /// Entered value; only counted while `selected` is true
    #[serde(default)]
    pub value: Amount,
}

impl Account {
    /// Create an account with a zero value
    pub fn new(id: impl Into<AccountId>, name: impl Into<String>, selected: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            selected,
            value: Amount::zero(),
        }
    }

    /// Flip the selection flag and return the new state
    pub fn toggle(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }

    /// The value this account adds to the total right now
    pub fn contribution(&self) -> Amount {
        if self.selected {
            self.value
        } else {
            Amount::zero()
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
