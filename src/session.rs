//! Session controller
//!
//! `Household` is the single owner of the session state. Every derived value
//! is recomputed from the ledger and roster on read, so it can never go
//! stale after a mutation.

use crate::config::Settings;
use crate::error::SplitResult;
use crate::models::{Amount, PayerId};
use crate::services::{payer_share, value_per_person, AccountLedger, HouseholdRoster, SplitSummary};

/// One household's bill-splitting session
#[derive(Debug, Clone, Default)]
pub struct Household {
    ledger: AccountLedger,
    roster: HouseholdRoster,
}

impl Household {
    /// Start a session over the built-in expense catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session over the catalog configured in settings
    pub fn from_settings(settings: &Settings) -> SplitResult<Self> {
        let ledger = match &settings.catalog {
            Some(entries) => AccountLedger::with_catalog(entries)?,
            None => AccountLedger::new(),
        };
        Ok(Self {
            ledger,
            roster: HouseholdRoster::new(),
        })
    }

    pub fn ledger(&self) -> &AccountLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut AccountLedger {
        &mut self.ledger
    }

    pub fn roster(&self) -> &HouseholdRoster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut HouseholdRoster {
        &mut self.roster
    }

    pub fn total_cost(&self) -> Amount {
        self.ledger.total_cost()
    }

    pub fn total_people(&self) -> usize {
        self.roster.total_people_count()
    }

    pub fn value_per_person(&self) -> Amount {
        value_per_person(self.total_cost(), self.total_people())
    }

    /// What a payer owes, or `None` for an unknown payer
    pub fn payer_share(&self, id: PayerId) -> Option<Amount> {
        let payer = self.roster.get(id)?;
        Some(payer_share(self.value_per_person(), payer.dependent_count()))
    }

    pub fn summary(&self) -> SplitSummary {
        SplitSummary::build(&self.ledger, &self.roster)
    }
}
