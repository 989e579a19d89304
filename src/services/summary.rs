//! Split summary
//!
//! A read-only snapshot of everything the presentation side needs: the
//! selected bills, the totals and what each payer owes. Renderers and
//! exporters consume this instead of reaching into the ledger and roster.

use serde::Serialize;

use super::ledger::AccountLedger;
use super::roster::HouseholdRoster;
use super::split::{payer_share, value_per_person};
use crate::models::{AccountId, Amount, DependentId, PayerId};

/// One selected bill
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountLine {
    pub id: AccountId,
    pub name: String,
    pub value: Amount,
}

/// One dependent under a payer, with the share they represent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependentLine {
    pub id: DependentId,
    pub name: String,
    pub value: Amount,
}

/// One payer and what they owe in total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayerLine {
    pub id: PayerId,
    pub name: String,
    /// The payer plus their dependents
    pub people: usize,
    /// The payer's own per-person value
    pub own_value: Amount,
    pub dependents: Vec<DependentLine>,
    pub share: Amount,
}

/// Snapshot of the current split
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitSummary {
    pub accounts: Vec<AccountLine>,
    pub total_cost: Amount,
    pub total_people: usize,
    pub value_per_person: Amount,
    pub payers: Vec<PayerLine>,
}

impl SplitSummary {
    /// Derive a summary from the current ledger and roster
    pub fn build(ledger: &AccountLedger, roster: &HouseholdRoster) -> Self {
        let total_cost = ledger.total_cost();
        let total_people = roster.total_people_count();
        let per_person = value_per_person(total_cost, total_people);

        let accounts = ledger
            .list_selected()
            .into_iter()
            .map(|account| AccountLine {
                id: account.id.clone(),
                name: account.name.clone(),
                value: account.value,
            })
            .collect();

        let payers = roster
            .payers()
            .iter()
            .map(|payer| PayerLine {
                id: payer.id,
                name: payer.name.clone(),
                people: payer.people_count(),
                own_value: per_person,
                dependents: payer
                    .dependents
                    .iter()
                    .map(|dependent| DependentLine {
                        id: dependent.id,
                        name: dependent.name.clone(),
                        value: per_person,
                    })
                    .collect(),
                share: payer_share(per_person, payer.dependent_count()),
            })
            .collect();

        Self {
            accounts,
            total_cost,
            total_people,
            value_per_person: per_person,
            payers,
        }
    }

    /// Sum of all payer shares; equals the total cost once anyone is registered
    pub fn shares_total(&self) -> Amount {
        self.payers.iter().map(|p| p.share).sum()
    }
}
