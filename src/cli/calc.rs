//! One-shot calculation
//!
//! Builds a household from command-line flags and prints the summary. Unlike
//! the interactive session, a name that matches nothing is an error here:
//! there is no chance to correct it afterwards.

use clap::Args;

use crate::error::{SplitError, SplitResult};
use crate::session::Household;

/// Arguments for `split calc`
#[derive(Args, Debug, Default)]
pub struct CalcArgs {
    /// Expense value as ID=AMOUNT; also selects the expense
    #[arg(short, long = "value", value_name = "ID=AMOUNT", allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Flip the selection of an expense (applied before values)
    #[arg(short, long = "toggle", value_name = "ID")]
    pub toggles: Vec<String>,

    /// Register a payer
    #[arg(short, long = "payer", value_name = "NAME")]
    pub payers: Vec<String>,

    /// Attach a dependent as PAYER=NAME
    #[arg(short, long = "dependent", value_name = "PAYER=NAME")]
    pub dependents: Vec<String>,
}

fn split_pair<'a>(raw: &'a str, what: &str) -> SplitResult<(&'a str, &'a str)> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim(), value))
        .ok_or_else(|| {
            SplitError::Validation(format!("Expected {} but got '{}'", what, raw))
        })
}

/// Apply the flags to a household in a fixed order: toggles, values,
/// payers, dependents
pub fn apply_calc_args(household: &mut Household, args: &CalcArgs) -> SplitResult<()> {
    for account in &args.toggles {
        let id = household
            .ledger()
            .find(account)
            .map(|a| a.id.clone())
            .ok_or_else(|| SplitError::account_not_found(account))?;
        household.ledger_mut().toggle_selection(&id);
    }

    for raw in &args.values {
        let (account, value) = split_pair(raw, "ID=AMOUNT")?;
        let (id, selected) = household
            .ledger()
            .find(account)
            .map(|a| (a.id.clone(), a.selected))
            .ok_or_else(|| SplitError::account_not_found(account))?;
        if !selected {
            household.ledger_mut().toggle_selection(&id);
        }
        household.ledger_mut().set_value(&id, value);
    }

    for name in &args.payers {
        if household.roster_mut().add_payer(name).is_none() {
            return Err(SplitError::Validation("Payer name cannot be empty".into()));
        }
    }

    for raw in &args.dependents {
        let (payer, name) = split_pair(raw, "PAYER=NAME")?;
        let payer_id = household
            .roster()
            .find(payer)
            .map(|p| p.id)
            .ok_or_else(|| SplitError::payer_not_found(payer))?;
        if household.roster_mut().add_dependent(payer_id, name).is_none() {
            return Err(SplitError::Validation(
                "Dependent name cannot be empty".into(),
            ));
        }
    }

    Ok(())
}
