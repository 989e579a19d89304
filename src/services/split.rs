//! Split calculator
//!
//! Stateless arithmetic turning totals into per-person and per-payer values.

use crate::models::Amount;

/// Even share of the total cost per person
///
/// Zero when nobody is registered yet.
pub fn value_per_person(total_cost: Amount, total_people_count: usize) -> Amount {
    if total_people_count == 0 {
        return Amount::zero();
    }
    total_cost / total_people_count as f64
}

/// What one payer owes: their own share plus one share per dependent
pub fn payer_share(value_per_person: Amount, dependent_count: usize) -> Amount {
    value_per_person * (1 + dependent_count) as f64
}
