//! Household roster
//!
//! Payers and the dependents they own. Removing a payer drops its
//! dependents with it; names are normalized on the way in and blank names
//! are ignored.

use tracing::debug;

use crate::models::payer::normalize_name;
use crate::models::{Dependent, DependentId, Payer, PayerId};

/// Two-level ownership hierarchy of payers and their dependents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseholdRoster {
    payers: Vec<Payer>,
}

impl HouseholdRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payers in insertion order
    pub fn payers(&self) -> &[Payer] {
        &self.payers
    }

    pub fn is_empty(&self) -> bool {
        self.payers.is_empty()
    }

    pub fn get(&self, id: PayerId) -> Option<&Payer> {
        self.payers.iter().find(|p| p.id == id)
    }

    /// Find a payer by case-insensitive name or by id
    ///
    /// Names are not unique; the first payer registered under a name wins.
    pub fn find(&self, identifier: &str) -> Option<&Payer> {
        let wanted = identifier.trim().to_uppercase();
        self.payers
            .iter()
            .find(|p| p.name == wanted)
            .or_else(|| self.payers.iter().find(|p| p.id.matches(identifier)))
    }

    /// Register a payer at the end of the roster
    ///
    /// Returns the new id, or `None` when the name is blank.
    pub fn add_payer(&mut self, name: &str) -> Option<PayerId> {
        let Some(name) = normalize_name(name) else {
            debug!("add payer ignored: blank name");
            return None;
        };

        let payer = Payer::new(name);
        let id = payer.id;
        debug!(payer = %id, name = %payer.name, "added payer");
        self.payers.push(payer);
        Some(id)
    }

    /// Remove a payer together with all of its dependents
    pub fn remove_payer(&mut self, id: PayerId) -> Option<Payer> {
        let Some(index) = self.payers.iter().position(|p| p.id == id) else {
            debug!(payer = %id, "remove payer ignored: unknown payer");
            return None;
        };

        let removed = self.payers.remove(index);
        debug!(
            payer = %id,
            dependents = removed.dependents.len(),
            "removed payer"
        );
        Some(removed)
    }

    /// Append a dependent to a payer
    ///
    /// Returns the new id, or `None` when the name is blank or the payer
    /// does not exist.
    pub fn add_dependent(&mut self, payer_id: PayerId, name: &str) -> Option<DependentId> {
        let Some(name) = normalize_name(name) else {
            debug!(payer = %payer_id, "add dependent ignored: blank name");
            return None;
        };
        let Some(payer) = self.payers.iter_mut().find(|p| p.id == payer_id) else {
            debug!(payer = %payer_id, "add dependent ignored: unknown payer");
            return None;
        };

        let dependent = Dependent::new(name);
        let id = dependent.id;
        debug!(payer = %payer_id, dependent = %id, name = %dependent.name, "added dependent");
        payer.dependents.push(dependent);
        Some(id)
    }

    /// Remove one dependent from a payer
    pub fn remove_dependent(
        &mut self,
        payer_id: PayerId,
        dependent_id: DependentId,
    ) -> Option<Dependent> {
        let removed = self
            .payers
            .iter_mut()
            .find(|p| p.id == payer_id)
            .and_then(|payer| {
                let index = payer.dependents.iter().position(|d| d.id == dependent_id)?;
                Some(payer.dependents.remove(index))
            });

        match &removed {
            Some(_) => debug!(payer = %payer_id, dependent = %dependent_id, "removed dependent"),
            None => debug!(
                payer = %payer_id,
                dependent = %dependent_id,
                "remove dependent ignored: no match"
            ),
        }
        removed
    }

    /// Every payer plus every dependent; zero for an empty roster
    pub fn total_people_count(&self) -> usize {
        self.payers.iter().map(Payer::people_count).sum()
    }
}
