//! Payer and dependent models
//!
//! A payer is one person responsible for a share of the bills. Dependents
//! belong to exactly one payer and are folded into that payer's share.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{DependentId, PayerId};

/// Normalize a person's name for storage: trimmed and upper-cased.
/// Returns `None` when nothing is left.
pub fn normalize_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_uppercase())
    }
}

/// A person counted in a payer's share who does not pay on their own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependent {
    pub id: DependentId,
    pub name: String,
}

impl Dependent {
    /// Create a dependent; `name` is expected to be normalized already
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: DependentId::new(),
            name: name.into(),
        }
    }

    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

impl fmt::Display for Dependent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A paying member of the household and the dependents they cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    pub id: PayerId,
    pub name: String,

    /// In insertion order, which is also display order
    #[serde(default)]
    pub dependents: Vec<Dependent>,
}

impl Payer {
    /// Create a payer with no dependents; `name` is expected to be normalized
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PayerId::new(),
            name: name.into(),
            dependents: Vec::new(),
        }
    }

    /// The payer plus every dependent
    pub fn people_count(&self) -> usize {
        1 + self.dependents.len()
    }

    pub fn dependent_count(&self) -> usize {
        self.dependents.len()
    }

    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }

    pub fn get_dependent(&self, id: DependentId) -> Option<&Dependent> {
        self.dependents.iter().find(|d| d.id == id)
    }

    /// Find a dependent by case-insensitive name or displayed id
    pub fn find_dependent(&self, identifier: &str) -> Option<&Dependent> {
        let wanted = identifier.trim().to_uppercase();
        self.dependents
            .iter()
            .find(|d| d.name == wanted)
            .or_else(|| self.dependents.iter().find(|d| d.id.matches(identifier)))
    }
}

impl fmt::Display for Payer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
