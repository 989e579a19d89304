//! Expense catalog
//!
//! The fixed list of household expenses offered for selection. The list is
//! decided once at startup: either the built-in defaults or a custom list
//! from the settings file.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::account::Account;

/// Built-in expense categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultExpense {
    Energia,
    Agua,
    Gas,
    Internet,
    Mercado,
    Iptu,
    Festa,
}

impl DefaultExpense {
    /// Get all default expenses in order
    pub fn all() -> &'static [Self] {
        &[
            Self::Energia,
            Self::Agua,
            Self::Gas,
            Self::Internet,
            Self::Mercado,
            Self::Iptu,
            Self::Festa,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Energia => "energia",
            Self::Agua => "agua",
            Self::Gas => "gas",
            Self::Internet => "internet",
            Self::Mercado => "mercado",
            Self::Iptu => "iptu",
            Self::Festa => "festa",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Energia => "ENERGIA",
            Self::Agua => "ÁGUA",
            Self::Gas => "GÁS",
            Self::Internet => "INTERNET",
            Self::Mercado => "MERCADO",
            Self::Iptu => "IPTU",
            Self::Festa => "FESTA",
        }
    }

    /// Recurring utilities start selected; occasional expenses do not
    pub fn selected_by_default(&self) -> bool {
        matches!(
            self,
            Self::Energia | Self::Agua | Self::Gas | Self::Internet
        )
    }

    pub fn to_entry(&self) -> CatalogEntry {
        CatalogEntry {
            id: self.id().to_string(),
            name: self.name().to_string(),
            selected: self.selected_by_default(),
        }
    }
}

/// One catalog line as declared in settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub selected: bool,
}

impl CatalogEntry {
    pub fn to_account(&self) -> Account {
        Account::new(self.id.trim(), self.name.trim(), self.selected)
    }
}

/// The built-in catalog
pub fn default_catalog() -> Vec<CatalogEntry> {
    DefaultExpense::all().iter().map(|e| e.to_entry()).collect()
}

/// Validate a catalog: ids must be unique, ids and names non-empty
pub fn validate_catalog(entries: &[CatalogEntry]) -> Result<(), CatalogValidationError> {
    if entries.is_empty() {
        return Err(CatalogValidationError::Empty);
    }

    let mut seen = HashSet::new();
    for entry in entries {
        let id = entry.id.trim();
        if id.is_empty() {
            return Err(CatalogValidationError::EmptyId);
        }
        if entry.name.trim().is_empty() {
            return Err(CatalogValidationError::EmptyName(id.to_string()));
        }
        if !seen.insert(id.to_lowercase()) {
            return Err(CatalogValidationError::DuplicateId(id.to_string()));
        }
    }

    Ok(())
}

/// Validation errors for catalogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogValidationError {
    Empty,
    EmptyId,
    EmptyName(String),
    DuplicateId(String),
}

impl fmt::Display for CatalogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Expense catalog cannot be empty"),
            Self::EmptyId => write!(f, "Expense id cannot be empty"),
            Self::EmptyName(id) => write!(f, "Expense '{}' has an empty name", id),
            Self::DuplicateId(id) => write!(f, "Duplicate expense id: {}", id),
        }
    }
}

impl std::error::Error for CatalogValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order_and_flags() {
        let catalog = default_catalog();
        let ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["energia", "agua", "gas", "internet", "mercado", "iptu", "festa"]
        );

        let selected: Vec<&str> = catalog
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(selected, vec!["ENERGIA", "ÁGUA", "GÁS", "INTERNET"]);
    }

    #[test]
    fn test_default_catalog_is_valid() {
        assert!(validate_catalog(&default_catalog()).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut catalog = default_catalog();
        catalog.push(CatalogEntry {
            id: "Energia".into(),
            name: "LUZ".into(),
            selected: false,
        });
        assert_eq!(
            validate_catalog(&catalog),
            Err(CatalogValidationError::DuplicateId("Energia".into()))
        );
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert_eq!(validate_catalog(&[]), Err(CatalogValidationError::Empty));

        let blank_id = vec![CatalogEntry {
            id: "  ".into(),
            name: "X".into(),
            selected: true,
        }];
        assert_eq!(
            validate_catalog(&blank_id),
            Err(CatalogValidationError::EmptyId)
        );

        let blank_name = vec![CatalogEntry {
            id: "agua".into(),
            name: "".into(),
            selected: true,
        }];
        assert!(matches!(
            validate_catalog(&blank_name),
            Err(CatalogValidationError::EmptyName(_))
        ));
    }

    #[test]
    fn test_entry_to_account() {
        let account = DefaultExpense::Agua.to_entry().to_account();
        assert_eq!(account.id.as_str(), "agua");
        assert_eq!(account.name, "ÁGUA");
        assert!(account.selected);
        assert!(account.value.is_zero());
    }
}
