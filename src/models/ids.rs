//! Strongly-typed ID wrappers
//!
//! Payers and dependents get random UUID-backed ids. Expense accounts come
//! from a fixed catalog and keep the short slug they were declared with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate UUID-backed ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Check whether a user-supplied token names this ID, either as
            /// the short display form or as the full UUID
            pub fn matches(&self, token: &str) -> bool {
                let token = token.trim();
                if token.eq_ignore_ascii_case(&self.to_string()) {
                    return true;
                }
                token.parse::<Self>().map(|id| id == *self).unwrap_or(false)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(PayerId, "pay-");
define_id!(DependentId, "dep-");

/// Identifier of an expense account in the catalog (e.g. `energia`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payer_id_creation() {
        let id = PayerId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = DependentId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("dep-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_ids_are_unique() {
        let first = PayerId::new();
        let second = PayerId::new();
        assert_ne!(first, second);
    }

    #[test]
    fn test_matches_short_and_full_forms() {
        let id = PayerId::new();
        assert!(id.matches(&id.to_string()));
        assert!(id.matches(&id.to_string().to_uppercase()));
        assert!(id.matches(&id.as_uuid().to_string()));
        assert!(!id.matches("pay-00000000"));
        assert!(!id.matches("CARLOS"));
    }

    #[test]
    fn test_parse_with_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: PayerId = format!("pay-{}", uuid_str).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_account_id() {
        let id = AccountId::from("energia");
        assert_eq!(id.as_str(), "energia");
        assert_eq!(id.to_string(), "energia");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"energia\"");
    }
}
