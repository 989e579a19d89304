//! User settings for household-split
//!
//! Display preferences and an optional custom expense catalog. Settings are
//! only ever read; the session itself is never written to disk.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::SplitPaths;
use crate::display::OutputFormat;
use crate::error::SplitError;
use crate::models::catalog::{validate_catalog, CatalogEntry};

/// User settings for household-split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol placed before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,

    /// Output format used when none is given on the command line
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Replaces the built-in expense catalog when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<CatalogEntry>>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_decimal_separator() -> char {
    ','
}

fn default_thousands_separator() -> char {
    '.'
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            decimal_separator: default_decimal_separator(),
            thousands_separator: default_thousands_separator(),
            default_format: OutputFormat::default(),
            catalog: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults when the file is absent
    pub fn load_or_default(paths: &SplitPaths) -> Result<Self, SplitError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SplitError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| SplitError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        debug!(path = %settings_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Check the settings for values the session cannot work with
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.decimal_separator == self.thousands_separator {
            return Err(SplitError::Config(
                "Decimal and thousands separators must differ".into(),
            ));
        }
        if let Some(catalog) = &self.catalog {
            validate_catalog(catalog).map_err(|e| SplitError::Config(e.to_string()))?;
        }
        Ok(())
    }
}
