//! Display formatting for terminal output
//!
//! Human-readable tables and cards for the ledger, the roster and the
//! summary, plus structured JSON/YAML rendering of the summary for tools
//! that consume the result.

pub mod account;
pub mod currency;
pub mod payer;
pub mod summary;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::SplitResult;
use crate::services::SplitSummary;

pub use account::format_account_list;
pub use currency::format_currency;
pub use payer::format_payer_list;
pub use summary::format_summary;

/// How the summary is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Render a summary in the requested format
pub fn render_summary(
    summary: &SplitSummary,
    settings: &Settings,
    format: OutputFormat,
) -> SplitResult<String> {
    match format {
        OutputFormat::Text => Ok(format_summary(summary, settings)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(summary)?),
    }
}
