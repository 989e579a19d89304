//! Summary display formatting

use crate::config::Settings;
use crate::services::SplitSummary;

use super::currency::format_currency;
use super::payer::people_label;

/// Format the split overview: totals first, then one line per payer
pub fn format_summary(summary: &SplitSummary, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Split Summary\n");
    output.push_str("=============\n");
    output.push_str(&format!(
        "Total bills:  {}\n",
        format_currency(summary.total_cost, settings)
    ));
    output.push_str(&format!("People:       {}\n", summary.total_people));
    output.push_str(&format!(
        "Per person:   {}\n",
        format_currency(summary.value_per_person, settings)
    ));

    if !summary.accounts.is_empty() {
        output.push_str("\nBills:\n");
        for account in &summary.accounts {
            output.push_str(&format!(
                "  {:<20} {:>16}\n",
                account.name,
                format_currency(account.value, settings)
            ));
        }
    }

    if summary.payers.is_empty() {
        output.push_str("\nNo payers yet.\n");
        return output;
    }

    let name_width = summary
        .payers
        .iter()
        .map(|p| p.name.chars().count() + people_label(p.people).len() + 3)
        .max()
        .unwrap_or(0);

    output.push_str("\nPayers:\n");
    for payer in &summary.payers {
        let label = format!("{} ({})", payer.name, people_label(payer.people));
        output.push_str(&format!(
            "  {:<name_width$} {:>16}\n",
            label,
            format_currency(payer.share, settings),
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountId;
    use crate::services::{AccountLedger, HouseholdRoster};

    #[test]
    fn test_summary_text() {
        let mut ledger = AccountLedger::new();
        ledger.set_value(&AccountId::from("energia"), "100");
        ledger.set_value(&AccountId::from("agua"), "50");
        let mut roster = HouseholdRoster::new();
        let carlos = roster.add_payer("Carlos").unwrap();
        roster.add_dependent(carlos, "Duda");

        let summary = SplitSummary::build(&ledger, &roster);
        let output = format_summary(&summary, &Settings::default());

        assert!(output.contains("Total bills:  R$ 150,00"));
        assert!(output.contains("People:       2"));
        assert!(output.contains("Per person:   R$ 75,00"));
        assert!(output.contains("CARLOS (2 people)"));
        assert!(output.contains("ÁGUA"));
    }

    #[test]
    fn test_summary_without_payers() {
        let summary = SplitSummary::build(&AccountLedger::new(), &HouseholdRoster::new());
        let output = format_summary(&summary, &Settings::default());

        assert!(output.contains("People:       0"));
        assert!(output.contains("Per person:   R$ 0,00"));
        assert!(output.contains("No payers yet."));
    }
}
