//! Payer display formatting
//!
//! Renders the roster card by card: each payer with the amount they owe,
//! their own per-person value and each dependent underneath.

use crate::config::Settings;
use crate::services::summary::PayerLine;

use super::currency::format_currency;

/// "1 person" / "3 people"
pub fn people_label(count: usize) -> String {
    if count == 1 {
        "1 person".to_string()
    } else {
        format!("{} people", count)
    }
}

fn dependents_label(count: usize) -> String {
    if count == 1 {
        "1 dependent".to_string()
    } else {
        format!("{} dependents", count)
    }
}

/// Format every payer with their dependents and shares
pub fn format_payer_list(payers: &[PayerLine], settings: &Settings) -> String {
    if payers.is_empty() {
        return "No payers yet. Add one with 'add-payer <name>'.".to_string();
    }

    let mut output = String::new();
    for payer in payers {
        let initial = payer.name.chars().next().unwrap_or('?');
        output.push_str(&format!(
            "[{}] {}  ({}, {})\n",
            initial,
            payer.name,
            payer.id,
            dependents_label(payer.dependents.len())
        ));
        output.push_str(&format!(
            "    Total due:  {}\n",
            format_currency(payer.share, settings)
        ));
        output.push_str(&format!(
            "    Own value:  {}\n",
            format_currency(payer.own_value, settings)
        ));

        if !payer.dependents.is_empty() {
            output.push_str("    Dependents:\n");
            for dependent in &payer.dependents {
                let initial = dependent.name.chars().next().unwrap_or('?');
                output.push_str(&format!(
                    "      [{}] {}  ({})  {}\n",
                    initial,
                    dependent.name,
                    dependent.id,
                    format_currency(dependent.value, settings)
                ));
            }
        }
    }

    output
}
