//! Expense account display formatting

use crate::config::Settings;
use crate::services::AccountLedger;

use super::currency::format_currency;

/// Format the whole catalog with selection markers, values and the total
pub fn format_account_list(ledger: &AccountLedger, settings: &Settings) -> String {
    let accounts = ledger.accounts();
    if accounts.is_empty() {
        return "No expenses in the catalog.".to_string();
    }

    let id_width = accounts
        .iter()
        .map(|a| a.id.as_str().chars().count())
        .max()
        .unwrap_or(2)
        .max(2);
    let name_width = accounts
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<3}  {:<id_width$}  {:<name_width$}  {:>16}\n",
        "Sel",
        "ID",
        "Name",
        "Value",
        id_width = id_width,
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<3}  {:-<id_width$}  {:-<name_width$}  {:->16}\n",
        "",
        "",
        "",
        "",
        id_width = id_width,
        name_width = name_width,
    ));

    for account in accounts {
        let value = if account.selected {
            format_currency(account.value, settings)
        } else {
            "-".to_string()
        };
        output.push_str(&format!(
            "{:<3}  {:<id_width$}  {:<name_width$}  {:>16}\n",
            if account.selected { "[x]" } else { "[ ]" },
            account.id.as_str(),
            account.name,
            value,
            id_width = id_width,
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "{:<3}  {:<id_width$}  {:<name_width$}  {:>16}\n",
        "",
        "",
        "TOTAL",
        format_currency(ledger.total_cost(), settings),
        id_width = id_width,
        name_width = name_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountId;

    #[test]
    fn test_account_list_marks_selection() {
        let mut ledger = AccountLedger::new();
        ledger.set_value(&AccountId::from("energia"), "100");
        let output = format_account_list(&ledger, &Settings::default());

        let energia = output.lines().find(|l| l.contains("ENERGIA")).unwrap();
        assert!(energia.starts_with("[x]"));
        assert!(energia.contains("R$ 100,00"));

        let festa = output.lines().find(|l| l.contains("FESTA")).unwrap();
        assert!(festa.starts_with("[ ]"));

        let total = output.lines().last().unwrap();
        assert!(total.contains("TOTAL"));
        assert!(total.contains("R$ 100,00"));
    }
}
