//! Interactive session
//!
//! Reads one command per line, splits it with shell quoting rules and
//! dispatches it against a `Household`. Bad lines and unknown names are
//! reported and the session carries on; nothing here ends the loop except
//! `quit` or end of input.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Settings;
use crate::display::{
    format_account_list, format_currency, format_payer_list, render_summary, OutputFormat,
};
use crate::error::{SplitError, SplitResult};
use crate::session::Household;

/// One line of session input
#[derive(Parser, Debug)]
#[command(
    name = "split",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{all-args}"
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Commands available inside a session
#[derive(Subcommand, Debug, PartialEq)]
pub enum SessionCommand {
    /// Select or deselect an expense
    Toggle {
        /// Expense id or name
        account: String,
    },
    /// Enter the value of an expense ("12,50" and "12.50" both work)
    Set {
        /// Expense id or name
        account: String,
        /// Amount; anything unreadable counts as zero
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Register a payer
    AddPayer {
        /// Payer name
        name: Vec<String>,
    },
    /// Remove a payer and all of their dependents
    RemovePayer {
        /// Payer name or ID
        payer: String,
    },
    /// Attach a dependent to a payer
    AddDependent {
        /// Payer name or ID
        payer: String,
        /// Dependent name
        name: Vec<String>,
    },
    /// Remove a dependent from a payer
    RemoveDependent {
        /// Payer name or ID
        payer: String,
        /// Dependent name or ID
        dependent: String,
    },
    /// Show every expense with its selection and value
    #[command(alias = "ls")]
    Accounts,
    /// Show payers, dependents and what each one owes
    Payers,
    /// Show the split summary
    Summary {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Parse a raw input line into a command
///
/// `Ok(None)` for blank lines. Quoting errors and clap errors (including
/// `help`) come back as `SplitError::Parse` carrying the rendered message.
pub fn parse_line(line: &str) -> SplitResult<Option<SessionCommand>> {
    let tokens = shell_words::split(line).map_err(|e| SplitError::Parse(e.to_string()))?;
    if tokens.is_empty() {
        return Ok(None);
    }

    SessionLine::try_parse_from(tokens)
        .map(|parsed| Some(parsed.command))
        .map_err(|e| SplitError::Parse(e.render().to_string().trim_end().to_string()))
}

/// Run one command against the household, writing feedback to `out`
pub fn execute<W: Write>(
    household: &mut Household,
    settings: &Settings,
    command: SessionCommand,
    out: &mut W,
) -> SplitResult<LoopControl> {
    debug!(?command, "executing session command");

    match command {
        SessionCommand::Toggle { account } => {
            let Some(id) = household.ledger().find(&account).map(|a| a.id.clone()) else {
                writeln!(out, "{}", SplitError::account_not_found(&account))?;
                return Ok(LoopControl::Continue);
            };
            if let Some(selected) = household.ledger_mut().toggle_selection(&id) {
                let state = if selected { "selected" } else { "deselected" };
                writeln!(out, "{} {}", id, state)?;
            }
        }

        SessionCommand::Set { account, value } => {
            let Some(id) = household.ledger().find(&account).map(|a| a.id.clone()) else {
                writeln!(out, "{}", SplitError::account_not_found(&account))?;
                return Ok(LoopControl::Continue);
            };
            if let Some(stored) = household.ledger_mut().set_value(&id, &value) {
                writeln!(out, "{} = {}", id, format_currency(stored, settings))?;
            }
        }

        SessionCommand::AddPayer { name } => {
            let name = name.join(" ");
            match household.roster_mut().add_payer(&name) {
                Some(id) => {
                    let payer = household.roster().get(id).map(|p| p.name.clone());
                    writeln!(out, "Added payer {} ({})", payer.unwrap_or_default(), id)?;
                }
                None => writeln!(out, "Payer name cannot be empty")?,
            }
        }

        SessionCommand::RemovePayer { payer } => {
            let Some(id) = household.roster().find(&payer).map(|p| p.id) else {
                writeln!(out, "{}", SplitError::payer_not_found(&payer))?;
                return Ok(LoopControl::Continue);
            };
            if let Some(removed) = household.roster_mut().remove_payer(id) {
                writeln!(
                    out,
                    "Removed payer {} and {} dependent(s)",
                    removed.name,
                    removed.dependents.len()
                )?;
            }
        }

        SessionCommand::AddDependent { payer, name } => {
            let Some(payer_id) = household.roster().find(&payer).map(|p| p.id) else {
                writeln!(out, "{}", SplitError::payer_not_found(&payer))?;
                return Ok(LoopControl::Continue);
            };
            match household.roster_mut().add_dependent(payer_id, &name.join(" ")) {
                Some(id) => {
                    let owner = household.roster().get(payer_id);
                    let dependent = owner.and_then(|p| p.get_dependent(id));
                    writeln!(
                        out,
                        "Added dependent {} ({}) to {}",
                        dependent.map(|d| d.name.as_str()).unwrap_or_default(),
                        id,
                        owner.map(|p| p.name.as_str()).unwrap_or_default()
                    )?;
                }
                None => writeln!(out, "Dependent name cannot be empty")?,
            }
        }

        SessionCommand::RemoveDependent { payer, dependent } => {
            let Some(owner) = household.roster().find(&payer) else {
                writeln!(out, "{}", SplitError::payer_not_found(&payer))?;
                return Ok(LoopControl::Continue);
            };
            let payer_id = owner.id;
            let Some(dependent_id) = owner.find_dependent(&dependent).map(|d| d.id) else {
                writeln!(out, "{}", SplitError::dependent_not_found(&dependent))?;
                return Ok(LoopControl::Continue);
            };
            if let Some(removed) = household
                .roster_mut()
                .remove_dependent(payer_id, dependent_id)
            {
                writeln!(out, "Removed dependent {}", removed.name)?;
            }
        }

        SessionCommand::Accounts => {
            write!(out, "{}", format_account_list(household.ledger(), settings))?;
        }

        SessionCommand::Payers => {
            let summary = household.summary();
            writeln!(out, "{}", format_payer_list(&summary.payers, settings).trim_end())?;
        }

        SessionCommand::Summary { format } => {
            let format = format.unwrap_or(settings.default_format);
            write!(out, "{}", render_summary(&household.summary(), settings, format)?)?;
        }

        SessionCommand::Quit => return Ok(LoopControl::Exit),
    }

    Ok(LoopControl::Continue)
}

/// Drive a session from `input` until `quit` or end of input
///
/// A prompt is written before each line only when `interactive` is set.
pub fn run_session<R: BufRead, W: Write>(
    household: &mut Household,
    settings: &Settings,
    input: R,
    out: &mut W,
    interactive: bool,
) -> SplitResult<()> {
    if interactive {
        writeln!(out, "Household bill split. Type 'help' for commands, 'quit' to leave.")?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "split> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => {
                if execute(household, settings, command, out)? == LoopControl::Exit {
                    break;
                }
            }
            Err(SplitError::Parse(message)) => writeln!(out, "{}", message)?,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Household, String) {
        let mut household = Household::new();
        let mut out = Vec::new();
        run_session(
            &mut household,
            &Settings::default(),
            Cursor::new(script.to_string()),
            &mut out,
            false,
        )
        .unwrap();
        (household, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(
            parse_line("set energia 12,50").unwrap(),
            Some(SessionCommand::Set {
                account: "energia".into(),
                value: "12,50".into()
            })
        );
        assert_eq!(
            parse_line("add-payer \"Carlos Silva\"").unwrap(),
            Some(SessionCommand::AddPayer {
                name: vec!["Carlos Silva".into()]
            })
        );
        assert_eq!(parse_line("exit").unwrap(), Some(SessionCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_line("frobnicate"), Err(SplitError::Parse(_))));
        assert!(matches!(parse_line("add-payer \"open"), Err(SplitError::Parse(_))));
        assert!(matches!(parse_line("help"), Err(SplitError::Parse(_))));
    }

    #[test]
    fn test_negative_value_parses() {
        assert_eq!(
            parse_line("set energia -5").unwrap(),
            Some(SessionCommand::Set {
                account: "energia".into(),
                value: "-5".into()
            })
        );
    }

    #[test]
    fn test_scripted_scenario() {
        let (household, out) = run(
            "toggle gas\n\
             toggle internet\n\
             set energia 100\n\
             set água 50\n\
             add-payer Carlos\n\
             add-dependent carlos Duda\n\
             summary\n",
        );

        assert_eq!(household.total_cost().value(), 150.0);
        assert_eq!(household.total_people(), 2);
        assert_eq!(household.value_per_person().value(), 75.0);
        assert!(out.contains("Added payer CARLOS"));
        assert!(out.contains("Added dependent DUDA"));
        assert!(out.contains("Per person:   R$ 75,00"));
        assert!(out.contains("CARLOS (2 people)"));
    }

    #[test]
    fn test_unknown_names_leave_state_untouched() {
        let (household, out) = run(
            "add-payer ana\n\
             toggle aluguel\n\
             remove-payer bob\n\
             add-dependent bob duda\n\
             remove-dependent ana duda\n",
        );

        assert_eq!(household.total_people(), 1);
        assert!(out.contains("Account not found: aluguel"));
        assert!(out.contains("Payer not found: bob"));
        assert!(out.contains("Dependent not found: duda"));
    }

    #[test]
    fn test_blank_names_are_ignored() {
        let (household, out) = run("add-payer \"   \"\nadd-payer\n");
        assert!(household.roster().is_empty());
        assert!(out.contains("Payer name cannot be empty"));
    }

    #[test]
    fn test_remove_payer_cascades() {
        let (household, out) = run(
            "add-payer carlos\n\
             add-dependent carlos duda\n\
             add-dependent carlos lia\n\
             remove-payer carlos\n",
        );
        assert_eq!(household.total_people(), 0);
        assert!(out.contains("Removed payer CARLOS and 2 dependent(s)"));
    }

    #[test]
    fn test_remove_dependent() {
        let (household, out) = run(
            "add-payer carlos\n\
             add-dependent carlos duda\n\
             remove-dependent carlos duda\n",
        );
        assert_eq!(household.total_people(), 1);
        assert!(out.contains("Removed dependent DUDA"));
    }

    #[test]
    fn test_bad_line_does_not_stop_session() {
        let (household, out) = run("bogus\nadd-payer ana\n");
        assert_eq!(household.total_people(), 1);
        assert!(out.contains("bogus"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (household, _) = run("add-payer ana\nquit\nadd-payer bia\n");
        assert_eq!(household.total_people(), 1);
    }

    #[test]
    fn test_summary_json() {
        let (_, out) = run("set energia 80\nadd-payer ana\nsummary --format json\n");
        let parsed: serde_json::Value = serde_json::from_str(&out[out.find('{').unwrap()..]).unwrap();
        assert_eq!(parsed["total_cost"], 80.0);
        assert_eq!(parsed["payers"][0]["name"], "ANA");
    }

    #[test]
    fn test_interactive_prompt() {
        let mut household = Household::new();
        let mut out = Vec::new();
        run_session(
            &mut household,
            &Settings::default(),
            Cursor::new("quit\n"),
            &mut out,
            true,
        )
        .unwrap();
        assert!(String::from_utf8(out).unwrap().contains("split> "));
    }
}
