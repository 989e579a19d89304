use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use household_split::cli::{apply_calc_args, run_session, CalcArgs};
use household_split::config::{SplitPaths, Settings};
use household_split::display::{format_account_list, render_summary, OutputFormat};
use household_split::logging::init_tracing;
use household_split::Household;

#[derive(Parser)]
#[command(
    name = "split",
    version,
    about = "Split household bills evenly between payers and their dependents",
    long_about = "Select the shared expenses that apply, enter their values, register \
                  payers and their dependents, and see the per-person value and what \
                  each payer owes. Everything lives in memory for one session."
)]
struct Cli {
    /// Output format for summaries (defaults to the configured format)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session reading commands from stdin (default)
    Session,

    /// Compute a split in one go from command-line flags
    Calc(CalcArgs),

    /// List the expense catalog
    Catalog,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = SplitPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;
    let mut household = Household::from_settings(&settings)?;
    let format = cli.format.unwrap_or(settings.default_format);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let settings = Settings {
                default_format: format,
                ..settings
            };
            run_session(&mut household, &settings, stdin.lock(), &mut out, interactive)?;
        }
        Commands::Calc(args) => {
            apply_calc_args(&mut household, &args)?;
            write!(out, "{}", render_summary(&household.summary(), &settings, format)?)?;
        }
        Commands::Catalog => {
            write!(out, "{}", format_account_list(household.ledger(), &settings))?;
        }
        Commands::Config => {
            writeln!(out, "household-split Configuration")?;
            writeln!(out, "=============================")?;
            writeln!(out, "Config directory: {}", paths.base_dir().display())?;
            writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
            writeln!(out)?;
            writeln!(out, "Settings:")?;
            writeln!(out, "  Currency symbol:     {}", settings.currency_symbol)?;
            writeln!(out, "  Decimal separator:   {}", settings.decimal_separator)?;
            writeln!(out, "  Thousands separator: {}", settings.thousands_separator)?;
            writeln!(out, "  Default format:      {:?}", settings.default_format)?;
            writeln!(
                out,
                "  Expense catalog:     {}",
                if settings.catalog.is_some() { "custom" } else { "built-in" }
            )?;
        }
    }

    out.flush()?;
    Ok(())
}
