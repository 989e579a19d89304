//! CLI command handlers
//!
//! Bridges clap argument parsing with the session controller: the
//! line-oriented interactive session and the one-shot `calc` command.

pub mod calc;
pub mod session;

pub use calc::{apply_calc_args, CalcArgs};
pub use session::{execute, parse_line, run_session, LoopControl, SessionCommand};
