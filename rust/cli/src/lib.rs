//! # Omaha CLI Library
//!
//! Command-line front end for the `omaha-engine` crate: analyse an Omaha
//! position from card codes, score starting hands, or deal a random flop.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["omaha", "calc", "AsAhKsKh", "AdKdTd", "--list-better"];
//! let code = omaha_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `calc`: Best hand, turn/river distributions and better holdings for a position
//! - `score`: Hutchison starting-hand points
//! - `deal`: Deal a random hand and flop and analyse it
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
use tracing::info;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, OmahaCli};
use commands::{
    handle_calc_command, handle_cfg_command, handle_deal_command, handle_score_command,
};
use config::OutputFormat;
use validation::CardArgs;

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["omaha", "score", "AsAcKsKc"];
/// let code = omaha_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match OmahaCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = writeln!(err, "{}", e);
                    let _ = ui::write_usage(err);
                    exit_code::ERROR
                }
            };
        }
    };

    info!(command = cli.cmd.name(), "dispatching command");
    let result = match cli.cmd {
        // cfg reports its own configuration errors
        Commands::Cfg => {
            return match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(_) => exit_code::ERROR,
            };
        }
        Commands::Calc {
            hole,
            flop,
            turn,
            river,
            json,
            list_better,
        } => resolve_output(json, list_better).and_then(|(format, list_better)| {
            let args = CardArgs {
                hole,
                flop,
                turn,
                river,
            };
            handle_calc_command(&args, format, list_better, out)
        }),
        Commands::Score { hole, json } => resolve_output(json, false)
            .and_then(|(format, _)| handle_score_command(&hole, format, out)),
        Commands::Deal {
            seed,
            json,
            list_better,
        } => config::load()
            .map_err(CliError::from)
            .and_then(|cfg| {
                let (format, list_better) = merge_flags(&cfg, json, list_better);
                handle_deal_command(seed.or(cfg.seed), format, list_better, out)
            }),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

/// Output format and better-hands listing after applying flags over config.
fn resolve_output(json: bool, list_better: bool) -> Result<(OutputFormat, bool), CliError> {
    let cfg = config::load()?;
    Ok(merge_flags(&cfg, json, list_better))
}

fn merge_flags(cfg: &config::Config, json: bool, list_better: bool) -> (OutputFormat, bool) {
    let format = if json { OutputFormat::Json } else { cfg.format };
    (format, list_better || cfg.list_better)
}
