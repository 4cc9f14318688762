//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "omaha",
    version,
    about = "Omaha hand analysis: best hand, turn and river odds, better holdings"
)]
pub struct OmahaCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyse a position given as card codes, e.g. `calc AsAhKsKh AdKdTd`
    Calc {
        /// Four hole cards, 8 characters
        hole: String,
        /// Three flop cards, 6 characters
        flop: Option<String>,
        /// Turn card
        #[arg(requires = "flop")]
        turn: Option<String>,
        /// River card
        #[arg(requires = "turn")]
        river: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// List the holdings that currently beat this hand
        #[arg(long)]
        list_better: bool,
    },
    /// Score four hole cards with the Hutchison point count
    Score {
        hole: String,
        #[arg(long)]
        json: bool,
    },
    /// Deal random hole cards and flop, then analyse them
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        list_better: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Every subcommand name, in help order.
pub const COMMANDS: &[&str] = &["calc", "score", "deal", "cfg"];


impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Calc { .. } => "calc",
            Commands::Score { .. } => "score",
            Commands::Deal { .. } => "deal",
            Commands::Cfg => "cfg",
        }
    }
}
