//! Score command handler: Hutchison points for four hole cards.

use std::io::Write;

use omaha_engine::deck::Deck;
use omaha_engine::hutchison;
use serde::Serialize;

use super::calc::take_hole;
use crate::config::OutputFormat;
use crate::error::CliError;
use crate::formatters::{self, ScoreReport};
use crate::validation::{validate_card_args, CardArgs};

#[derive(Debug, Serialize)]
struct ScoreOutput {
    hole: Vec<String>,
    #[serde(flatten)]
    score: ScoreReport,
}

pub fn handle_score_command(
    hole: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    validate_card_args(&CardArgs {
        hole: hole.to_string(),
        flop: None,
        turn: None,
        river: None,
    })?;
    let mut deck = Deck::new();
    let hole = take_hole(&mut deck, hole)?;
    let score = hutchison::evaluate(&hole);

    match format {
        OutputFormat::Json => {
            let report = ScoreOutput {
                hole: hole.iter().map(|c| c.to_string()).collect(),
                score: (&score).into(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", formatters::format_board(&hole))?;
            formatters::write_hutchison(out, &score)?;
        }
    }
    Ok(())
}
