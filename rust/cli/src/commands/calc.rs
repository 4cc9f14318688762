//! Calc command handler.
//!
//! Takes hole cards and an optional board from the command line, removes
//! them from a fresh deck, and reports the best hand, the distribution of
//! final hands over the streets still to come, and how many two-card
//! holdings currently beat it. Without a flop only the starting-hand score
//! is reported.

use std::io::Write;

use omaha_engine::cards::Card;
use omaha_engine::deck::Deck;
use omaha_engine::equity;
use omaha_engine::hutchison;
use omaha_engine::omaha::OmahaHand;

use crate::config::OutputFormat;
use crate::error::CliError;
use crate::formatters::{self, CalcReport};
use crate::validation::{validate_card_args, CardArgs};

/// Handle the calc command.
///
/// # Errors
///
/// - `CliError::InvalidInput` if an argument has the wrong length
/// - `CliError::Engine` if a code is not a card or a card is given twice
/// - `CliError::Io` if writing to `out` fails
pub fn handle_calc_command(
    args: &CardArgs,
    format: OutputFormat,
    list_better: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    validate_card_args(args)?;
    let mut deck = Deck::new();
    let hole = take_hole(&mut deck, &args.hole)?;
    let board = deck.take_all(&args.board())?;
    let position = OmahaHand::new(hole, board)?;
    write_position(&position, &deck, format, list_better, None, out)
}

/// Removes four hole cards from `deck`.
pub(crate) fn take_hole(deck: &mut Deck, codes: &str) -> Result<[Card; 4], CliError> {
    let cards = deck.take_all(codes)?;
    cards
        .try_into()
        .map_err(|cards: Vec<Card>| {
            CliError::InvalidInput(format!("expected 4 hole cards, got {}", cards.len()))
        })
}

/// Analyses `position` against the cards left in `deck` and renders the
/// result. Shared with the deal command, which passes its seed along.
pub(crate) fn write_position(
    position: &OmahaHand,
    deck: &Deck,
    format: OutputFormat,
    list_better: bool,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let score = hutchison::evaluate(position.hole());
    let analysis = equity::analyze(position, deck.remaining(), list_better);

    match format {
        OutputFormat::Json => {
            let mut report = match &analysis {
                Some(analysis) => CalcReport::from_analysis(analysis, &score, list_better),
                None => CalcReport::preflop(position.hole(), &score),
            };
            if let Some(seed) = seed {
                report = report.with_seed(seed);
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Text => {
            if let Some(seed) = seed {
                writeln!(out, "Seed: {}", seed)?;
            }
            match &analysis {
                Some(analysis) => formatters::write_analysis(out, analysis, &score, list_better)?,
                None => {
                    writeln!(out, "{}", formatters::format_board(position.hole()))?;
                    formatters::write_hutchison(out, &score)?;
                }
            }
        }
    }
    Ok(())
}
