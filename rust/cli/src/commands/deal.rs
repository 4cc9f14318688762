//! Deal command handler.
//!
//! Shuffles a deck with a ChaCha20 generator, deals four hole cards and a
//! flop, and analyses the result exactly like `calc`. The seed is always
//! printed so a deal can be reproduced.

use std::io::Write;

use omaha_engine::cards::Card;
use omaha_engine::deck::Deck;
use omaha_engine::omaha::OmahaHand;
use tracing::info;

use super::calc::write_position;
use crate::config::OutputFormat;
use crate::error::CliError;

/// Handle the deal command.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// let mut out: Vec<u8> = Vec::new();
/// handle_deal_command(Some(42), OutputFormat::Text, false, &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    seed: Option<u64>,
    format: OutputFormat,
    list_better: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(base_seed);
    let mut deal = || {
        deck.deal_card()
            .ok_or_else(|| CliError::InvalidInput("deck ran out of cards".into()))
    };
    let hole: [Card; 4] = [deal()?, deal()?, deal()?, deal()?];
    let flop = vec![deal()?, deal()?, deal()?];
    info!(seed = base_seed, "dealt hole cards and flop");

    let position = OmahaHand::new(hole, flop)?;
    write_position(&position, &deck, format, list_better, Some(base_seed), out)
}
