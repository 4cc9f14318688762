//! Shape checks for card arguments.
//!
//! These run before any card reaches the deck: they only verify that each
//! argument has the length of its street. Whether the codes name real,
//! distinct cards is decided by the engine's deck.

use crate::error::CliError;

/// Hole cards plus the optional board streets, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardArgs {
    pub hole: String,
    pub flop: Option<String>,
    pub turn: Option<String>,
    pub river: Option<String>,
}

impl CardArgs {
    /// Board codes concatenated in street order.
    pub fn board(&self) -> String {
        [&self.flop, &self.turn, &self.river]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

/// Validates argument lengths and street order.
///
/// # Example
///
/// ```rust
/// # use omaha_cli::validation::{validate_card_args, CardArgs};
/// let args = CardArgs {
///     hole: "AsAhKsKh".into(),
///     flop: Some("AdKdTd".into()),
///     turn: None,
///     river: None,
/// };
/// assert!(validate_card_args(&args).is_ok());
///
/// let short = CardArgs { hole: "AsAh".into(), ..args };
/// assert!(validate_card_args(&short).is_err());
/// ```
pub fn validate_card_args(args: &CardArgs) -> Result<(), CliError> {
    expect_len("hole cards", &args.hole, 8)?;
    if let Some(flop) = &args.flop {
        expect_len("flop", flop, 6)?;
    }
    if let Some(turn) = &args.turn {
        if args.flop.is_none() {
            return Err(CliError::InvalidInput("turn requires a flop".into()));
        }
        expect_len("turn", turn, 2)?;
    }
    if let Some(river) = &args.river {
        if args.turn.is_none() {
            return Err(CliError::InvalidInput("river requires a turn".into()));
        }
        expect_len("river", river, 2)?;
    }
    Ok(())
}

fn expect_len(what: &str, value: &str, len: usize) -> Result<(), CliError> {
    let actual = value.chars().count();
    if actual == len {
        Ok(())
    } else {
        Err(CliError::InvalidInput(format!(
            "{} must be {} characters ({} cards), got {:?}",
            what,
            len,
            len / 2,
            value
        )))
    }
}
