//! Card, table, and report formatters for terminal and JSON output.
//!
//! Text output uses Unicode suit symbols where the terminal supports them
//! and falls back to the plain `s h d c` letters otherwise. JSON output
//! always uses the plain two-character card codes so it can be fed back
//! into `omaha calc`.
//!
//! ## Example
//!
//! ```rust
//! use omaha_engine::cards::{Card, Rank, Suit};
//! use omaha_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use std::io::Write;

use omaha_engine::cards::{Card, Suit};
use omaha_engine::equity::{Analysis, BetterGroup, EquityTally, StreetTally};
use omaha_engine::hand::HandRank;
use omaha_engine::hutchison::HutchisonScore;
use serde::Serialize;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit using Unicode symbols with ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.to_char().to_string()
    }
}

/// Format a Card as rank character plus suit symbol, e.g. "A♠" or "As".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.to_char(), format_suit(&card.suit))
}

/// Format cards in bracket notation, e.g. "[A♠ K♥ Q♦]", or "[]" if empty.
pub fn format_board(cards: &[Card]) -> String {
    if cards.is_empty() {
        "[]".to_string()
    } else {
        let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
        format!("[{}]", formatted_cards.join(" "))
    }
}

fn codes(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.to_string()).collect()
}

/// Writes one street's table: a row per category, strongest first, with
/// the better-hands count from `better` alongside.
pub fn write_street_table(
    out: &mut dyn Write,
    street: &StreetTally,
    better: &EquityTally,
) -> std::io::Result<()> {
    let tally = &street.tally;
    writeln!(out, "{}", street.street.label())?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<16}{:<16}{:<16}{:<16}{:<16}",
        "Hand",
        format!("out of {}", tally.total()),
        "Odds 1:",
        "Probability",
        format!("# Better / {}", better.total())
    )?;
    for rank in HandRank::ALL.iter().rev() {
        writeln!(
            out,
            "{:<16}{:<16}{:<16.2}{:<16.2}{:<16}",
            rank.label(),
            tally.count(*rank),
            tally.odds_against(*rank),
            tally.probability(*rank) * 100.0,
            better.count(*rank)
        )?;
    }
    writeln!(out)
}

pub fn write_better_groups(
    out: &mut dyn Write,
    groups: &[BetterGroup],
    total: u64,
) -> std::io::Result<()> {
    let count: u64 = groups.iter().map(|g| g.count).sum();
    writeln!(out, "BETTER HANDS ({} of {})", count, total)?;
    writeln!(out)?;
    for group in groups {
        writeln!(out, "{:>6}  {}", group.count, group.name)?;
    }
    writeln!(out)
}

pub fn write_hutchison(out: &mut dyn Write, score: &HutchisonScore) -> std::io::Result<()> {
    writeln!(
        out,
        "Hutchison points: {} (suited {}, pairs {}, straights {})",
        score.total(),
        score.suited,
        score.pairs,
        score.straights
    )?;
    writeln!(out, "Approximate win rate: {:.1}%", score.win_rate())
}

/// Writes the full text report for an analysed position.
pub fn write_analysis(
    out: &mut dyn Write,
    analysis: &Analysis,
    score: &HutchisonScore,
    list_better: bool,
) -> std::io::Result<()> {
    let best = &analysis.best;
    writeln!(out)?;
    writeln!(
        out,
        "{} | {} - {} ({})",
        format_board(analysis.position.hole()),
        format_board(analysis.position.board()),
        best.category().label(),
        best.hand.name()
    )?;
    writeln!(out, "Best five: {}", format_board(best.hand.cards()))?;
    write_hutchison(out, score)?;
    writeln!(out)?;

    for street in &analysis.streets {
        write_street_table(out, street, &analysis.better.tally)?;
    }
    if list_better {
        write_better_groups(out, &analysis.better.grouped(), analysis.better.total())?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct BestReport {
    pub category: HandRank,
    pub name: String,
    pub cards: Vec<String>,
    pub hole_used: Vec<String>,
    pub board_used: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StreetReport {
    pub street: &'static str,
    pub total: u64,
    pub counts: Vec<CategoryCount>,
}

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub category: HandRank,
    pub count: u64,
    pub probability: f64,
}

#[derive(Debug, Serialize)]
pub struct BetterReport {
    pub total: u64,
    pub count: u64,
    pub counts: Vec<CategoryCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<BetterGroup>>,
}

/// JSON shape of `omaha calc` and `omaha deal`.
#[derive(Debug, Serialize)]
pub struct CalcReport {
    pub hole: Vec<String>,
    pub board: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub hutchison: ScoreReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<BestReport>,
    pub streets: Vec<StreetReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub better: Option<BetterReport>,
}

#[derive(Debug, Serialize)]
pub struct ScoreReport {
    pub score: i32,
    pub suited: i32,
    pub pairs: i32,
    pub straights: i32,
    pub win_rate: f64,
}

impl From<&HutchisonScore> for ScoreReport {
    fn from(s: &HutchisonScore) -> Self {
        Self {
            score: s.total(),
            suited: s.suited,
            pairs: s.pairs,
            straights: s.straights,
            win_rate: s.win_rate(),
        }
    }
}

fn category_counts(tally: &EquityTally) -> Vec<CategoryCount> {
    HandRank::ALL
        .iter()
        .rev()
        .map(|&rank| CategoryCount {
            category: rank,
            count: tally.count(rank),
            probability: tally.probability(rank),
        })
        .collect()
}

impl CalcReport {
    /// Report for a position without a board: starting-hand score only.
    pub fn preflop(hole: &[Card], score: &HutchisonScore) -> Self {
        Self {
            hole: codes(hole),
            board: Vec::new(),
            seed: None,
            hutchison: score.into(),
            best: None,
            streets: Vec::new(),
            better: None,
        }
    }

    pub fn from_analysis(analysis: &Analysis, score: &HutchisonScore, list_better: bool) -> Self {
        let best = &analysis.best;
        let better = &analysis.better;
        Self {
            hole: codes(analysis.position.hole()),
            board: codes(analysis.position.board()),
            seed: None,
            hutchison: score.into(),
            best: Some(BestReport {
                category: best.category(),
                name: best.hand.name(),
                cards: codes(best.hand.cards()),
                hole_used: codes(&best.hole_used),
                board_used: codes(&best.board_used),
            }),
            streets: analysis
                .streets
                .iter()
                .map(|s| StreetReport {
                    street: s.street.label(),
                    total: s.tally.total(),
                    counts: category_counts(&s.tally),
                })
                .collect(),
            better: Some(BetterReport {
                total: better.total(),
                count: better.count(),
                counts: category_counts(&better.tally),
                groups: list_better.then(|| better.grouped()),
            }),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
