//! Exact enumeration of what the remaining deck can do to a position.
//!
//! Every pass takes the remaining cards as an immutable slice and walks all
//! of them; nothing is sampled and no deck is mutated.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::cards::Card;
use crate::combos::pairs;
use crate::hand::{FiveCardHand, HandRank};
use crate::omaha::{best_hand, BestHand, OmahaHand};

/// Occurrence count per hand category over a number of trials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquityTally {
    counts: BTreeMap<HandRank, u64>,
    total: u64,
}

impl Default for EquityTally {
    fn default() -> Self {
        Self::new()
    }
}

impl EquityTally {
    pub fn new() -> Self {
        Self {
            counts: HandRank::ALL.iter().map(|&r| (r, 0)).collect(),
            total: 0,
        }
    }

    /// Counts one trial that ended in `rank`.
    pub fn record(&mut self, rank: HandRank) {
        *self.counts.entry(rank).or_insert(0) += 1;
        self.total += 1;
    }

    /// Counts one trial without attributing it to a category.
    pub fn record_trial(&mut self) {
        self.total += 1;
    }

    /// Counts a hit for `rank` without adding a trial.
    pub fn record_hit(&mut self, rank: HandRank) {
        *self.counts.entry(rank).or_insert(0) += 1;
    }

    pub fn count(&self, rank: HandRank) -> u64 {
        self.counts.get(&rank).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Sum of all category counts.
    pub fn hits(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Share of trials ending in `rank`, in `0.0..=1.0`.
    pub fn probability(&self, rank: HandRank) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(rank) as f64 / self.total as f64
        }
    }

    /// Odds against `rank` as `N` in "N to 1"; zero when it never occurs.
    pub fn odds_against(&self, rank: HandRank) -> f64 {
        match self.count(rank) {
            0 => 0.0,
            n => self.total as f64 / n as f64 - 1.0,
        }
    }

    /// Sums two tallies; enumeration shards can be combined in any order.
    pub fn merge(&mut self, other: &EquityTally) {
        for (&rank, &n) in &other.counts {
            *self.counts.entry(rank).or_insert(0) += n;
        }
        self.total += other.total;
    }

    pub fn iter(&self) -> impl Iterator<Item = (HandRank, u64)> + '_ {
        self.counts.iter().map(|(&r, &n)| (r, n))
    }
}

/// A two-card holding that beats the reference position.
#[derive(Debug, Clone, Serialize)]
pub struct BetterHolding {
    pub cards: [Card; 2],
    pub hand: FiveCardHand,
}

/// Holdings sharing a descriptive name, e.g. 12 ways to make "Nine-high straight".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BetterGroup {
    pub name: String,
    pub category: HandRank,
    pub count: u64,
}

/// Result of the better-hands pass.
#[derive(Debug, Clone, Serialize)]
pub struct BetterHands {
    pub tally: EquityTally,
    /// Strongest first; empty unless the holdings were retained.
    pub holdings: Vec<BetterHolding>,
}

impl BetterHands {
    pub fn count(&self) -> u64 {
        self.tally.hits()
    }

    pub fn total(&self) -> u64 {
        self.tally.total()
    }

    /// Retained holdings collapsed by name, strongest first.
    pub fn grouped(&self) -> Vec<BetterGroup> {
        let mut groups: Vec<BetterGroup> = Vec::new();
        for holding in &self.holdings {
            let name = holding.hand.name();
            let category = holding.hand.category();
            match groups
                .iter_mut()
                .find(|g| g.category == category && g.name == name)
            {
                Some(group) => group.count += 1,
                None => groups.push(BetterGroup {
                    name,
                    category,
                    count: 1,
                }),
            }
        }
        groups
    }
}

/// Which stage of the board a distribution describes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub enum Street {
    Turn,
    River,
    /// All five board cards are known; the tally holds one trial.
    Showdown,
}

impl Street {
    pub fn label(self) -> &'static str {
        match self {
            Street::Turn => "TURN",
            Street::River => "RIVER",
            Street::Showdown => "SHOWDOWN",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StreetTally {
    pub street: Street,
    pub tally: EquityTally,
}

/// Everything computed for one position.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub position: OmahaHand,
    pub best: BestHand,
    pub better: BetterHands,
    pub streets: Vec<StreetTally>,
}

/// Counts every two-card holding from `remaining` whose best hand on the
/// same board strictly beats `hand`. Equal hands are not counted.
///
/// The tally's total is the number of holdings examined, `C(remaining, 2)`.
/// Returns `None` while the board has fewer than three cards.
pub fn better_hands(hand: &OmahaHand, remaining: &[Card], retain: bool) -> Option<BetterHands> {
    let reference = hand.best_hand()?;
    let started = Instant::now();
    let mut tally = EquityTally::new();
    let mut holdings = Vec::new();

    for (a, b) in pairs(remaining) {
        tally.record_trial();
        let Some(theirs) = best_hand(&[a, b], hand.board()) else {
            continue;
        };
        if theirs.hand > reference.hand {
            tally.record_hit(theirs.category());
            if retain {
                holdings.push(BetterHolding {
                    cards: [a, b],
                    hand: theirs.hand,
                });
            }
        }
    }
    holdings.sort_by(|x, y| y.hand.cmp(&x.hand));

    debug!(
        trials = tally.total(),
        better = tally.hits(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "better-hands pass finished"
    );
    Some(BetterHands { tally, holdings })
}

/// Category distribution over every possible turn card. Flop only.
pub fn turn_distribution(hand: &OmahaHand, remaining: &[Card]) -> Option<EquityTally> {
    if hand.board().len() != 3 {
        return None;
    }
    let started = Instant::now();
    let mut board = hand.board().to_vec();
    let mut tally = EquityTally::new();
    for &turn in remaining {
        board.push(turn);
        record_best(&mut tally, hand.hole(), &board);
        board.pop();
    }
    debug!(
        street = "turn",
        trials = tally.total(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "distribution finished"
    );
    Some(tally)
}

/// Category distribution over every possible river.
///
/// On the flop both the turn and the river are open and every unordered
/// pair is one trial; on the turn each remaining card is one trial.
pub fn river_distribution(hand: &OmahaHand, remaining: &[Card]) -> Option<EquityTally> {
    let started = Instant::now();
    let mut board = hand.board().to_vec();
    let mut tally = EquityTally::new();
    match board.len() {
        3 => {
            for (turn, river) in pairs(remaining) {
                board.push(turn);
                board.push(river);
                record_best(&mut tally, hand.hole(), &board);
                board.truncate(3);
            }
        }
        4 => {
            for &river in remaining {
                board.push(river);
                record_best(&mut tally, hand.hole(), &board);
                board.pop();
            }
        }
        _ => return None,
    }
    debug!(
        street = "river",
        trials = tally.total(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "distribution finished"
    );
    Some(tally)
}

/// Single-trial tally of the made hand once the board is complete.
pub fn showdown_distribution(hand: &OmahaHand) -> Option<EquityTally> {
    if hand.board().len() != 5 {
        return None;
    }
    let mut tally = EquityTally::new();
    tally.record(hand.category()?);
    Some(tally)
}

/// Runs every pass that applies to the position's street.
///
/// - flop: turn and river distributions
/// - turn: river distribution
/// - river: showdown
///
/// The better-hands pass always runs. Returns `None` before the flop.
pub fn analyze(hand: &OmahaHand, remaining: &[Card], retain_better: bool) -> Option<Analysis> {
    let best = hand.best_hand()?.clone();
    let better = better_hands(hand, remaining, retain_better)?;

    let mut streets = Vec::new();
    match hand.board().len() {
        3 => {
            if let Some(tally) = turn_distribution(hand, remaining) {
                streets.push(StreetTally {
                    street: Street::Turn,
                    tally,
                });
            }
            if let Some(tally) = river_distribution(hand, remaining) {
                streets.push(StreetTally {
                    street: Street::River,
                    tally,
                });
            }
        }
        4 => {
            if let Some(tally) = river_distribution(hand, remaining) {
                streets.push(StreetTally {
                    street: Street::River,
                    tally,
                });
            }
        }
        _ => {
            if let Some(tally) = showdown_distribution(hand) {
                streets.push(StreetTally {
                    street: Street::Showdown,
                    tally,
                });
            }
        }
    }

    Some(Analysis {
        position: hand.clone(),
        best,
        better,
        streets,
    })
}

fn record_best(tally: &mut EquityTally, hole: &[Card; 4], board: &[Card]) {
    if let Some(best) = best_hand(hole, board) {
        tally.record(best.category());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_starts_with_every_category_at_zero() {
        let tally = EquityTally::new();
        assert_eq!(tally.iter().count(), HandRank::ALL.len());
        assert!(tally.iter().all(|(_, n)| n == 0));
        assert_eq!(tally.probability(HandRank::Flush), 0.0);
    }

    #[test]
    fn odds_and_probability() {
        let mut tally = EquityTally::new();
        tally.record(HandRank::Flush);
        for _ in 0..3 {
            tally.record(HandRank::OnePair);
        }
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.probability(HandRank::Flush), 0.25);
        assert_eq!(tally.odds_against(HandRank::Flush), 3.0);
        assert_eq!(tally.odds_against(HandRank::Straight), 0.0);
    }

    #[test]
    fn merge_sums_counts_and_totals() {
        let mut a = EquityTally::new();
        a.record(HandRank::TwoPair);
        let mut b = EquityTally::new();
        b.record(HandRank::TwoPair);
        b.record_trial();
        a.merge(&b);
        assert_eq!(a.count(HandRank::TwoPair), 2);
        assert_eq!(a.total(), 3);
    }
}
