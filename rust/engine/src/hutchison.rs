//! Hutchison point count for Omaha starting hands.
//!
//! Scores four hole cards without a board as the sum of three passes:
//! suitedness, pairs and straight potential. Half the score approximates
//! the hand's win rate in percent.

use serde::Serialize;

use crate::cards::{Card, Rank};

/// Bonus for two or more cards of a suit, keyed by the suit's highest rank.
fn suited_bonus(high: Rank) -> i32 {
    match high {
        Rank::Ace => 8,
        Rank::King => 6,
        Rank::Queen => 5,
        Rank::Jack | Rank::Ten => 4,
        Rank::Nine | Rank::Eight => 3,
        Rank::Seven | Rank::Six | Rank::Five => 2,
        Rank::Four | Rank::Three | Rank::Two => 1,
    }
}

/// Three or four cards of one suit.
const CROWDED_SUIT_PENALTY: i32 = 2;

fn pair_bonus(rank: Rank) -> i32 {
    match rank {
        Rank::Ace => 18,
        Rank::King => 16,
        Rank::Queen => 14,
        Rank::Jack => 13,
        Rank::Ten => 12,
        Rank::Nine => 10,
        Rank::Eight => 9,
        Rank::Seven => 8,
        _ => 7,
    }
}

/// Base points for `len` distinct ranks that fit inside one straight.
fn run_bonus(len: usize) -> i32 {
    match len {
        4 => 25,
        3 => 18,
        2 => 8,
        _ => 0,
    }
}

const GAP_PENALTY: i32 = 2;
const ACE_HIGH_RUN_PENALTY: i32 = 4;

/// Flat bonuses for an Ace held with cards below Six (wheel draws).
const ACE_THREE_LOW: i32 = 20;
const ACE_TWO_LOW: i32 = 12;
const ACE_ONE_LOW: i32 = 6;

/// Per-pass breakdown of a starting-hand score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HutchisonScore {
    pub suited: i32,
    pub pairs: i32,
    pub straights: i32,
}

impl HutchisonScore {
    pub fn total(&self) -> i32 {
        self.suited + self.pairs + self.straights
    }

    /// Approximate win rate in percent.
    pub fn win_rate(&self) -> f64 {
        win_rate(self.total())
    }
}

pub fn evaluate(hole: &[Card; 4]) -> HutchisonScore {
    let groups = rank_groups(hole);
    let distinct: Vec<Rank> = groups.iter().map(|&(_, r)| r).collect();
    HutchisonScore {
        suited: suited_points(hole),
        pairs: groups
            .iter()
            .filter(|&&(n, _)| n == 2)
            .map(|&(_, r)| pair_bonus(r))
            .sum(),
        straights: straight_potential(&distinct),
    }
}

pub fn score(hole: &[Card; 4]) -> i32 {
    evaluate(hole).total()
}

pub fn win_rate(score: i32) -> f64 {
    score as f64 / 2.0
}

fn suited_points(hole: &[Card; 4]) -> i32 {
    let mut points = 0;
    for suit in crate::cards::all_suits() {
        let suited: Vec<Rank> = hole
            .iter()
            .filter(|c| c.suit == suit)
            .map(|c| c.rank)
            .collect();
        if suited.len() < 2 {
            continue;
        }
        if let Some(&high) = suited.iter().max() {
            points += suited_bonus(high);
        }
        if suited.len() > 2 {
            points -= CROWDED_SUIT_PENALTY;
        }
    }
    points
}

/// (count, rank) per distinct rank, highest rank first.
fn rank_groups(hole: &[Card; 4]) -> Vec<(u8, Rank)> {
    let mut ranks: Vec<Rank> = hole.iter().map(|c| c.rank).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    let mut groups: Vec<(u8, Rank)> = Vec::with_capacity(4);
    for rank in ranks {
        match groups.last_mut() {
            Some((n, r)) if *r == rank => *n += 1,
            _ => groups.push((1, rank)),
        }
    }
    groups
}

fn straight_potential(distinct: &[Rank]) -> i32 {
    let mut ranks = distinct.to_vec();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    if ranks.first() != Some(&Rank::Ace) {
        return straight_points(&ranks);
    }
    let others = &ranks[1..];
    match others.iter().filter(|&&r| r < Rank::Six).count() {
        3 => ACE_THREE_LOW,
        2 => ACE_TWO_LOW + straight_points(others),
        1 => ACE_ONE_LOW + straight_points(others),
        _ => straight_points(&ranks),
    }
}

/// Points for distinct ranks sorted descending.
///
/// Ranks spanning less than five can share a straight and score as one
/// run; wider spreads are split into the two windows one rank shorter,
/// each scored on its own.
fn straight_points(ranks: &[Rank]) -> i32 {
    let len = ranks.len();
    if len < 2 {
        return 0;
    }
    let span = (ranks[0].value() - ranks[len - 1].value()) as i32;
    if span < 5 {
        let gaps = span - len as i32 + 1;
        let mut points = run_bonus(len) - GAP_PENALTY * gaps;
        if ranks[0] == Rank::Ace {
            points -= ACE_HIGH_RUN_PENALTY;
        }
        return points;
    }
    (0..2).map(|start| straight_points(&ranks[start..start + len - 1])).sum()
}
