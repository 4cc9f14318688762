use std::cmp::Ordering;

use serde::Serialize;

use crate::cards::{format_cards, Card};
use crate::combos::{cartesian, k_subsets};
use crate::errors::EngineError;
use crate::hand::{FiveCardHand, HandRank};

/// The strongest five-card hand of a position and the cards that made it.
#[derive(Debug, Clone, Serialize)]
pub struct BestHand {
    pub hand: FiveCardHand,
    pub hole_used: [Card; 2],
    pub board_used: [Card; 3],
}

impl BestHand {
    pub fn category(&self) -> HandRank {
        self.hand.category()
    }
}

/// Best hand using exactly two cards of `hole` and exactly three of `board`.
///
/// Returns `None` when no legal combination exists (fewer than two hole
/// cards or three board cards). On ties the first combination in
/// enumeration order is kept; the hand value itself does not depend on
/// the order.
pub fn best_hand(hole: &[Card], board: &[Card]) -> Option<BestHand> {
    let hole_pairs = k_subsets(hole, 2);
    let board_triples = k_subsets(board, 3);

    let mut best: Option<BestHand> = None;
    for (h, b) in cartesian(&hole_pairs, &board_triples) {
        let hand = FiveCardHand::new([h[0], h[1], b[0], b[1], b[2]]);
        let better = match &best {
            None => true,
            Some(current) => hand > current.hand,
        };
        if better {
            best = Some(BestHand {
                hand,
                hole_used: [h[0], h[1]],
                board_used: [b[0], b[1], b[2]],
            });
        }
    }
    best
}

/// An Omaha position: four hole cards and up to five board cards.
#[derive(Debug, Clone, Serialize)]
pub struct OmahaHand {
    hole: [Card; 4],
    board: Vec<Card>,
    #[serde(skip)]
    best: Option<BestHand>,
}

impl OmahaHand {
    /// # Errors
    ///
    /// - [`EngineError::BoardSize`] if `board` has more than five cards
    /// - [`EngineError::DuplicateCard`] if a card appears twice in the position
    pub fn new(hole: [Card; 4], board: Vec<Card>) -> Result<Self, EngineError> {
        if board.len() > 5 {
            return Err(EngineError::BoardSize(board.len()));
        }
        let mut seen: Vec<Card> = Vec::with_capacity(9);
        for &card in hole.iter().chain(board.iter()) {
            if seen.contains(&card) {
                return Err(EngineError::DuplicateCard(card.to_string()));
            }
            seen.push(card);
        }
        let best = best_hand(&hole, &board);
        Ok(Self { hole, board, best })
    }

    /// Same hole cards with `extra` appended to the board.
    pub fn with_board(&self, extra: &[Card]) -> Result<Self, EngineError> {
        let mut board = self.board.clone();
        board.extend_from_slice(extra);
        Self::new(self.hole, board)
    }

    pub fn hole(&self) -> &[Card; 4] {
        &self.hole
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// `None` until the board has at least three cards.
    pub fn best_hand(&self) -> Option<&BestHand> {
        self.best.as_ref()
    }

    pub fn category(&self) -> Option<HandRank> {
        self.best.as_ref().map(BestHand::category)
    }

    /// Compares two positions by their best hands. A position without a
    /// best hand ranks below one that has it.
    pub fn compare(&self, other: &OmahaHand) -> Ordering {
        match (&self.best, &other.best) {
            (Some(a), Some(b)) => a.hand.cmp(&b.hand),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl std::fmt::Display for OmahaHand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", format_cards(&self.hole), format_cards(&self.board))
    }
}
