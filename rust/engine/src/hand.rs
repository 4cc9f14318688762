use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Hand categories in ascending strength.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandRank {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandRank {
    pub const ALL: [HandRank; 10] = [
        HandRank::HighCard,
        HandRank::OnePair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
        HandRank::RoyalFlush,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the tie-break key: how many cards share `rank`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RankGroup {
    pub count: u8,
    pub rank: Rank,
}

impl Ord for RankGroup {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.count.cmp(&other.count) {
            Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for RankGroup {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An evaluated five-card poker hand.
#[derive(Debug, Clone, Serialize)]
pub struct FiveCardHand {
    /// The five cards, highest first.
    cards: [Card; 5],
    category: HandRank,
    /// Descending (count, rank) groups; the full tie-break key.
    rank_list: Vec<RankGroup>,
    /// Ace-to-five straight, where the Ace plays low.
    wheel: bool,
}

impl FiveCardHand {
    pub fn new(mut cards: [Card; 5]) -> Self {
        cards.sort_unstable_by(|a, b| b.cmp(a));

        let mut rank_list: Vec<RankGroup> = Vec::with_capacity(5);
        for card in &cards {
            match rank_list.last_mut() {
                Some(group) if group.rank == card.rank => group.count += 1,
                _ => rank_list.push(RankGroup {
                    count: 1,
                    rank: card.rank,
                }),
            }
        }
        rank_list.sort_unstable_by(|a, b| b.cmp(a));

        let multiplicities: Vec<u8> = rank_list.iter().map(|g| g.count).collect();
        let flush = cards.iter().all(|c| c.suit == cards[0].suit);

        let top = cards[0].rank.value();
        let wheel = multiplicities.len() == 5 && top - cards[1].rank.value() == 9;
        let straight = multiplicities.len() == 5 && (top - cards[4].rank.value() == 4 || wheel);

        let category = if straight && flush {
            if cards[1].rank == Rank::King {
                HandRank::RoyalFlush
            } else {
                HandRank::StraightFlush
            }
        } else {
            match multiplicities.as_slice() {
                [4, 1] => HandRank::FourOfAKind,
                [3, 2] => HandRank::FullHouse,
                _ if flush => HandRank::Flush,
                _ if straight => HandRank::Straight,
                [3, 1, 1] => HandRank::ThreeOfAKind,
                [2, 2, 1] => HandRank::TwoPair,
                [2, 1, 1, 1] => HandRank::OnePair,
                _ => HandRank::HighCard,
            }
        };

        Self {
            cards,
            category,
            rank_list,
            wheel,
        }
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn category(&self) -> HandRank {
        self.category
    }

    pub fn rank_list(&self) -> &[RankGroup] {
        &self.rank_list
    }

    pub fn is_wheel(&self) -> bool {
        self.wheel
    }

    /// Descriptive name such as "Kings over Tens" or "Five-high straight".
    pub fn name(&self) -> String {
        let high = self.rank_list[0].rank;
        let second = self.rank_list.get(1).map(|g| g.rank).unwrap_or(high);
        let straight_top = if self.wheel { second } else { high };
        match self.category {
            HandRank::HighCard => format!("{} high", high.name()),
            HandRank::OnePair => format!("Pair of {}", high.plural()),
            HandRank::TwoPair => format!("{} over {}", high.plural(), second.plural()),
            HandRank::ThreeOfAKind => format!("Three {}", high.plural()),
            HandRank::Straight => format!("{}-high straight", straight_top.name()),
            HandRank::Flush => format!("{}-high flush", high.name()),
            HandRank::FullHouse => format!("{} full of {}", high.plural(), second.plural()),
            HandRank::FourOfAKind => format!("Four {}", high.plural()),
            HandRank::StraightFlush => format!("{}-high straight flush", straight_top.name()),
            HandRank::RoyalFlush => "Royal flush".to_string(),
        }
    }
}

impl Ord for FiveCardHand {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.category.cmp(&other.category) {
            Ordering::Equal => match self.category {
                // Skip the top card so a wheel's Ace does not count high; the
                // wheel and the six-high straight then differ only by the flag.
                HandRank::Straight | HandRank::StraightFlush => self.rank_list[1..]
                    .cmp(&other.rank_list[1..])
                    .then_with(|| other.wheel.cmp(&self.wheel)),
                _ => self.rank_list.cmp(&other.rank_list),
            },
            ord => ord,
        }
    }
}

impl PartialOrd for FiveCardHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FiveCardHand {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.rank_list == other.rank_list
    }
}

impl Eq for FiveCardHand {}

impl fmt::Display for FiveCardHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::cards::format_cards(&self.cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn hand(codes: &str) -> FiveCardHand {
        let cards = parse_cards(codes).unwrap();
        FiveCardHand::new([cards[0], cards[1], cards[2], cards[3], cards[4]])
    }

    #[test]
    fn rank_list_groups_by_count_then_rank() {
        let h = hand("KsTdKhTcKd");
        assert_eq!(h.category(), HandRank::FullHouse);
        assert_eq!(
            h.rank_list(),
            &[
                RankGroup {
                    count: 3,
                    rank: Rank::King
                },
                RankGroup {
                    count: 2,
                    rank: Rank::Ten
                }
            ]
        );
    }

    #[test]
    fn cards_are_sorted_descending() {
        let h = hand("2c9sAh9d5c");
        let ranks: Vec<Rank> = h.cards().iter().map(|c| c.rank).collect();
        assert_eq!(
            ranks,
            vec![Rank::Ace, Rank::Nine, Rank::Nine, Rank::Five, Rank::Two]
        );
        // equal ranks fall back to suit order
        assert!(h.cards()[1].suit > h.cards()[2].suit);
    }

    #[test]
    fn names() {
        assert_eq!(hand("AsJd8c6h2d").name(), "Ace high");
        assert_eq!(hand("KsKd8c6h2d").name(), "Pair of Kings");
        assert_eq!(hand("KsKdTcTh2d").name(), "Kings over Tens");
        assert_eq!(hand("7s7d7cKh2d").name(), "Three Sevens");
        assert_eq!(hand("As2d3c4h5d").name(), "Five-high straight");
        assert_eq!(hand("9s8d7c6h5d").name(), "Nine-high straight");
        assert_eq!(hand("Qh9h7h4h2h").name(), "Queen-high flush");
        assert_eq!(hand("AsAdAcKhKd").name(), "Aces full of Kings");
        assert_eq!(hand("9s9d9c9h2d").name(), "Four Nines");
        assert_eq!(hand("5h4h3h2hAh").name(), "Five-high straight flush");
        assert_eq!(hand("AhKhQhJhTh").name(), "Royal flush");
    }

    #[test]
    fn equal_hands_ignore_suits() {
        let a = hand("AsKd8c6h2d");
        let b = hand("AdKc8h6s2c");
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn kicker_breaks_ties() {
        assert!(hand("KsKd8c6h3d") > hand("KhKc8d6s2c"));
        assert!(hand("QsQdJcJh3d") < hand("QhQcJdJs4c"));
    }
}
