//! # omaha-engine: Omaha Position Calculator Core
//!
//! Evaluates Omaha hold'em positions by exact enumeration: the best
//! five-card hand from four hole cards and the board, how the category can
//! change on the turn and river, and how many two-card holdings currently
//! beat it. A board-free Hutchison point count scores starting hands.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and card codes
//! - [`deck`] - The 52-card deck with take-by-code bookkeeping
//! - [`combos`] - Subset and cartesian-product producers
//! - [`hand`] - Five-card hand evaluation and ordering
//! - [`omaha`] - Best hand from exactly two hole and three board cards
//! - [`equity`] - Better-hands count and turn/river distributions
//! - [`hutchison`] - Starting-hand point count
//! - [`errors`] - Error types for card input
//!
//! ## Quick Start
//!
//! ```rust
//! use omaha_engine::deck::Deck;
//! use omaha_engine::equity::analyze;
//! use omaha_engine::hand::HandRank;
//! use omaha_engine::omaha::OmahaHand;
//!
//! let mut deck = Deck::new();
//! let hole = deck.take_all("AsAhKsKh").unwrap();
//! let board = deck.take_all("AdKdTd").unwrap();
//! let hand = OmahaHand::new([hole[0], hole[1], hole[2], hole[3]], board).unwrap();
//!
//! assert_eq!(hand.category(), Some(HandRank::ThreeOfAKind));
//!
//! let analysis = analyze(&hand, deck.remaining(), false).unwrap();
//! assert_eq!(analysis.better.total(), 990);
//! ```
//!
//! ## Duplicate Detection
//!
//! Cards leave the deck as they are placed, so a card named twice fails
//! before anything is evaluated:
//!
//! ```rust
//! use omaha_engine::deck::Deck;
//! use omaha_engine::errors::EngineError;
//!
//! let mut deck = Deck::new();
//! let err = deck.take_all("2c2d2h2c").unwrap_err();
//! assert_eq!(err, EngineError::DuplicateCard("2c".into()));
//! ```

pub mod cards;
pub mod combos;
pub mod deck;
pub mod equity;
pub mod errors;
pub mod hand;
pub mod hutchison;
pub mod omaha;
