use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::cards::{full_deck, split_codes, Card};
use crate::errors::EngineError;

/// The cards not yet assigned to a hole or board position.
///
/// Cards leave the deck through [`Deck::take`] (by code) or
/// [`Deck::deal_card`] (from the top after a shuffle); whatever is left is
/// the population every enumeration draws from.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = Self::new();
        deck.shuffle(&mut ChaCha20Rng::seed_from_u64(seed));
        deck
    }

    pub fn shuffle(&mut self, rng: &mut ChaCha20Rng) {
        self.cards.shuffle(rng);
    }

    /// Resolves a code to its card without touching the deck.
    pub fn lookup(&self, code: &str) -> Result<Card, EngineError> {
        code.parse()
    }

    /// Removes the card named by `code`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidCardCode`] if `code` names none of the 52 cards
    /// - [`EngineError::DuplicateCard`] if the card was already taken
    pub fn take(&mut self, code: &str) -> Result<Card, EngineError> {
        let card = self.lookup(code)?;
        let idx = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or_else(|| EngineError::DuplicateCard(code.to_string()))?;
        trace!(card = %card, "took card from deck");
        Ok(self.cards.remove(idx))
    }

    /// Takes every card of a concatenated code string, stopping at the first failure.
    pub fn take_all(&mut self, codes: &str) -> Result<Vec<Card>, EngineError> {
        split_codes(codes).iter().map(|c| self.take(c)).collect()
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
