use std::collections::HashSet;

use omaha_engine::cards::{full_deck, Card, Rank, Suit};
use omaha_engine::deck::Deck;
use omaha_engine::errors::EngineError;

#[test]
fn new_deck_has_52_unique_cards() {
    let deck = Deck::new();
    assert_eq!(deck.len(), 52);
    let set: HashSet<Card> = deck.remaining().iter().copied().collect();
    assert_eq!(set.len(), 52);
}

#[test]
fn taking_every_card_exhausts_the_deck() {
    let mut deck = Deck::new();
    for card in full_deck() {
        let taken = deck.take(&card.to_string()).expect("card should be present");
        assert_eq!(taken, card);
    }
    assert!(deck.is_empty());
    // a 53rd take can only name a card that is already gone
    assert_eq!(
        deck.take("As"),
        Err(EngineError::DuplicateCard("As".to_string()))
    );
}

#[test]
fn taking_twice_is_a_duplicate() {
    let mut deck = Deck::new();
    deck.take("Kh").unwrap();
    assert_eq!(
        deck.take("Kh"),
        Err(EngineError::DuplicateCard("Kh".to_string()))
    );
    assert_eq!(deck.len(), 51);
}

#[test]
fn unknown_codes_are_invalid() {
    let mut deck = Deck::new();
    for code in ["Xs", "Ak", "ah", "1c", "", "Asd"] {
        assert!(
            matches!(deck.take(code), Err(EngineError::InvalidCardCode(_))),
            "{code:?}"
        );
    }
    assert_eq!(deck.len(), 52);
}

#[test]
fn lookup_does_not_remove() {
    let deck = Deck::new();
    let card = deck.lookup("Td").unwrap();
    assert_eq!(card, Card::new(Rank::Ten, Suit::Diamonds));
    assert!(deck.contains(&card));
    assert_eq!(deck.len(), 52);
}

#[test]
fn duplicate_hole_cards_fail_before_evaluation() {
    let mut deck = Deck::new();
    assert_eq!(
        deck.take_all("2c2d2h2c"),
        Err(EngineError::DuplicateCard("2c".to_string()))
    );
}

#[test]
fn take_all_reports_odd_leftover() {
    let mut deck = Deck::new();
    assert_eq!(
        deck.take_all("AsK"),
        Err(EngineError::InvalidCardCode("K".to_string()))
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_ne!(a, b);
}

#[test]
fn dealt_cards_leave_the_deck() {
    let mut deck = Deck::new_with_seed(777);
    let mut seen = HashSet::new();
    while let Some(card) = deck.deal_card() {
        assert!(seen.insert(card));
        assert!(!deck.contains(&card));
    }
    assert_eq!(seen.len(), 52);
}
