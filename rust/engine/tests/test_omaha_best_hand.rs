use omaha_engine::cards::{parse_cards, Card, Rank};
use omaha_engine::errors::EngineError;
use omaha_engine::hand::{HandRank, RankGroup};
use omaha_engine::omaha::{best_hand, OmahaHand};

fn cards(codes: &str) -> Vec<Card> {
    parse_cards(codes).unwrap()
}

fn position(hole: &str, board: &str) -> OmahaHand {
    let h = cards(hole);
    OmahaHand::new([h[0], h[1], h[2], h[3]], cards(board)).unwrap()
}

#[test]
fn aces_and_kings_on_ace_king_ten_flop() {
    // Only one Ace and one King reach the board, so the hole pairs can make
    // trips but never a full house.
    let hand = position("AsAhKsKh", "AdKdTd");
    let best = hand.best_hand().unwrap();
    assert_eq!(best.category(), HandRank::ThreeOfAKind);
    assert_eq!(best.hand.name(), "Three Aces");
    assert_eq!(
        best.hand.rank_list(),
        &[
            RankGroup {
                count: 3,
                rank: Rank::Ace
            },
            RankGroup {
                count: 1,
                rank: Rank::King
            },
            RankGroup {
                count: 1,
                rank: Rank::Ten
            },
        ]
    );
    let mut used: Vec<String> = best.hole_used.iter().map(|c| c.to_string()).collect();
    used.sort();
    assert_eq!(used, vec!["Ah", "As"]);
}

#[test]
fn no_best_hand_before_the_flop() {
    let hand = position("AsAhKsKh", "");
    assert!(hand.best_hand().is_none());
    let hand = position("AsAhKsKh", "2c3c");
    assert!(hand.category().is_none());
}

#[test]
fn must_use_exactly_two_hole_cards() {
    // Four hearts on board and a single heart in hand: no flush.
    let hand = position("Ah2c3d4s", "KhQhJh9h5c");
    assert_eq!(hand.category(), Some(HandRank::HighCard));

    // The wheel needs only two of the hole cards.
    let hand = position("5h4c9s9d", "3s2dAcKhQh");
    assert_eq!(hand.category(), Some(HandRank::Straight));
    assert!(hand.best_hand().unwrap().hand.is_wheel());
}

#[test]
fn board_quads_do_not_play() {
    let hand = position("AsQs3c4d", "KcKdKhKs2c");
    // Two hole cards plus three Kings: trips at most.
    assert_eq!(hand.category(), Some(HandRank::ThreeOfAKind));
}

#[test]
fn best_hand_is_invariant_under_reordering() {
    let hole = cards("9h8hAcTd");
    let board = cards("7h6h5h2sKd");
    let reference = best_hand(&hole, &board).unwrap().hand;
    assert_eq!(reference.category(), HandRank::StraightFlush);

    let mut hole_perm = hole.clone();
    let mut board_perm = board.clone();
    for shift in 0..4 {
        hole_perm.rotate_left(1);
        board_perm.rotate_right(shift % 2 + 1);
        board_perm.swap(0, 4);
        let again = best_hand(&hole_perm, &board_perm).unwrap().hand;
        assert_eq!(again, reference);
        assert_eq!(again.name(), reference.name());
    }
    hole_perm.reverse();
    board_perm.reverse();
    assert_eq!(best_hand(&hole_perm, &board_perm).unwrap().hand, reference);
}

#[test]
fn two_card_holdings_use_both_cards() {
    let best = best_hand(&cards("QsJs"), &cards("AsKsTs2d")).unwrap();
    assert_eq!(best.category(), HandRank::RoyalFlush);
    assert!(best_hand(&cards("Qs"), &cards("AsKsTs2d")).is_none());
}

#[test]
fn rejects_oversized_board() {
    let h = cards("AsAhKsKh");
    let err = OmahaHand::new([h[0], h[1], h[2], h[3]], cards("2c3c4c5c6c7c")).unwrap_err();
    assert_eq!(err, EngineError::BoardSize(6));
}

#[test]
fn rejects_card_in_hole_and_board() {
    let h = cards("AsAhKsKh");
    let err = OmahaHand::new([h[0], h[1], h[2], h[3]], cards("As2c3c")).unwrap_err();
    assert_eq!(err, EngineError::DuplicateCard("As".to_string()));
}

#[test]
fn with_board_extends_the_position() {
    let flop = position("AsAhKsKh", "AdKdTd");
    let turn = flop.with_board(&cards("Tc")).unwrap();
    assert_eq!(turn.board().len(), 4);
    assert_eq!(turn.category(), Some(HandRank::FullHouse));
    assert_eq!(turn.best_hand().unwrap().hand.name(), "Aces full of Tens");
    assert!(turn.compare(&flop).is_gt());
}
