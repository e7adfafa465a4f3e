use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::rules::TRICKS_PER_ROUND;
use crate::domain::tricks::{legal_cards, CompletedTrick, PlayState};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

fn suit_twice(suit: Suit) -> Vec<Card> {
    let mut hand: Vec<Card> = Rank::ALL.iter().map(|&r| Card::new(r, suit)).collect();
    hand.extend(hand.clone());
    hand.sort();
    hand
}

/// a holds all clubs, b diamonds, c hearts, d spades.
fn start(trump: Suit, leader: usize) -> PlayState {
    PlayState::new(
        ["a", "b", "c", "d"].map(String::from),
        [
            suit_twice(Suit::Clubs),
            suit_twice(Suit::Diamonds),
            suit_twice(Suit::Hearts),
            suit_twice(Suit::Spades),
        ],
        trump,
        leader,
    )
}

#[test]
fn playing_removes_one_instance() {
    let next = start(Suit::Hearts, 0).play_card("a", card("AC")).unwrap();
    assert_eq!(next.hands[0].len(), 11);
    assert_eq!(
        next.hands[0].iter().filter(|&&c| c == card("AC")).count(),
        1
    );
    assert_eq!(next.current_trick, cards(&["AC"]));
    assert_eq!(next.player_index, 1);
}

#[test]
fn rejects_play_out_of_turn() {
    assert_eq!(
        start(Suit::Hearts, 0).play_card("b", card("AD")).unwrap_err(),
        DomainError::InvalidPlay("b cannot play on a's turn".into())
    );
}

#[test]
fn rejects_card_outside_legal_set() {
    let s = start(Suit::Hearts, 0).play_card("a", card("TC")).unwrap();
    let s = s.play_card("b", card("9D")).unwrap();
    // c holds trump and must beat the Ten of Clubs with it; spades are not held anyway.
    assert_eq!(
        s.play_card("c", card("AS")).unwrap_err(),
        DomainError::InvalidPlay("Invalid card played".into())
    );
}

#[test]
fn completed_trick_goes_to_trumper_and_resets() {
    let s = start(Suit::Hearts, 0);
    let s = s.play_card("a", card("AC")).unwrap();
    let s = s.play_card("b", card("9D")).unwrap();
    let s = s.play_card("c", card("9H")).unwrap();
    let s = s.play_card("d", card("9S")).unwrap();

    assert!(s.current_trick.is_empty());
    assert_eq!(s.trick_no, 1);
    assert_eq!(s.player_index, 2);
    assert_eq!(
        s.completed_tricks,
        vec![CompletedTrick {
            leader: 0,
            cards: [card("AC"), card("9D"), card("9H"), card("9S")],
            winner: 2,
        }]
    );
    assert_eq!(s.tricks_won(), [0, 0, 1, 0]);
}

#[test]
fn winner_seat_is_relative_to_leader() {
    // c leads; the led card holds.
    let s = start(Suit::Hearts, 2);
    let s = s.play_card("c", card("AH")).unwrap();
    let s = s.play_card("d", card("AS")).unwrap();
    let s = s.play_card("a", card("AC")).unwrap();
    assert_eq!(s.leader(), 2);
    let s = s.play_card("b", card("AD")).unwrap();
    assert_eq!(s.completed_tricks[0].leader, 2);
    assert_eq!(s.completed_tricks[0].winner, 2);
    assert_eq!(s.player_index, 2);
}

#[test]
fn winner_seat_counts_from_the_leader() {
    // b leads, so trick positions 0..=3 are seats 1, 2, 3, 0.
    for (trump, winner) in [(Suit::Hearts, 2), (Suit::Clubs, 0), (Suit::Spades, 3)] {
        let s = start(trump, 1);
        let s = s.play_card("b", card("9D")).unwrap();
        let s = s.play_card("c", card("9H")).unwrap();
        let s = s.play_card("d", card("9S")).unwrap();
        let s = s.play_card("a", card("9C")).unwrap();
        let trick = &s.completed_tricks[0];
        assert_eq!(trick.leader, 1);
        assert_eq!(trick.winner, winner, "trump {trump}");
        assert_eq!(s.player_index, winner);
        assert_eq!(s.current_player().map(String::as_str), Some(s.players[winner].as_str()));
    }
}

#[test]
fn twelve_tricks_then_no_more_plays() {
    let mut s = start(Suit::Hearts, 0);
    while !s.is_complete() {
        let player = s.current_player().cloned().unwrap();
        let choice = s.legal_cards_for(&player)[0];
        s = s.play_card(&player, choice).unwrap();
    }
    assert_eq!(s.trick_no, TRICKS_PER_ROUND);
    assert!(s.hands.iter().all(Vec::is_empty));
    assert_eq!(s.completed_tricks.len(), 12);
    assert_eq!(s.tricks_won().iter().map(|&n| n as usize).sum::<usize>(), 12);
    assert_eq!(s.current_player(), None);
    assert_eq!(
        s.play_card("a", card("AC")).unwrap_err(),
        DomainError::InvalidPlay("all 12 tricks have been played".into())
    );
}

#[test]
fn leader_may_play_anything() {
    let hand = cards(&["AC", "AC", "9C", "KD"]);
    assert_eq!(legal_cards(&hand, &[], Suit::Spades), cards(&["9C", "AC", "KD"]));
}

#[test]
fn must_follow_and_beat_when_possible() {
    let hand = cards(&["KC", "AC", "9C", "TD"]);
    assert_eq!(legal_cards(&hand, &cards(&["TC"]), Suit::Spades), cards(&["AC"]));
}

#[test]
fn follow_suit_without_a_winner_allows_any_of_suit() {
    let hand = cards(&["KC", "9C", "TD"]);
    assert_eq!(
        legal_cards(&hand, &cards(&["AC"]), Suit::Spades),
        cards(&["9C", "KC"])
    );
}

#[test]
fn must_trump_when_void_in_led_suit() {
    let hand = cards(&["9S", "AS", "KD"]);
    assert_eq!(
        legal_cards(&hand, &cards(&["AC"]), Suit::Spades),
        cards(&["9S", "AS"])
    );
    // Already trumped by a King: only the Ace over-trumps.
    assert_eq!(
        legal_cards(&hand, &cards(&["AC", "KS"]), Suit::Spades),
        cards(&["AS"])
    );
    // Nothing over-trumps an Ace: any trump is still required.
    assert_eq!(
        legal_cards(&hand, &cards(&["AC", "AS"]), Suit::Spades),
        cards(&["9S", "AS"])
    );
}

#[test]
fn void_in_suit_and_trump_discards_anything() {
    let hand = cards(&["KD", "9H"]);
    assert_eq!(legal_cards(&hand, &cards(&["AC"]), Suit::Spades), cards(&["KD", "9H"]));
}

#[test]
fn following_suit_after_trump_cannot_win() {
    // Led clubs was trumped; a club is still required even though none wins.
    let hand = cards(&["AC", "AS"]);
    assert_eq!(
        legal_cards(&hand, &cards(&["KC", "9S"]), Suit::Spades),
        cards(&["AC"])
    );
}

#[test]
fn legal_cards_only_for_the_current_player() {
    let s = start(Suit::Hearts, 0);
    assert!(s.legal_cards_for("b").is_empty());
    assert_eq!(s.legal_cards_for("a").len(), 6);
}
