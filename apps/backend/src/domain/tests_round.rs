use crate::domain::rules::{DECK_SIZE, MIN_OPENING_BID};
use crate::domain::round::{Round, RoundStage};
use crate::domain::scoring::score_meld;
use crate::domain::state::Phase;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

fn players() -> Vec<String> {
    ["a", "b", "c", "d"].map(String::from).to_vec()
}

fn cards_held(round: &Round) -> usize {
    let in_tricks = match &round.stage {
        RoundStage::Play { play, .. } => {
            play.completed_tricks.len() * 4 + play.current_trick.len()
        }
        RoundStage::Complete { tricks, .. } => tricks.len() * 4,
        _ => 0,
    };
    let in_hands: usize = round
        .players
        .iter()
        .map(|p| round.hand(p).map_or(0, <[Card]>::len))
        .sum();
    in_hands + in_tricks
}

/// a bids 25, everyone else passes, a names Hearts.
fn after_trump() -> Round {
    Round::new(players(), 7)
        .and_then(|r| r.new_bid("a", 25))
        .and_then(|r| r.pass_bidding("b"))
        .and_then(|r| r.pass_bidding("c"))
        .and_then(|r| r.pass_bidding("d"))
        .and_then(|r| r.set_trump("a", Suit::Hearts))
        .unwrap()
}

fn first_four(round: &Round, player: &str) -> Vec<Card> {
    round.hand(player).unwrap()[..4].to_vec()
}

fn after_passes() -> Round {
    let r = after_trump();
    let r = r.pass_cards("c", "a", &first_four(&r, "c")).unwrap();
    r.pass_cards("a", "c", &first_four(&r, "a")).unwrap()
}

#[test]
fn new_round_deals_and_opens_bidding() {
    let r = Round::new(players(), 7).unwrap();
    assert_eq!(r.phase(), Phase::Bidding);
    assert_eq!(r.current_player().map(String::as_str), Some("a"));
    assert_eq!(cards_held(&r), DECK_SIZE);
    let RoundStage::Bidding { bidding, .. } = &r.stage else {
        panic!("expected bidding stage");
    };
    assert_eq!(bidding.current_bid, MIN_OPENING_BID);
    assert_eq!(bidding.active_players, players());
}

#[test]
fn new_round_rejects_bad_player_lists() {
    let three = ["a", "b", "c"].map(String::from).to_vec();
    assert_eq!(
        Round::new(three, 1).unwrap_err(),
        DomainError::InvalidPlayers("A round needs exactly 4 players, got 3".into())
    );
    let dup = ["a", "b", "a", "d"].map(String::from).to_vec();
    assert_eq!(
        Round::new(dup, 1).unwrap_err(),
        DomainError::InvalidPlayers("Player a appears more than once".into())
    );
    let blank = ["a", " ", "c", "d"].map(String::from).to_vec();
    assert!(matches!(
        Round::new(blank, 1),
        Err(DomainError::InvalidPlayers(_))
    ));
}

#[test]
fn auction_winner_names_trump() {
    let r = Round::new(players(), 7)
        .and_then(|r| r.new_bid("a", 25))
        .and_then(|r| r.pass_bidding("b"))
        .and_then(|r| r.pass_bidding("c"))
        .and_then(|r| r.pass_bidding("d"))
        .unwrap();
    assert_eq!(r.phase(), Phase::TrumpSelect);
    assert_eq!(r.current_player().map(String::as_str), Some("a"));
    assert!(matches!(
        r.set_trump("b", Suit::Clubs),
        Err(DomainError::InvalidBid(_))
    ));
}

#[test]
fn trump_opens_passing_with_partner_opposite() {
    let r = after_trump();
    assert_eq!(r.phase(), Phase::PassingToBidWinner);
    assert_eq!(r.current_player().map(String::as_str), Some("c"));
    let contract = r.contract().unwrap();
    assert_eq!(contract.winner, "a");
    assert_eq!(contract.bid, 25);
    assert_eq!(contract.trump, Suit::Hearts);
}

#[test]
fn passes_track_hand_sizes_and_start_play() {
    let r = after_trump();
    let r = r.pass_cards("c", "a", &first_four(&r, "c")).unwrap();
    assert_eq!(r.phase(), Phase::PassingToPartner);
    assert_eq!(r.hand("a").unwrap().len(), 16);
    assert_eq!(r.hand("c").unwrap().len(), 8);
    assert_eq!(r.hand("b").unwrap().len(), 12);
    assert_eq!(cards_held(&r), DECK_SIZE);

    let r = r.pass_cards("a", "c", &first_four(&r, "a")).unwrap();
    assert_eq!(r.phase(), Phase::TrickPlay);
    assert_eq!(r.current_player().map(String::as_str), Some("a"));
    for p in players() {
        assert_eq!(r.hand(&p).unwrap().len(), 12);
    }
}

#[test]
fn meld_is_scored_from_passed_hands() {
    let r = after_passes();
    let RoundStage::Play { meld, .. } = &r.stage else {
        panic!("expected play stage");
    };
    for (seat, p) in r.players.iter().enumerate() {
        assert_eq!(meld[seat], score_meld(r.hand(p).unwrap(), Suit::Hearts));
    }
}

#[test]
fn round_plays_out_to_completion() {
    let mut r = after_passes();
    while r.phase() == Phase::TrickPlay {
        assert_eq!(cards_held(&r), DECK_SIZE);
        let player = r.current_player().cloned().unwrap();
        let legal = r.legal_cards(&player);
        assert!(!legal.is_empty());
        r = r.play_card(&player, legal[0]).unwrap();
    }
    assert_eq!(r.phase(), Phase::Complete);
    assert_eq!(r.current_player(), None);
    assert_eq!(cards_held(&r), DECK_SIZE);
    let RoundStage::Complete { tricks, .. } = &r.stage else {
        panic!("expected complete stage");
    };
    assert_eq!(tricks.len(), 12);
}

#[test]
fn operations_outside_their_stage_fail_with_their_kind() {
    let bidding = Round::new(players(), 7).unwrap();
    assert!(matches!(
        bidding.pass_cards("c", "a", &[]),
        Err(DomainError::IllegalPass(_))
    ));
    assert!(matches!(
        bidding.play_card("a", "AS".parse().unwrap()),
        Err(DomainError::InvalidPlay(_))
    ));
    assert!(bidding.legal_cards("a").is_empty());

    let passing = after_trump();
    assert!(matches!(
        passing.new_bid("a", 40),
        Err(DomainError::InvalidBid(_))
    ));
    assert!(matches!(
        passing.pass_bidding("a"),
        Err(DomainError::InvalidBid(_))
    ));

    let playing = after_passes();
    assert!(matches!(
        playing.set_trump("a", Suit::Spades),
        Err(DomainError::InvalidBid(_))
    ));
    assert!(matches!(
        playing.pass_cards("a", "c", &[]),
        Err(DomainError::IllegalPass(_))
    ));
}

#[test]
fn rejected_operation_leaves_round_unchanged() {
    let r = Round::new(players(), 7).unwrap();
    let copy = r.clone();
    assert!(r.new_bid("b", 30).is_err());
    assert_eq!(r, copy);
}
