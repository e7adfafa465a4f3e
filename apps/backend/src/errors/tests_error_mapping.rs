// Errors raised by real round operations keep their code and status once mapped.
use crate::domain::{Card, Rank, Round, Suit};
use crate::{AppError, ErrorCode};

fn round() -> Round {
    Round::new(
        ["n", "e", "s", "w"].map(String::from).to_vec(),
        11,
    )
    .unwrap()
}

fn mapped(result: Result<Round, crate::errors::DomainError>) -> AppError {
    result.unwrap_err().into()
}

#[test]
fn bidding_failures_are_invalid_bid() {
    let r = round();
    let app = mapped(r.new_bid("e", 30));
    assert_eq!(app.code(), ErrorCode::InvalidBid);
    assert_eq!(app.status().as_u16(), 422);

    let app = mapped(r.set_trump("n", Suit::Spades));
    assert_eq!(app.code(), ErrorCode::InvalidBid);
}

#[test]
fn stage_mismatch_follows_the_operation() {
    let r = round();
    let card = Card {
        rank: Rank::Ace,
        suit: Suit::Spades,
    };

    let app = mapped(r.pass_cards("s", "n", &[card; 4]));
    assert_eq!(app.code(), ErrorCode::IllegalPass);
    assert_eq!(app.status().as_u16(), 422);
    assert!(app.detail().contains("bidding"), "{}", app.detail());

    let app = mapped(r.play_card("n", card));
    assert_eq!(app.code(), ErrorCode::InvalidPlay);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn bad_player_lists_are_client_errors() {
    let err = Round::new(vec!["a".into(), "b".into()], 0).unwrap_err();
    let app: AppError = err.into();
    assert_eq!(app.code(), ErrorCode::InvalidPlayers);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn card_tokens_that_do_not_parse_are_client_errors() {
    let err = "XX".parse::<Card>().unwrap_err();
    let app: AppError = err.into();
    assert_eq!(app.code(), ErrorCode::ParseCard);
    assert_eq!(app.status().as_u16(), 400);
}
