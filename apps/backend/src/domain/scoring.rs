//! Meld: the static point value of a hand for a given trump.

use crate::domain::hand::count_card;
use crate::domain::{Card, Rank, Suit};

const NINE_OF_TRUMP: u32 = 1;
const MARRIAGE: u32 = 2;
const TRUMP_MARRIAGE: u32 = 4;
const RUN: u32 = 15;
const PINOCHLE: u32 = 4;
const DOUBLE_PINOCHLE: u32 = 30;
const RUN_RANKS: [Rank; 5] = [Rank::Ace, Rank::Ten, Rank::King, Rank::Queen, Rank::Jack];

pub fn score_meld(hand: &[Card], trump: Suit) -> u32 {
    let runs = count_runs(hand, trump);

    let mut meld = count_card(hand, Card::new(Rank::Nine, trump)) as u32 * NINE_OF_TRUMP;
    for suit in Suit::ALL {
        let marriages = count_marriages_in_suit(hand, suit);
        if suit == trump {
            meld += (marriages - runs) * TRUMP_MARRIAGE;
        } else {
            meld += marriages * MARRIAGE;
        }
    }
    meld += doubled(count_around(hand, Rank::Jack), 4);
    meld += doubled(count_around(hand, Rank::Queen), 6);
    meld += doubled(count_around(hand, Rank::King), 8);
    meld += doubled(count_around(hand, Rank::Ace), 10);
    meld += doubled(runs, RUN);
    meld += match count_pinochles(hand) {
        0 => 0,
        1 => PINOCHLE,
        _ => DOUBLE_PINOCHLE,
    };
    meld
}

/// Score for a meld that is worth ten times as much when held twice.
fn doubled(count: u32, base: u32) -> u32 {
    match count {
        0 => 0,
        1 => base,
        2 => base * 10,
        n => unreachable!("a double deck holds at most two of a meld, counted {n}"),
    }
}

pub fn count_marriages_in_suit(hand: &[Card], suit: Suit) -> u32 {
    let queens = count_card(hand, Card::new(Rank::Queen, suit));
    let kings = count_card(hand, Card::new(Rank::King, suit));
    queens.min(kings) as u32
}

/// Complete sets of `rank` across all four suits.
pub fn count_around(hand: &[Card], rank: Rank) -> u32 {
    Suit::ALL
        .iter()
        .map(|&suit| count_card(hand, Card::new(rank, suit)))
        .min()
        .unwrap_or(0) as u32
}

/// Complete Ace-Ten-King-Queen-Jack runs in trump.
pub fn count_runs(hand: &[Card], trump: Suit) -> u32 {
    RUN_RANKS
        .iter()
        .map(|&rank| count_card(hand, Card::new(rank, trump)))
        .min()
        .unwrap_or(0) as u32
}

/// Jack of Diamonds and Queen of Spades pairs.
pub fn count_pinochles(hand: &[Card]) -> u32 {
    let jacks = count_card(hand, Card::new(Rank::Jack, Suit::Diamonds));
    let queens = count_card(hand, Card::new(Rank::Queen, Suit::Spades));
    jacks.min(queens) as u32
}
