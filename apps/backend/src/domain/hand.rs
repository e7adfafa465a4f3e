//! Hands are multisets of cards held in a Vec: twin cards are separate
//! entries, and removal takes exactly one instance per requested card.

use super::cards_types::{Card, Suit};
use crate::errors::domain::DomainError;

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

pub fn cards_of_suit(hand: &[Card], suit: Suit) -> Vec<Card> {
    hand.iter().copied().filter(|c| c.suit == suit).collect()
}

/// Number of instances of `card` in the hand (0, 1 or 2 in a dealt round).
pub fn count_card(hand: &[Card], card: Card) -> usize {
    hand.iter().filter(|&&c| c == card).count()
}

/// Remove one instance of each card in `cards`, in order.
///
/// Duplicates in `cards` must each match a distinct instance in the hand.
/// Fails on the first card with no remaining instance; the input hand is
/// never modified.
pub fn remove_cards_from_hand(hand: &[Card], cards: &[Card]) -> Result<Vec<Card>, DomainError> {
    let mut remaining = hand.to_vec();
    for &card in cards {
        if !take_card(&mut remaining, card) {
            return Err(DomainError::InvalidCardRemoval(format!(
                "{card} is not in hand"
            )));
        }
    }
    Ok(remaining)
}

/// Remove the first instance of `card`; false when none is left.
pub fn take_card(hand: &mut Vec<Card>, card: Card) -> bool {
    match hand.iter().position(|&c| c == card) {
        Some(pos) => {
            hand.remove(pos);
            true
        }
        None => false,
    }
}
