//! Trick resolution: whether one card beats another, and who takes a trick.

use super::cards_types::{Card, Suit};

/// True when `b`, played after `a`, beats it.
///
/// Same suit: higher rank wins. Different suits: only a trump `b` wins. An
/// off-suit, non-trump card never beats, whatever its rank.
pub fn second_card_wins(a: Card, b: Card, trump: Suit) -> bool {
    if a.suit == b.suit {
        b.rank > a.rank
    } else {
        b.suit == trump
    }
}

/// Position (0-based) of the winning card within `trick`.
///
/// Left-to-right reduction that only replaces the running winner on a strict
/// beat, so the first played of two identical cards keeps the trick.
/// Returns `None` for an empty trick.
pub fn winner_position_in_trick(trick: &[Card], trump: Suit) -> Option<usize> {
    let (first, rest) = trick.split_first()?;
    let (best, _) = rest
        .iter()
        .enumerate()
        .fold((0, *first), |(best, running), (i, &card)| {
            if second_card_wins(running, card, trump) {
                (i + 1, card)
            } else {
                (best, running)
            }
        });
    Some(best)
}

pub fn winning_card(trick: &[Card], trump: Suit) -> Option<Card> {
    winner_position_in_trick(trick, trump).map(|i| trick[i])
}
