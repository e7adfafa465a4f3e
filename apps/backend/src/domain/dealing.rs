//! Deterministic card dealing for the 48-card pinochle deck.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS};
use crate::domain::{Card, Rank, Suit};

/// The double deck in suit-then-rank order: every card appears twice.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for _ in 0..2 {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                deck.push(Card { rank, suit });
            }
        }
    }
    deck
}

/// Shuffle the full deck with a seeded ChaCha RNG and deal 12 cards to each
/// of the four players.
///
/// Same seed gives the same deal. Hands are sorted for convenience.
pub fn deal_hands(seed: u64) -> [Vec<Card>; PLAYERS] {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (hand_slot, chunk) in hands.iter_mut().zip(deck.chunks(HAND_SIZE)) {
        let mut hand = chunk.to_vec();
        hand.sort();
        *hand_slot = hand;
    }
    hands
}
