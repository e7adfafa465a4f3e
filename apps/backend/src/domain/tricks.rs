use serde::Serialize;

use crate::domain::cards_logic::{second_card_wins, winner_position_in_trick, winning_card};
use crate::domain::hand::{cards_of_suit, hand_has_suit, take_card};
use crate::domain::rules::{next_seat, PLAYERS, TRICKS_PER_ROUND};
use crate::domain::state::{seat_of, PlayerId, Seat};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// A finished trick. Seats are rotation positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedTrick {
    pub leader: Seat,
    pub cards: [Card; PLAYERS],
    pub winner: Seat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayState {
    /// One hand per rotation position.
    pub hands: [Vec<Card>; PLAYERS],
    pub players: [PlayerId; PLAYERS],
    /// Seat whose turn it is; after a trick completes, the trick winner.
    pub player_index: Seat,
    pub trump: Suit,
    /// Cards played so far in the open trick (0..=3); cleared when the 4th lands.
    pub current_trick: Vec<Card>,
    /// Completed tricks, 0..=12.
    pub trick_no: u8,
    pub completed_tricks: Vec<CompletedTrick>,
}

/// Cards the holder of `hand` may play onto `current_trick`.
///
/// Leading allows anything. Otherwise the player follows the led suit, or
/// failing that plays trump, and among those must beat the trick's current
/// winner when any of them can. With neither suit nor trump the whole hand is
/// open. Sorted, one entry per distinct card.
pub fn legal_cards(hand: &[Card], current_trick: &[Card], trump: Suit) -> Vec<Card> {
    let candidates = match current_trick.first() {
        None => hand.to_vec(),
        Some(led) if hand_has_suit(hand, led.suit) => {
            must_beat(cards_of_suit(hand, led.suit), current_trick, trump)
        }
        Some(_) if hand_has_suit(hand, trump) => {
            must_beat(cards_of_suit(hand, trump), current_trick, trump)
        }
        Some(_) => hand.to_vec(),
    };
    let mut legal = candidates;
    legal.sort();
    legal.dedup();
    legal
}

fn must_beat(candidates: Vec<Card>, current_trick: &[Card], trump: Suit) -> Vec<Card> {
    let Some(winner) = winning_card(current_trick, trump) else {
        return candidates;
    };
    let winning: Vec<Card> = candidates
        .iter()
        .copied()
        .filter(|&c| second_card_wins(winner, c, trump))
        .collect();
    if winning.is_empty() {
        candidates
    } else {
        winning
    }
}

impl PlayState {
    /// Start trick play with `leader` to lead the first trick.
    pub fn new(
        players: [PlayerId; PLAYERS],
        hands: [Vec<Card>; PLAYERS],
        trump: Suit,
        leader: Seat,
    ) -> Self {
        Self {
            hands,
            players,
            player_index: leader,
            trump,
            current_trick: Vec::new(),
            trick_no: 0,
            completed_tricks: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.trick_no >= TRICKS_PER_ROUND
    }

    /// The player to act, or `None` once every trick is played.
    pub fn current_player(&self) -> Option<&PlayerId> {
        if self.is_complete() {
            return None;
        }
        self.players.get(self.player_index)
    }

    /// Seat that led the open trick (the current player when nothing is played yet).
    pub fn leader(&self) -> Seat {
        (self.player_index + PLAYERS - self.current_trick.len()) % PLAYERS
    }

    pub fn hand(&self, player: &str) -> Option<&[Card]> {
        seat_of(&self.players, player).map(|seat| self.hands[seat].as_slice())
    }

    /// Legal cards for `player`; empty when it is not their turn.
    pub fn legal_cards_for(&self, player: &str) -> Vec<Card> {
        match self.current_player() {
            Some(current) if current == player => legal_cards(
                &self.hands[self.player_index],
                &self.current_trick,
                self.trump,
            ),
            _ => Vec::new(),
        }
    }

    /// Play `card` from `player`'s hand into the open trick.
    pub fn play_card(&self, player: &str, card: Card) -> Result<Self, DomainError> {
        if self.is_complete() {
            return Err(DomainError::InvalidPlay(format!(
                "all {TRICKS_PER_ROUND} tricks have been played"
            )));
        }
        let current = &self.players[self.player_index];
        if current != player {
            return Err(DomainError::InvalidPlay(format!(
                "{player} cannot play on {current}'s turn"
            )));
        }

        let closer = self.player_index;
        let hand = &self.hands[closer];
        if !legal_cards(hand, &self.current_trick, self.trump).contains(&card) {
            return Err(DomainError::InvalidPlay("Invalid card played".into()));
        }

        let mut next = self.clone();
        if !take_card(&mut next.hands[closer], card) {
            return Err(DomainError::InvalidCardRemoval(format!(
                "{player} does not have a {card} in hand"
            )));
        }
        next.current_trick.push(card);

        if next.current_trick.len() < PLAYERS {
            next.player_index = next_seat(closer);
            return Ok(next);
        }

        let Some(position) = winner_position_in_trick(&next.current_trick, self.trump) else {
            return Err(DomainError::InvalidPlay("trick has no cards".into()));
        };
        let winner = (position + closer + 1) % PLAYERS;
        let leader = next_seat(closer);
        let cards: [Card; PLAYERS] = std::mem::take(&mut next.current_trick)
            .try_into()
            .map_err(|_| DomainError::InvalidPlay("trick must hold four cards".into()))?;
        next.completed_tricks.push(CompletedTrick {
            leader,
            cards,
            winner,
        });
        next.trick_no += 1;
        next.player_index = winner;
        Ok(next)
    }

    /// Tricks taken per seat.
    pub fn tricks_won(&self) -> [u8; PLAYERS] {
        tricks_won(&self.completed_tricks)
    }
}

pub fn tricks_won(tricks: &[CompletedTrick]) -> [u8; PLAYERS] {
    let mut won = [0u8; PLAYERS];
    for trick in tricks {
        won[trick.winner] += 1;
    }
    won
}
