//! Elimination auction: players raise in rotation or drop out until one is left.

use serde::Serialize;

use crate::domain::state::PlayerId;
use crate::domain::Suit;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiddingState {
    pub current_bid: u16,
    /// Players still in the auction, in rotation order.
    pub active_players: Vec<PlayerId>,
    /// Index into `active_players` of the player to act.
    pub current_player_index: usize,
    pub trump: Option<Suit>,
}

impl BiddingState {
    pub fn new(opening_bid: u16, players: Vec<PlayerId>) -> Self {
        Self {
            current_bid: opening_bid,
            active_players: players,
            current_player_index: 0,
            trump: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.active_players.len() == 1
    }

    /// The player to act, or `None` once the auction is decided.
    pub fn current_player(&self) -> Option<&PlayerId> {
        if self.is_over() {
            return None;
        }
        self.active_players.get(self.current_player_index)
    }

    pub fn get_winner(&self) -> Option<&PlayerId> {
        match self.active_players.as_slice() {
            [winner] => Some(winner),
            _ => None,
        }
    }

    /// Raise the bid and hand the turn to the next active player.
    pub fn new_bid(&self, bid: u16, player: &str) -> Result<Self, DomainError> {
        self.require_turn(player, "bid")?;
        if bid <= self.current_bid {
            return Err(DomainError::InvalidBid(format!(
                "New bid of {bid} did not exceed the current bid of {}",
                self.current_bid
            )));
        }
        Ok(Self {
            current_bid: bid,
            current_player_index: (self.current_player_index + 1) % self.active_players.len(),
            ..self.clone()
        })
    }

    /// Drop `player` out of the auction.
    ///
    /// The pointer is not moved to a neighbour first: the pre-removal index is
    /// taken modulo the shrunken length, and because the sequence compacts it
    /// lands on the next remaining player (wrapping to the front when the last
    /// player drops).
    pub fn pass_bidding(&self, player: &str) -> Result<Self, DomainError> {
        self.require_turn(player, "pass")?;
        let mut active_players = self.active_players.clone();
        active_players.remove(self.current_player_index);
        Ok(Self {
            current_player_index: self.current_player_index % active_players.len(),
            active_players,
            ..self.clone()
        })
    }

    /// Record the winner's trump choice; allowed once, after the auction.
    pub fn set_trump(&self, player: &str, trump: Suit) -> Result<Self, DomainError> {
        let Some(winner) = self.get_winner() else {
            return Err(DomainError::InvalidBid(
                "Trump cannot be set before bidding is over".into(),
            ));
        };
        if winner != player {
            return Err(DomainError::InvalidBid(format!(
                "Player {player} did not win the auction; only {winner} can set trump"
            )));
        }
        if let Some(existing) = self.trump {
            return Err(DomainError::InvalidBid(format!(
                "Trump has already been set to {existing}"
            )));
        }
        Ok(Self {
            trump: Some(trump),
            ..self.clone()
        })
    }

    fn require_turn(&self, player: &str, action: &str) -> Result<(), DomainError> {
        if let Some(winner) = self.get_winner() {
            return Err(DomainError::InvalidBid(format!(
                "Bidding is over; {winner} won at {}",
                self.current_bid
            )));
        }
        let current = &self.active_players[self.current_player_index];
        if current != player {
            return Err(DomainError::InvalidBid(format!(
                "Player {player} cannot {action} on {current}'s turn"
            )));
        }
        Ok(())
    }
}
