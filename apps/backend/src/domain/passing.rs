//! Card exchange between the bid winner and their partner.
//!
//! The partner passes four cards to the winner first; the winner then passes
//! four back. Hand sizes go 12/12 -> 16/8 -> 12/12.

use serde::Serialize;

use crate::domain::hand::take_card;
use crate::domain::rules::{HAND_SIZE, PASS_SIZE};
use crate::domain::state::PlayerId;
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Which of the two passes is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassDirection {
    /// Partner hands cards to the bid winner.
    ToBidWinner,
    /// Bid winner hands cards back to the partner.
    ToPartner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassingState {
    pub bid_winner: PlayerId,
    pub partner: PlayerId,
    pub bid_winner_hand: Vec<Card>,
    pub partner_hand: Vec<Card>,
}

impl PassingState {
    pub fn new(
        bid_winner: PlayerId,
        partner: PlayerId,
        bid_winner_hand: Vec<Card>,
        partner_hand: Vec<Card>,
    ) -> Self {
        Self {
            bid_winner,
            partner,
            bid_winner_hand,
            partner_hand,
        }
    }

    /// The pass currently due, read from the winner's hand size.
    pub fn expected_direction(&self) -> PassDirection {
        if self.bid_winner_hand.len() == HAND_SIZE + PASS_SIZE {
            PassDirection::ToPartner
        } else {
            PassDirection::ToBidWinner
        }
    }

    fn endpoints(&self, direction: PassDirection) -> (&PlayerId, &PlayerId) {
        match direction {
            PassDirection::ToBidWinner => (&self.partner, &self.bid_winner),
            PassDirection::ToPartner => (&self.bid_winner, &self.partner),
        }
    }

    /// Move exactly four cards from `source` to `destination`.
    pub fn pass_cards(
        &self,
        source: &str,
        destination: &str,
        cards: &[Card],
    ) -> Result<Self, DomainError> {
        let direction = if source == self.partner && destination == self.bid_winner {
            PassDirection::ToBidWinner
        } else if source == self.bid_winner && destination == self.partner {
            PassDirection::ToPartner
        } else {
            let (from, to) = self.endpoints(self.expected_direction());
            return Err(DomainError::IllegalPass(format!(
                "Illegal pass from {source} to {destination}; the only legal pass is from {from} to {to}"
            )));
        };

        let (winner_needs, partner_needs) = match direction {
            PassDirection::ToBidWinner => (HAND_SIZE, HAND_SIZE),
            PassDirection::ToPartner => (HAND_SIZE + PASS_SIZE, HAND_SIZE - PASS_SIZE),
        };
        require_hand_size(&self.bid_winner, &self.bid_winner_hand, winner_needs)?;
        require_hand_size(&self.partner, &self.partner_hand, partner_needs)?;

        if cards.len() != PASS_SIZE {
            return Err(DomainError::IllegalPass(format!(
                "Passes must be exactly {PASS_SIZE} cards, not {}",
                cards.len()
            )));
        }

        let (source_hand, destination_hand) = match direction {
            PassDirection::ToBidWinner => (&self.partner_hand, &self.bid_winner_hand),
            PassDirection::ToPartner => (&self.bid_winner_hand, &self.partner_hand),
        };
        let mut source_after = source_hand.clone();
        for &card in cards {
            if !take_card(&mut source_after, card) {
                return Err(DomainError::IllegalPass(format!(
                    "{card} is not in hand to pass"
                )));
            }
        }
        let mut destination_after = destination_hand.clone();
        destination_after.extend_from_slice(cards);

        let (bid_winner_hand, partner_hand) = match direction {
            PassDirection::ToBidWinner => (destination_after, source_after),
            PassDirection::ToPartner => (source_after, destination_after),
        };
        Ok(Self {
            bid_winner_hand,
            partner_hand,
            ..self.clone()
        })
    }
}

fn require_hand_size(player: &str, hand: &[Card], needed: usize) -> Result<(), DomainError> {
    if hand.len() != needed {
        return Err(DomainError::IllegalPass(format!(
            "{player} must have {needed} cards in hand to pass, has {}",
            hand.len()
        )));
    }
    Ok(())
}
