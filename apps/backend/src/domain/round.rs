//! One round of four-handed partnership pinochle, from the deal to the last trick.
//!
//! A [`Round`] is an immutable value: every operation borrows the current round
//! and returns the next one, so a rejected operation leaves nothing to undo.

use serde::Serialize;

use crate::domain::bidding::BiddingState;
use crate::domain::dealing::deal_hands;
use crate::domain::passing::{PassDirection, PassingState};
use crate::domain::rules::{partner_seat, MIN_OPENING_BID, PLAYERS};
use crate::domain::scoring::score_meld;
use crate::domain::state::{seat_of, Phase, PlayerId, Seat};
use crate::domain::tricks::{CompletedTrick, PlayState};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// What the auction settled: who plays the hand, for how much, in which trump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contract {
    pub winner: PlayerId,
    pub bid: u16,
    pub trump: Suit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStage {
    /// Auction running, or won with trump still to be named.
    Bidding {
        bidding: BiddingState,
        hands: [Vec<Card>; PLAYERS],
    },
    /// `hands` keeps all four; the winner's and partner's follow `passing`.
    Passing {
        contract: Contract,
        passing: PassingState,
        hands: [Vec<Card>; PLAYERS],
    },
    Play {
        contract: Contract,
        meld: [u32; PLAYERS],
        play: PlayState,
    },
    Complete {
        contract: Contract,
        meld: [u32; PLAYERS],
        tricks: Vec<CompletedTrick>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub players: [PlayerId; PLAYERS],
    pub stage: RoundStage,
}

impl Round {
    /// Deal a fresh round for four distinct, non-empty players.
    pub fn new(players: Vec<PlayerId>, seed: u64) -> Result<Self, DomainError> {
        let players = validate_players(players)?;
        Ok(Self {
            stage: RoundStage::Bidding {
                bidding: BiddingState::new(MIN_OPENING_BID, players.to_vec()),
                hands: deal_hands(seed),
            },
            players,
        })
    }

    pub fn phase(&self) -> Phase {
        match &self.stage {
            RoundStage::Bidding { bidding, .. } if bidding.is_over() => Phase::TrumpSelect,
            RoundStage::Bidding { .. } => Phase::Bidding,
            RoundStage::Passing { passing, .. } => match passing.expected_direction() {
                PassDirection::ToBidWinner => Phase::PassingToBidWinner,
                PassDirection::ToPartner => Phase::PassingToPartner,
            },
            RoundStage::Play { .. } => Phase::TrickPlay,
            RoundStage::Complete { .. } => Phase::Complete,
        }
    }

    pub fn seat_of(&self, player: &str) -> Option<Seat> {
        seat_of(&self.players, player)
    }

    pub fn contract(&self) -> Option<&Contract> {
        match &self.stage {
            RoundStage::Bidding { .. } => None,
            RoundStage::Passing { contract, .. }
            | RoundStage::Play { contract, .. }
            | RoundStage::Complete { contract, .. } => Some(contract),
        }
    }

    /// Who is expected to act next: bidder, trump caller, passer or card player.
    pub fn current_player(&self) -> Option<&PlayerId> {
        match &self.stage {
            RoundStage::Bidding { bidding, .. } => {
                bidding.current_player().or_else(|| bidding.get_winner())
            }
            RoundStage::Passing { passing, .. } => match passing.expected_direction() {
                PassDirection::ToBidWinner => Some(&passing.partner),
                PassDirection::ToPartner => Some(&passing.bid_winner),
            },
            RoundStage::Play { play, .. } => play.current_player(),
            RoundStage::Complete { .. } => None,
        }
    }

    /// Cards `player` holds; `None` for someone not at the table.
    pub fn hand(&self, player: &str) -> Option<&[Card]> {
        let seat = self.seat_of(player)?;
        let hand = match &self.stage {
            RoundStage::Bidding { hands, .. } | RoundStage::Passing { hands, .. } => &hands[seat],
            RoundStage::Play { play, .. } => &play.hands[seat],
            RoundStage::Complete { .. } => return Some(&[]),
        };
        Some(hand.as_slice())
    }

    /// Cards `player` may play now; empty outside trick play or off turn.
    pub fn legal_cards(&self, player: &str) -> Vec<Card> {
        match &self.stage {
            RoundStage::Play { play, .. } => play.legal_cards_for(player),
            _ => Vec::new(),
        }
    }

    pub fn new_bid(&self, player: &str, bid: u16) -> Result<Self, DomainError> {
        let RoundStage::Bidding { bidding, hands } = &self.stage else {
            return Err(DomainError::InvalidBid(format!(
                "Bids are not accepted during {}",
                self.phase()
            )));
        };
        Ok(self.with_stage(RoundStage::Bidding {
            bidding: bidding.new_bid(bid, player)?,
            hands: hands.clone(),
        }))
    }

    pub fn pass_bidding(&self, player: &str) -> Result<Self, DomainError> {
        let RoundStage::Bidding { bidding, hands } = &self.stage else {
            return Err(DomainError::InvalidBid(format!(
                "Bidding passes are not accepted during {}",
                self.phase()
            )));
        };
        Ok(self.with_stage(RoundStage::Bidding {
            bidding: bidding.pass_bidding(player)?,
            hands: hands.clone(),
        }))
    }

    /// Name trump and open the card exchange with the winner's partner.
    pub fn set_trump(&self, player: &str, trump: Suit) -> Result<Self, DomainError> {
        let RoundStage::Bidding { bidding, hands } = &self.stage else {
            return Err(DomainError::InvalidBid(format!(
                "Trump cannot be set during {}",
                self.phase()
            )));
        };
        let bidding = bidding.set_trump(player, trump)?;
        let Some(winner_seat) = bidding.get_winner().and_then(|w| self.seat_of(w)) else {
            return Err(DomainError::InvalidBid(format!(
                "{player} is not seated in this round"
            )));
        };
        let partner = partner_seat(winner_seat);
        let contract = Contract {
            winner: self.players[winner_seat].clone(),
            bid: bidding.current_bid,
            trump,
        };
        let passing = PassingState::new(
            self.players[winner_seat].clone(),
            self.players[partner].clone(),
            hands[winner_seat].clone(),
            hands[partner].clone(),
        );
        Ok(self.with_stage(RoundStage::Passing {
            contract,
            passing,
            hands: hands.clone(),
        }))
    }

    /// Exchange four cards; the second exchange starts trick play.
    pub fn pass_cards(
        &self,
        source: &str,
        destination: &str,
        cards: &[Card],
    ) -> Result<Self, DomainError> {
        let RoundStage::Passing {
            contract,
            passing,
            hands,
        } = &self.stage
        else {
            return Err(DomainError::IllegalPass(format!(
                "Cards cannot be passed during {}",
                self.phase()
            )));
        };
        let second_pass = passing.expected_direction() == PassDirection::ToPartner;
        let passing = passing.pass_cards(source, destination, cards)?;

        let mut hands = hands.clone();
        if let (Some(winner), Some(partner)) = (
            self.seat_of(&passing.bid_winner),
            self.seat_of(&passing.partner),
        ) {
            hands[winner] = passing.bid_winner_hand.clone();
            hands[partner] = passing.partner_hand.clone();
        }

        if !second_pass {
            return Ok(self.with_stage(RoundStage::Passing {
                contract: contract.clone(),
                passing,
                hands,
            }));
        }

        let Some(leader) = self.seat_of(&contract.winner) else {
            return Err(DomainError::IllegalPass(format!(
                "{} is not seated in this round",
                contract.winner
            )));
        };
        let meld = hands.clone().map(|hand| score_meld(&hand, contract.trump));
        Ok(self.with_stage(RoundStage::Play {
            contract: contract.clone(),
            meld,
            play: PlayState::new(self.players.clone(), hands, contract.trump, leader),
        }))
    }

    /// Play a card; the twelfth trick completes the round.
    pub fn play_card(&self, player: &str, card: Card) -> Result<Self, DomainError> {
        let RoundStage::Play {
            contract,
            meld,
            play,
        } = &self.stage
        else {
            return Err(DomainError::InvalidPlay(format!(
                "Cards cannot be played during {}",
                self.phase()
            )));
        };
        let play = play.play_card(player, card)?;
        let stage = if play.is_complete() {
            RoundStage::Complete {
                contract: contract.clone(),
                meld: *meld,
                tricks: play.completed_tricks,
            }
        } else {
            RoundStage::Play {
                contract: contract.clone(),
                meld: *meld,
                play,
            }
        };
        Ok(self.with_stage(stage))
    }

    fn with_stage(&self, stage: RoundStage) -> Self {
        Self {
            players: self.players.clone(),
            stage,
        }
    }
}

fn validate_players(players: Vec<PlayerId>) -> Result<[PlayerId; PLAYERS], DomainError> {
    if let Some(blank) = players.iter().position(|p| p.trim().is_empty()) {
        return Err(DomainError::InvalidPlayers(format!(
            "Player {} has an empty name",
            blank + 1
        )));
    }
    for (i, player) in players.iter().enumerate() {
        if players[..i].contains(player) {
            return Err(DomainError::InvalidPlayers(format!(
                "Player {player} appears more than once"
            )));
        }
    }
    let count = players.len();
    players.try_into().map_err(|_| {
        DomainError::InvalidPlayers(format!(
            "A round needs exactly {PLAYERS} players, got {count}"
        ))
    })
}
