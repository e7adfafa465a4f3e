//! Serializable view of a round for clients.

use serde::Serialize;

use crate::domain::passing::PassDirection;
use crate::domain::round::{Contract, Round, RoundStage};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{PlayerId, Seat};
use crate::domain::tricks::{tricks_won, CompletedTrick};
use crate::domain::Card;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundSnapshot {
    pub players: [PlayerId; PLAYERS],
    pub current_player: Option<PlayerId>,
    pub stage: StageSnapshot,
}

/// Adjacently tagged union of phase-specific data.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "phase", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageSnapshot {
    Bidding(BiddingSnapshot),
    TrumpSelect(TrumpSelectSnapshot),
    PassingToBidWinner(PassingSnapshot),
    PassingToPartner(PassingSnapshot),
    TrickPlay(TrickSnapshot),
    Complete(CompleteSnapshot),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BiddingSnapshot {
    pub current_bid: u16,
    pub active_players: Vec<PlayerId>,
    pub hands: [Vec<Card>; PLAYERS],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrumpSelectSnapshot {
    pub bid_winner: PlayerId,
    pub bid: u16,
    pub hands: [Vec<Card>; PLAYERS],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PassingSnapshot {
    pub contract: Contract,
    pub partner: PlayerId,
    pub hands: [Vec<Card>; PLAYERS],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrickSnapshot {
    pub contract: Contract,
    pub meld: [u32; PLAYERS],
    pub trick_no: u8,
    pub leader: Seat,
    pub current_trick: Vec<Card>,
    pub hands: [Vec<Card>; PLAYERS],
    pub completed_tricks: Vec<CompletedTrick>,
    pub tricks_won: [u8; PLAYERS],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompleteSnapshot {
    pub contract: Contract,
    pub meld: [u32; PLAYERS],
    pub tricks: Vec<CompletedTrick>,
    pub tricks_won: [u8; PLAYERS],
}

pub fn snapshot(round: &Round) -> RoundSnapshot {
    let stage = match &round.stage {
        RoundStage::Bidding { bidding, hands } => match bidding.get_winner() {
            Some(winner) => StageSnapshot::TrumpSelect(TrumpSelectSnapshot {
                bid_winner: winner.clone(),
                bid: bidding.current_bid,
                hands: hands.clone(),
            }),
            None => StageSnapshot::Bidding(BiddingSnapshot {
                current_bid: bidding.current_bid,
                active_players: bidding.active_players.clone(),
                hands: hands.clone(),
            }),
        },
        RoundStage::Passing {
            contract,
            passing,
            hands,
        } => {
            let data = PassingSnapshot {
                contract: contract.clone(),
                partner: passing.partner.clone(),
                hands: hands.clone(),
            };
            match passing.expected_direction() {
                PassDirection::ToBidWinner => StageSnapshot::PassingToBidWinner(data),
                PassDirection::ToPartner => StageSnapshot::PassingToPartner(data),
            }
        }
        RoundStage::Play {
            contract,
            meld,
            play,
        } => StageSnapshot::TrickPlay(TrickSnapshot {
            contract: contract.clone(),
            meld: *meld,
            trick_no: play.trick_no,
            leader: play.leader(),
            current_trick: play.current_trick.clone(),
            hands: play.hands.clone(),
            completed_tricks: play.completed_tricks.clone(),
            tricks_won: play.tricks_won(),
        }),
        RoundStage::Complete {
            contract,
            meld,
            tricks,
        } => StageSnapshot::Complete(CompleteSnapshot {
            contract: contract.clone(),
            meld: *meld,
            tricks: tricks.clone(),
            tricks_won: tricks_won(tricks),
        }),
    };
    RoundSnapshot {
        players: round.players.clone(),
        current_player: round.current_player().cloned(),
        stage,
    }
}
