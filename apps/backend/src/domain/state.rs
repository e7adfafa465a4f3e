use serde::Serialize;

/// Player identity as supplied at round creation.
pub type PlayerId = String;

/// Rotation position 0..=3 within a round's fixed player order.
pub type Seat = usize;

/// Round progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Players bid or drop out in rotation.
    Bidding,
    /// One bidder is left and has not named trump yet.
    TrumpSelect,
    /// Partner hands four cards to the bid winner.
    PassingToBidWinner,
    /// Bid winner hands four cards back to the partner.
    PassingToPartner,
    /// Playing the twelve tricks.
    TrickPlay,
    /// All tricks played.
    Complete,
}

pub(crate) fn seat_of(players: &[PlayerId], player: &str) -> Option<Seat> {
    players.iter().position(|p| p == player)
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Phase::Bidding => "bidding",
            Phase::TrumpSelect => "trump selection",
            Phase::PassingToBidWinner => "passing to the bid winner",
            Phase::PassingToPartner => "passing to the partner",
            Phase::TrickPlay => "trick play",
            Phase::Complete => "the completed round",
        };
        f.write_str(s)
    }
}
