//! Domain layer: the pinochle round engine as pure value transformations.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod hand;
pub mod passing;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_round;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::BiddingState;
pub use cards_logic::{second_card_wins, winner_position_in_trick, winning_card};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal_hands, full_deck};
pub use passing::{PassDirection, PassingState};
pub use round::{Contract, Round, RoundStage};
pub use scoring::score_meld;
pub use snapshot::{snapshot, RoundSnapshot};
pub use state::{Phase, PlayerId, Seat};
pub use tricks::{legal_cards, CompletedTrick, PlayState};
