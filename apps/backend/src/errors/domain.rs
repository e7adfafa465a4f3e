//! Domain-level error type used by the round engine.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use thiserror::Error;

/// Every variant is a local validation failure raised at the violated
/// precondition; none of them is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Wrong turn, non-increasing bid, auction already decided, or a bad trump selection.
    #[error("invalid bid: {0}")]
    InvalidBid(String),
    /// Wrong pair or direction, wrong pass size, wrong hand size, or card not held.
    #[error("illegal pass: {0}")]
    IllegalPass(String),
    /// Wrong turn or a card outside the legal set.
    #[error("invalid play: {0}")]
    InvalidPlay(String),
    /// Requested card instance is absent from the hand.
    ///
    /// Callers treat this as an invariant violation once legal-set filtering
    /// has run; it only surfaces directly from the hand helpers.
    #[error("invalid card removal: {0}")]
    InvalidCardRemoval(String),
    #[error("parse card: {0}")]
    ParseCard(String),
    /// Round creation needs exactly four distinct player identities.
    #[error("invalid players: {0}")]
    InvalidPlayers(String),
}

impl DomainError {
    /// Human-readable detail without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::InvalidBid(d)
            | DomainError::IllegalPass(d)
            | DomainError::InvalidPlay(d)
            | DomainError::InvalidCardRemoval(d)
            | DomainError::ParseCard(d)
            | DomainError::InvalidPlayers(d) => d,
        }
    }
}
