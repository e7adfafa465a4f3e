//! Error codes for the pinochle backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Round id in the path is not a non-negative integer
    InvalidRoundId,
    /// Round creation needs four distinct player names
    InvalidPlayers,
    /// Bid rejected by the auction
    InvalidBid,
    /// Card pass rejected
    IllegalPass,
    /// Card play rejected
    InvalidPlay,
    /// Card token could not be parsed
    ParseCard,
    /// Malformed request body or parameters
    BadRequest,

    // Resource Not Found
    /// No round is registered under the id
    RoundNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRoundId => "INVALID_ROUND_ID",
            Self::InvalidPlayers => "INVALID_PLAYERS",
            Self::InvalidBid => "INVALID_BID",
            Self::IllegalPass => "ILLEGAL_PASS",
            Self::InvalidPlay => "INVALID_PLAY",
            Self::ParseCard => "PARSE_CARD",
            Self::BadRequest => "BAD_REQUEST",

            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
