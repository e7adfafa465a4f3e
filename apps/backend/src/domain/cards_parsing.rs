//! Card parsing from compact token representations (e.g., "AS", "TD", "9C")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

impl Rank {
    pub(crate) const fn token(self) -> char {
        match self {
            Rank::Nine => '9',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ten => 'T',
            Rank::Ace => 'A',
        }
    }

    fn from_token(ch: char) -> Option<Self> {
        match ch {
            '9' => Some(Rank::Nine),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'T' => Some(Rank::Ten),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }
}

impl Suit {
    pub(crate) const fn token(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_token(ch: char) -> Option<Self> {
        match ch {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl Card {
    /// Two-character token, rank first: "AS", "TD", "9C".
    pub fn token(&self) -> String {
        format!("{}{}", self.rank.token(), self.suit.token())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || DomainError::ParseCard(format!("Parse card: {s}"));
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(parse_err());
        };
        let rank = Rank::from_token(rank_ch).ok_or_else(parse_err)?;
        let suit = Suit::from_token(suit_ch).ok_or_else(parse_err)?;
        Ok(Card { rank, suit })
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CLUBS" => Ok(Suit::Clubs),
            "DIAMONDS" => Ok(Suit::Diamonds),
            "HEARTS" => Ok(Suit::Hearts),
            "SPADES" => Ok(Suit::Spades),
            _ => Err(DomainError::ParseCard(format!("Invalid suit: {s}"))),
        }
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
/// Returns the first parse error if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
