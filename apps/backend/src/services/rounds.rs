//! In-memory round registry: the only write path into round state.
//!
//! Rounds live in a `DashMap` keyed by sequential id. Each round sits behind
//! its own mutex; a mutation computes the next value from the current one and
//! swaps it in only on success, so concurrent callers on one round are
//! serialized and a rejected call changes nothing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::domain::{Card, Phase, PlayerId, Round, Suit};
use crate::error::AppError;
use crate::errors::{DomainError, ErrorCode};

pub type RoundId = u64;

pub struct RoundService {
    rounds: DashMap<RoundId, Arc<Mutex<Round>>>,
    next_id: AtomicU64,
    deal_seed: Option<u64>,
}

impl RoundService {
    /// `deal_seed` fixes the deal of every round created without its own seed.
    pub fn new(deal_seed: Option<u64>) -> Self {
        Self {
            rounds: DashMap::new(),
            next_id: AtomicU64::new(0),
            deal_seed,
        }
    }

    pub fn create_round(
        &self,
        players: Vec<PlayerId>,
        seed: Option<u64>,
    ) -> Result<(RoundId, Round), AppError> {
        let seed = seed
            .or(self.deal_seed)
            .unwrap_or_else(rand::random::<u64>);
        let round = Round::new(players, seed).inspect_err(|e| {
            debug!(error = %e, "Round creation rejected");
        })?;
        let round_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.rounds
            .insert(round_id, Arc::new(Mutex::new(round.clone())));
        info!(round_id, seed, players = ?round.players, "Round created");
        Ok((round_id, round))
    }

    pub fn get_round(&self, round_id: RoundId) -> Result<Round, AppError> {
        Ok(self.entry(round_id)?.lock().clone())
    }

    pub fn legal_cards(&self, round_id: RoundId, player: &str) -> Result<Vec<Card>, AppError> {
        let entry = self.entry(round_id)?;
        let round = entry.lock();
        if round.seat_of(player).is_none() {
            return Err(AppError::not_found(
                ErrorCode::NotFound,
                format!("Player {player} is not in round {round_id}"),
            ));
        }
        Ok(round.legal_cards(player))
    }

    pub fn new_bid(&self, round_id: RoundId, player: &str, bid: u16) -> Result<Round, AppError> {
        debug!(round_id, player, bid, "Submitting bid");
        self.update(round_id, "bid", |round| round.new_bid(player, bid))
    }

    pub fn pass_bidding(&self, round_id: RoundId, player: &str) -> Result<Round, AppError> {
        debug!(round_id, player, "Passing in the auction");
        self.update(round_id, "pass_bidding", |round| round.pass_bidding(player))
    }

    pub fn set_trump(
        &self,
        round_id: RoundId,
        player: &str,
        trump: Suit,
    ) -> Result<Round, AppError> {
        debug!(round_id, player, trump = %trump, "Setting trump");
        self.update(round_id, "set_trump", |round| round.set_trump(player, trump))
    }

    pub fn pass_cards(
        &self,
        round_id: RoundId,
        source: &str,
        destination: &str,
        cards: &[Card],
    ) -> Result<Round, AppError> {
        debug!(round_id, source, destination, cards = ?cards, "Passing cards");
        self.update(round_id, "pass_cards", |round| {
            round.pass_cards(source, destination, cards)
        })
    }

    pub fn play_card(&self, round_id: RoundId, player: &str, card: Card) -> Result<Round, AppError> {
        debug!(round_id, player, card = %card, "Playing card");
        self.update(round_id, "play_card", |round| round.play_card(player, card))
    }

    fn entry(&self, round_id: RoundId) -> Result<Arc<Mutex<Round>>, AppError> {
        self.rounds
            .get(&round_id)
            .map(|e| e.value().clone())
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::RoundNotFound,
                    format!("Round {round_id} not found"),
                )
            })
    }

    fn update<F>(&self, round_id: RoundId, operation: &str, f: F) -> Result<Round, AppError>
    where
        F: FnOnce(&Round) -> Result<Round, DomainError>,
    {
        let entry = self.entry(round_id)?;
        let mut current = entry.lock();
        let before = current.phase();
        let next = f(&*current).inspect_err(|e| {
            debug!(round_id, operation, error = %e, "Operation rejected");
        })?;
        let after = next.phase();
        *current = next.clone();
        drop(current);

        if before != after {
            info!(round_id, from = %before, to = %after, "Round phase changed");
        }
        if after == Phase::Complete && before != Phase::Complete {
            info!(round_id, "Round complete");
        }
        Ok(next)
    }
}
