//! Round registry HTTP routes. Cards travel as tokens (`"AS"`, `"TD"`),
//! suits as `"CLUBS" | "DIAMONDS" | "HEARTS" | "SPADES"`.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::{snapshot, Card, Round, RoundSnapshot, Suit};
use crate::error::AppError;
use crate::extractors::{JsonBody, RoundIdPath};
use crate::services::RoundId;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateRoundRequest {
    pub players: Vec<String>,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct CreateRoundResponse {
    pub round_id: RoundId,
    pub round: RoundSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct BidRequest {
    pub player: String,
    pub bid: u16,
}

#[derive(Debug, Deserialize)]
pub struct PlayerRequest {
    pub player: String,
}

#[derive(Debug, Deserialize)]
pub struct TrumpRequest {
    pub player: String,
    pub trump: String,
}

#[derive(Debug, Deserialize)]
pub struct PassCardsRequest {
    pub source: String,
    pub destination: String,
    pub cards: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlayCardRequest {
    pub player: String,
    pub card: String,
}

#[derive(Debug, Deserialize)]
struct PlayerPath {
    player: String,
}

#[derive(Debug, Serialize)]
pub struct LegalCardsResponse {
    pub player: String,
    pub legal: Vec<Card>,
}

fn ok_snapshot(round: &Round) -> HttpResponse {
    HttpResponse::Ok().json(snapshot(round))
}

/// POST /api/rounds
async fn create_round(
    state: web::Data<AppState>,
    body: JsonBody<CreateRoundRequest>,
) -> Result<HttpResponse, AppError> {
    let CreateRoundRequest { players, seed } = body.into_inner();
    let (round_id, round) = state.rounds.create_round(players, seed)?;
    Ok(HttpResponse::Created().json(CreateRoundResponse {
        round_id,
        round: snapshot(&round),
    }))
}

/// GET /api/rounds/{round_id}
async fn get_round(
    state: web::Data<AppState>,
    round_id: RoundIdPath,
) -> Result<HttpResponse, AppError> {
    Ok(ok_snapshot(&state.rounds.get_round(round_id.0)?))
}

/// GET /api/rounds/{round_id}/players/{player}/legal
async fn legal_cards(
    state: web::Data<AppState>,
    round_id: RoundIdPath,
    path: web::Path<PlayerPath>,
) -> Result<web::Json<LegalCardsResponse>, AppError> {
    let player = path.into_inner().player;
    let legal = state.rounds.legal_cards(round_id.0, &player)?;
    Ok(web::Json(LegalCardsResponse { player, legal }))
}

/// POST /api/rounds/{round_id}/bids
async fn new_bid(
    state: web::Data<AppState>,
    round_id: RoundIdPath,
    body: JsonBody<BidRequest>,
) -> Result<HttpResponse, AppError> {
    let round = state.rounds.new_bid(round_id.0, &body.player, body.bid)?;
    Ok(ok_snapshot(&round))
}

/// POST /api/rounds/{round_id}/bids/pass
async fn pass_bidding(
    state: web::Data<AppState>,
    round_id: RoundIdPath,
    body: JsonBody<PlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let round = state.rounds.pass_bidding(round_id.0, &body.player)?;
    Ok(ok_snapshot(&round))
}

/// POST /api/rounds/{round_id}/trump
async fn set_trump(
    state: web::Data<AppState>,
    round_id: RoundIdPath,
    body: JsonBody<TrumpRequest>,
) -> Result<HttpResponse, AppError> {
    let trump: Suit = body.trump.parse()?;
    let round = state.rounds.set_trump(round_id.0, &body.player, trump)?;
    Ok(ok_snapshot(&round))
}

/// POST /api/rounds/{round_id}/passes
async fn pass_cards(
    state: web::Data<AppState>,
    round_id: RoundIdPath,
    body: JsonBody<PassCardsRequest>,
) -> Result<HttpResponse, AppError> {
    let cards = try_parse_cards(&body.cards)?;
    let round = state
        .rounds
        .pass_cards(round_id.0, &body.source, &body.destination, &cards)?;
    Ok(ok_snapshot(&round))
}

/// POST /api/rounds/{round_id}/plays
async fn play_card(
    state: web::Data<AppState>,
    round_id: RoundIdPath,
    body: JsonBody<PlayCardRequest>,
) -> Result<HttpResponse, AppError> {
    let card: Card = body.card.parse()?;
    let round = state.rounds.play_card(round_id.0, &body.player, card)?;
    Ok(ok_snapshot(&round))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_round))
        .route("/{round_id}", web::get().to(get_round))
        .route(
            "/{round_id}/players/{player}/legal",
            web::get().to(legal_cards),
        )
        .route("/{round_id}/bids", web::post().to(new_bid))
        .route("/{round_id}/bids/pass", web::post().to(pass_bidding))
        .route("/{round_id}/trump", web::post().to(set_trump))
        .route("/{round_id}/passes", web::post().to(pass_cards))
        .route("/{round_id}/plays", web::post().to(play_card));
}
