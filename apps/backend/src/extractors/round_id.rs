use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::RoundId;

/// `{round_id}` path segment parsed as a non-negative integer.
///
/// Existence is checked by the service, which answers `ROUND_NOT_FOUND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundIdPath(pub RoundId);

impl FromRequest for RoundIdPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_round_id(req.match_info().get("round_id")))
    }
}

fn parse_round_id(raw: Option<&str>) -> Result<RoundIdPath, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidRoundId, "Missing round_id parameter")
    })?;
    raw.parse::<RoundId>().map(RoundIdPath).map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidRoundId,
            format!("Invalid round id: {raw}"),
        )
    })
}
