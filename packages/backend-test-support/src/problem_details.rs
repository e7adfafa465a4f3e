//! Problem Details assertions for backend tests.
//!
//! Mirrors the backend's error body without depending on backend types, so
//! integration tests check the wire contract rather than the Rust structs.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Decoded `application/problem+json` body.
#[derive(Debug, Deserialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert that `resp` is a Problem Details error with `expected_status` and
/// `expected_code`, and that the body's trace id matches the `x-trace-id`
/// header. Returns the decoded body for further checks.
pub async fn assert_problem<B>(
    resp: ServiceResponse<B>,
    expected_status: StatusCode,
    expected_code: &str,
) -> Problem
where
    B: MessageBody,
{
    assert_eq!(resp.status(), expected_status, "unexpected status");

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    assert_eq!(content_type.as_deref(), Some("application/problem+json"));

    let trace_header = resp
        .headers()
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8")
        .to_owned();

    let body = actix_web::test::read_body(resp).await;
    let problem: Problem =
        serde_json::from_slice(&body).expect("body should be Problem Details JSON");

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert!(
        problem.type_.ends_with(expected_code),
        "type '{}' should name the code",
        problem.type_
    );
    assert_eq!(
        problem.trace_id, trace_header,
        "trace_id in body should match x-trace-id header"
    );
    problem
}

/// Like [`assert_problem`], additionally requiring `detail` to contain `needle`.
pub async fn assert_problem_detail<B>(
    resp: ServiceResponse<B>,
    expected_status: StatusCode,
    expected_code: &str,
    needle: &str,
) -> Problem
where
    B: MessageBody,
{
    let problem = assert_problem(resp, expected_status, expected_code).await;
    assert!(
        problem.detail.contains(needle),
        "expected detail to contain '{needle}', got '{}'",
        problem.detail
    );
    problem
}
