//! Tests for HTTP error mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::json;

use super::*;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

async fn assert_error_response(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> Error {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id not valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");

    serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds")
}

#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_the_trace_id() {
    let error = Error::internal("boom")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"secret": "x"}));

    let redacted = assert_error_response(
        error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(TRACE_ID),
    )
    .await;
    assert_eq!(redacted.code(), ErrorCode::InternalError);
    assert_eq!(redacted.message(), "Internal server error");
    assert!(redacted.details().is_none());
}

#[actix_web::test]
async fn validation_errors_keep_message_and_details() {
    let error = Error::invalid_request("validation failed")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"fieldErrors": {"name": ["Required"]}}));

    let payload =
        assert_error_response(error, StatusCode::BAD_REQUEST, Some(TRACE_ID)).await;
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), "validation failed");
    assert_eq!(
        payload.details(),
        Some(&json!({"fieldErrors": {"name": ["Required"]}}))
    );
}

#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::unauthorized("Invalid email or password.");

    let payload = assert_error_response(error, StatusCode::UNAUTHORIZED, None).await;
    assert_eq!(payload.code(), ErrorCode::Unauthorized);
    assert_eq!(payload.message(), "Invalid email or password.");
    assert_eq!(payload.trace_id(), None);
}

#[test]
fn from_actix_error_is_redacted_internal_error() {
    use actix_web::error;

    let actix_err = error::ErrorBadRequest("boom");
    let err: Error = actix_err.into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.details(), None);
}
