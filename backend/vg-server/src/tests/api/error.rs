use crate::ApiError;

use vg_auth::AuthError;
use vg_core::{CoreError, IdentityNumber, NewCitizen};
use vg_db::DbError;
use vg_ledger::LedgerError;

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_flat_body() {
    let (status, json) = body_json(ApiError::not_found("Election 9 not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Election 9 not found");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) =
        body_json(ApiError::validation("electionId is required.", Some("electionId"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "electionId");
}

#[tokio::test]
async fn test_external_service_returns_500() {
    let (status, json) = body_json(ApiError::external_service("Ledger is not configured.")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "EXTERNAL_SERVICE_ERROR");
    assert_eq!(json["error"], "Ledger is not configured.");
}

#[test]
fn test_status_codes_per_variant() {
    assert_eq!(ApiError::bad_request("x").status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::unauthorized("x").status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ApiError::forbidden("x").status(), StatusCode::FORBIDDEN);
    assert_eq!(ApiError::conflict("x").status(), StatusCode::CONFLICT);
    assert_eq!(
        ApiError::internal("x").status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_invalid_identity_number_converts_to_validation() {
    let core_error = IdentityNumber::parse("123").unwrap_err();
    let (status, json) = body_json(core_error.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid Identity Number format.");
    assert_eq!(json["field"], "identityNumber");
}

#[tokio::test]
async fn test_underage_converts_to_validation() {
    let core_error = NewCitizen::check_age(17).unwrap_err();
    let (status, json) = body_json(core_error.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "You must be over 18 to vote.");
    assert_eq!(json["field"], "age");
}

#[test]
fn test_core_validation_keeps_message() {
    let core_error = CoreError::Validation {
        message: "Election must end after it starts".into(),
        field: Some("endsAt".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_error: ApiError = core_error.into();

    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Election must end after it starts");
            assert_eq!(field.as_deref(), Some("endsAt"));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unique_violation_converts_to_conflict() {
    let db_error = DbError::UniqueViolation {
        message: "UNIQUE constraint failed: citizens.identity_number".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(db_error.into()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn test_db_failure_hides_details() {
    let db_error = DbError::Migration {
        message: "table citizens has no column named secret_stuff".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(db_error.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Database operation failed");
}

#[tokio::test]
async fn test_db_not_found_converts_to_404() {
    let db_error = DbError::NotFound {
        message: "citizen 9 not found while recording issuance".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(db_error.into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Resource not found");
}

#[test]
fn test_missing_header_is_forbidden() {
    let auth_error = AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    };
    let api_error: ApiError = auth_error.into();

    assert_eq!(api_error.status(), StatusCode::FORBIDDEN);
}

#[test]
fn test_expired_token_is_unauthorized() {
    let auth_error = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };
    let api_error: ApiError = auth_error.into();

    assert_eq!(api_error.status(), StatusCode::UNAUTHORIZED);
    assert!(api_error.to_string().contains("Session expired."));
}

#[tokio::test]
async fn test_ledger_execution_failure_reports_digest() {
    let ledger_error = LedgerError::Execution {
        digest: "9xDigest".into(),
        message: "MoveAbort in voting::issue_ticket".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(ledger_error.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "EXTERNAL_SERVICE_ERROR");
    assert_eq!(json["error"], "Ledger transaction 9xDigest failed");
}

#[tokio::test]
async fn test_ledger_rpc_failure_hides_node_message() {
    let ledger_error = LedgerError::Rpc {
        code: -32602,
        message: "Invalid params: internal node detail".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (_, json) = body_json(ledger_error.into()).await;

    assert_eq!(json["error"], "Ledger request failed");
}
