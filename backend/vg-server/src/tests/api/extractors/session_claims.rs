use crate::tests::{TEST_JWT_SECRET, create_test_state};
use crate::{ApiError, SessionClaims};

use vg_auth::{SessionIssuer, SessionSubject};
use vg_core::IdentityNumber;

use std::time::Duration;

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode},
};

fn token_for(citizen_id: i64, issuer: &SessionIssuer) -> String {
    let identity = IdentityNumber::parse("12345678901").unwrap();
    issuer
        .issue(&SessionSubject {
            citizen_id,
            identity_number: &identity,
            first_name: "Ayse",
        })
        .unwrap()
}

async fn extract(header: Option<String>) -> Result<SessionClaims, ApiError> {
    let state = create_test_state(None).await;
    let mut builder = Request::builder();
    if let Some(value) = header {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();

    SessionClaims::from_request_parts(&mut parts, &state).await
}

#[tokio::test]
async fn test_extractor_with_valid_bearer_token() {
    let issuer = SessionIssuer::new(TEST_JWT_SECRET, Duration::from_secs(3600));
    let token = token_for(42, &issuer);

    let claims = extract(Some(format!("Bearer {}", token))).await.unwrap();

    assert_eq!(claims.citizen_id().unwrap(), 42);
    assert_eq!(claims.0.identity_number, "12345678901");
}

#[tokio::test]
async fn test_extractor_without_header_is_forbidden() {
    let result = extract(None).await;

    let error = result.unwrap_err();
    assert_eq!(error.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_extractor_with_foreign_signature_is_unauthorized() {
    let issuer = SessionIssuer::new(
        b"some-other-secret-that-is-32-bytes!",
        Duration::from_secs(3600),
    );
    let token = token_for(42, &issuer);

    let error = extract(Some(format!("Bearer {}", token))).await.unwrap_err();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_extractor_with_garbage_token_is_unauthorized() {
    let error = extract(Some("Bearer not.a.jwt".to_string()))
        .await
        .unwrap_err();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}
