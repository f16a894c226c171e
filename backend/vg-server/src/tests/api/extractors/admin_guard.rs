use crate::tests::create_test_state;
use crate::{ADMIN_KEY_HEADER, AdminGuard, ApiError};

use axum::{body::Body, extract::FromRequestParts, http::Request};

const ADMIN_KEY: &str = "admin-key-for-unit-tests";

#[tokio::test]
async fn test_guard_passes_without_configured_key() {
    let state = create_test_state(None).await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AdminGuard::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_guard_accepts_matching_key() {
    let state = create_test_state(Some(ADMIN_KEY)).await;
    let request = Request::builder()
        .header(ADMIN_KEY_HEADER, ADMIN_KEY)
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AdminGuard::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_guard_rejects_missing_key() {
    let state = create_test_state(Some(ADMIN_KEY)).await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AdminGuard::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn test_guard_rejects_wrong_key() {
    let state = create_test_state(Some(ADMIN_KEY)).await;
    let request = Request::builder()
        .header(ADMIN_KEY_HEADER, "admin-key-for-unit-tesTs")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AdminGuard::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn test_guard_rejects_key_prefix() {
    let state = create_test_state(Some(ADMIN_KEY)).await;
    let request = Request::builder()
        .header(ADMIN_KEY_HEADER, "admin-key")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AdminGuard::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn test_guard_rejects_key_with_extra_suffix() {
    let state = create_test_state(Some(ADMIN_KEY)).await;
    let presented = format!("{ADMIN_KEY}-extra");
    let request = Request::builder()
        .header(ADMIN_KEY_HEADER, presented.as_str())
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AdminGuard::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}
