//! Admin key guard

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Header carrying the admin API key
pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";

/// Passes when no admin key is configured, or when `X-Admin-Key` matches it.
pub struct AdminGuard;

impl FromRequestParts<AppState> for AdminGuard {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(expected) = state.admin_api_key.as_deref() else {
                return Ok(AdminGuard);
            };

            let presented = parts
                .headers
                .get(ADMIN_KEY_HEADER)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(|| ApiError::forbidden("Admin key required."))?;

            if !keys_match(presented.as_bytes(), expected.as_bytes()) {
                return Err(ApiError::forbidden("Invalid admin key."));
            }

            Ok(AdminGuard)
        }
    }
}

/// Digests both sides first so unequal lengths take the same path
fn keys_match(presented: &[u8], expected: &[u8]) -> bool {
    let presented = Sha256::digest(presented);
    let expected = Sha256::digest(expected);

    presented.ct_eq(&expected).into()
}
