//! Bearer-token session extractor

use crate::{ApiError, AppState};

use vg_auth::{Claims, SessionIssuer};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Verified session claims from `Authorization: Bearer <token>`.
///
/// Rejects with 403 when the header is absent and 401 when the token is
/// malformed, forged or expired.
#[derive(Debug, Clone)]
pub struct SessionClaims(pub Claims);

impl SessionClaims {
    pub fn citizen_id(&self) -> Result<i64, ApiError> {
        Ok(self.0.citizen_id()?)
    }
}

impl FromRequestParts<AppState> for SessionClaims {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .map(|value| value.to_str().unwrap_or_default());

            let token = SessionIssuer::bearer_token(header)?;
            let claims = state.sessions.verify(token)?;

            Ok(SessionClaims(claims))
        }
    }
}
