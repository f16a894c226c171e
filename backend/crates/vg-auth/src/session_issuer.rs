use crate::{AuthError, Claims, Result as AuthErrorResult, SessionSubject};

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Clock skew tolerance in seconds. Tokens fail verification once `exp`
/// passes.
pub const DEFAULT_LEEWAY_SECS: u64 = 0;

/// Issues and verifies HS256 session tokens.
///
/// Tokens are bearer tokens with a fixed lifetime. Nothing is stored
/// server-side, so a token cannot be revoked before it expires: logging out
/// only deletes the client's cookie.
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionIssuer {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self::with_leeway(secret, ttl, DEFAULT_LEEWAY_SECS)
    }

    pub fn with_leeway(secret: &[u8], ttl: Duration, leeway_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = leeway_secs;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token with the configured lifetime
    #[track_caller]
    pub fn issue(&self, subject: &SessionSubject<'_>) -> AuthErrorResult<String> {
        self.issue_with_ttl(subject, self.ttl)
    }

    #[track_caller]
    pub fn issue_with_ttl(
        &self,
        subject: &SessionSubject<'_>,
        ttl: Duration,
    ) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.citizen_id.to_string(),
            identity_number: subject.identity_number.to_string(),
            first_name: subject.first_name.to_string(),
            iat: now,
            exp: now.saturating_add(i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify a token and return its claims
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Pull the token out of an `Authorization: Bearer <token>` header value
    #[track_caller]
    pub fn bearer_token(header_value: Option<&str>) -> AuthErrorResult<&str> {
        let value = header_value.ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;

        match value.split_once(' ') {
            Some((scheme, token))
                if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() =>
            {
                Ok(token.trim())
            }
            _ => Err(AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
