use crate::{AuthError, Result as AuthErrorResult};

use vg_core::IdentityNumber;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (citizen id)
    pub sub: String,
    /// 11-digit identity number of the citizen
    pub identity_number: String,
    #[serde(default)]
    pub first_name: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.parse::<i64>().is_err() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub must be a numeric citizen id".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if IdentityNumber::parse(&self.identity_number).is_err() {
            return Err(AuthError::InvalidClaim {
                claim: "identity_number".to_string(),
                message: "identity_number must be 11 digits".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Citizen id carried in `sub`
    #[track_caller]
    pub fn citizen_id(&self) -> AuthErrorResult<i64> {
        self.sub.parse().map_err(|_| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: "sub must be a numeric citizen id".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Who a session is being issued for
#[derive(Debug, Clone, Copy)]
pub struct SessionSubject<'a> {
    pub citizen_id: i64,
    pub identity_number: &'a IdentityNumber,
    pub first_name: &'a str,
}
