use crate::{CoreError, IdentityNumber, MIN_VOTING_AGE, Result as CoreErrorResult, WalletAddress};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Free-form postal address, every part optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub neighborhood: Option<String>,
}

/// A registered citizen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citizen {
    pub id: i64,
    pub identity_number: IdentityNumber,
    pub first_name: String,
    pub last_name: String,
    pub address: PostalAddress,
    pub age: i64,
    /// Argon2 PHC string, never serialized to clients
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub wallet_address: Option<WalletAddress>,
    pub ticket_issued: bool,
    pub created_at: DateTime<Utc>,
}

impl Citizen {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A citizen row about to be inserted
#[derive(Debug, Clone)]
pub struct NewCitizen {
    pub identity_number: IdentityNumber,
    pub first_name: String,
    pub last_name: String,
    pub address: PostalAddress,
    pub age: i64,
    pub password_hash: String,
    pub wallet_address: Option<WalletAddress>,
}

impl NewCitizen {
    /// Enforce the minimum voting age
    #[track_caller]
    pub fn check_age(age: i64) -> CoreErrorResult<()> {
        if age < MIN_VOTING_AGE {
            return Err(CoreError::Underage {
                age,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
