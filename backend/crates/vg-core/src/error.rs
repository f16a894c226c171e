use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid identity number: {value} {location}")]
    InvalidIdentityNumber {
        value: String,
        location: ErrorLocation,
    },

    #[error("Citizen is underage: {age} {location}")]
    Underage { age: i64, location: ErrorLocation },

    #[error("Invalid wallet address: {value} {location}")]
    InvalidWalletAddress {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Name of the offending input field, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidIdentityNumber { .. } => Some("identityNumber"),
            Self::Underage { .. } => Some("age"),
            Self::InvalidWalletAddress { .. } => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
