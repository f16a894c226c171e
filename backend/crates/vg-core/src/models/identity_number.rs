use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Number of digits in a national identity number
pub const IDENTITY_NUMBER_LENGTH: usize = 11;

/// An 11-digit national identity number.
///
/// The inner string is guaranteed to be exactly [`IDENTITY_NUMBER_LENGTH`]
/// ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityNumber(String);

impl IdentityNumber {
    #[track_caller]
    pub fn parse(value: &str) -> CoreErrorResult<Self> {
        let valid =
            value.len() == IDENTITY_NUMBER_LENGTH && value.bytes().all(|b| b.is_ascii_digit());

        if !valid {
            return Err(CoreError::InvalidIdentityNumber {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IdentityNumber {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IdentityNumber> for String {
    fn from(value: IdentityNumber) -> Self {
        value.0
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
