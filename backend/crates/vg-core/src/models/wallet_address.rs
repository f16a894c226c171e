use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Hex digits in a full-length ledger address (32 bytes)
const ADDRESS_HEX_LENGTH: usize = 64;

/// A ledger account address in canonical form: `0x` followed by 64 lowercase
/// hex digits.
///
/// Short forms (`0x2`) are left-padded with zeros. Ledger object ids share
/// the same shape, see [`parse_object_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    #[track_caller]
    pub fn parse(value: &str) -> CoreErrorResult<Self> {
        normalize(value).map(Self).ok_or_else(|| CoreError::InvalidWalletAddress {
            value: value.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Build from a raw 32-byte address
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validate and normalize a ledger object id
#[track_caller]
pub fn parse_object_id(field: &str, value: &str) -> CoreErrorResult<String> {
    normalize(value).ok_or_else(|| CoreError::Validation {
        message: format!("{field} must be a 0x-prefixed hex object id"),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn normalize(value: &str) -> Option<String> {
    let digits = value.trim().strip_prefix("0x")?;

    if digits.is_empty()
        || digits.len() > ADDRESS_HEX_LENGTH
        || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return None;
    }

    Some(format!(
        "0x{:0>width$}",
        digits.to_ascii_lowercase(),
        width = ADDRESS_HEX_LENGTH
    ))
}

impl TryFrom<String> for WalletAddress {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WalletAddress> for String {
    fn from(value: WalletAddress) -> Self {
        value.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
