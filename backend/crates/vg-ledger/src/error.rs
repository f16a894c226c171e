use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from talking to the ledger
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// JSON-RPC error object returned by the node
    #[error("RPC error: {message} (code: {code}) {location}")]
    Rpc {
        code: i64,
        message: String,
        location: ErrorLocation,
    },

    /// Transaction was executed but its effects report failure
    #[error("Transaction {digest} failed: {message} {location}")]
    Execution {
        digest: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    /// Transaction bytes that do not decode as `TransactionData`
    #[error("BCS error: {message} {location}")]
    Bcs {
        message: String,
        location: ErrorLocation,
        #[source]
        source: bcs::Error,
    },

    #[error("Invalid admin key: {message} {location}")]
    InvalidKey {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected ledger response: {message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl LedgerError {
    #[track_caller]
    pub fn invalid_key<S: Into<String>>(message: S) -> Self {
        LedgerError::InvalidKey {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        LedgerError::InvalidResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for LedgerError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        LedgerError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<bcs::Error> for LedgerError {
    #[track_caller]
    fn from(err: bcs::Error) -> Self {
        LedgerError::Bcs {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type LedgerErrorResult<T> = std::result::Result<T, LedgerError>;
