pub mod candidate_repository;
pub mod citizen_repository;
pub mod election_repository;
pub mod region_repository;
pub mod voter_history_repository;

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

/// Decode a unix-seconds column
#[track_caller]
pub(crate) fn timestamp(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::InvalidRow {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
